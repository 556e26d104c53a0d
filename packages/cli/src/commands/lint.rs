use super::resolve_inputs;
use crate::config::Config;
use anyhow::Result;
use boxlevel_linter::{lint_document, Diagnostic, DiagnosticLevel};
use boxlevel_parser::parse;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Level file or directory to lint (defaults to the levels directory)
    pub input: Option<PathBuf>,

    /// Show all diagnostics including info level, and clean files
    #[arg(short, long)]
    pub all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One file's findings, as printed in JSON mode
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    file: String,
    diagnostics: &'a [Diagnostic],
}

#[derive(Debug, Default)]
struct Totals {
    diagnostics: usize,
    errors: usize,
    warnings: usize,
}

pub fn lint(args: LintArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let files = resolve_inputs(args.input.as_deref(), &config, cwd)?;
    let text = args.format == OutputFormat::Text;

    if text {
        println!("🔍 {} Boxlevel Linter", "Starting".green().bold());
        println!("   Found {} level files", files.len());
        println!();
    }

    let mut totals = Totals::default();
    for file in &files {
        lint_file(file, &config, &args, &mut totals)?;
    }

    if text {
        println!(
            "✨ {} Linting complete!",
            if totals.errors > 0 {
                "Done".red().bold()
            } else {
                "Done".green().bold()
            }
        );
        println!("   Files checked: {}", files.len());
        println!("   Total diagnostics: {}", totals.diagnostics);

        if totals.errors > 0 {
            println!("   {} {}", "Errors:".red(), totals.errors);
        }
        if totals.warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), totals.warnings);
        }
        if totals.errors == 0 && totals.warnings == 0 {
            println!("   {} No issues found!", "✓".green());
        }
    }

    if totals.errors > 0 {
        anyhow::bail!("lint found {} errors", totals.errors);
    }
    Ok(())
}

fn lint_file(
    file_path: &Path,
    config: &Config,
    args: &LintArgs,
    totals: &mut Totals,
) -> Result<()> {
    let source = fs::read_to_string(file_path)?;

    let document = match parse(&source) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!(
                "{} Failed to parse {}: {}",
                "✗".red(),
                file_path.display(),
                err
            );
            totals.errors += 1;
            return Ok(());
        }
    };

    let diagnostics = lint_document(&document, config.lint_options());

    totals.diagnostics += diagnostics.len();
    totals.errors += diagnostics
        .iter()
        .filter(|d| d.level == DiagnosticLevel::Error)
        .count();
    totals.warnings += diagnostics
        .iter()
        .filter(|d| d.level == DiagnosticLevel::Warning)
        .count();

    if args.format == OutputFormat::Json {
        let report = FileReport {
            file: file_path.display().to_string(),
            diagnostics: &diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if diagnostics.is_empty() {
        if args.all {
            println!("{} {}", "✓".green(), file_path.display());
        }
        return Ok(());
    }

    println!("{}", file_path.display());
    for diagnostic in &diagnostics {
        if !args.all && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        match &diagnostic.location {
            Some(location) => println!(
                "  {} [{}] {} ({})",
                level_str, diagnostic.rule, diagnostic.message, location
            ),
            None => println!("  {} [{}] {}", level_str, diagnostic.rule, diagnostic.message),
        }

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }
    println!();

    Ok(())
}
