use super::resolve_inputs;
use crate::config::Config;
use anyhow::Result;
use boxlevel_parser::{format_error, parse_with_warnings};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Level file or directory (defaults to the levels directory)
    pub input: Option<PathBuf>,
}

pub fn check(args: CheckArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let files = resolve_inputs(args.input.as_deref(), &config, cwd)?;

    let mut failed = 0;
    for file in &files {
        if !check_file(file)? {
            failed += 1;
        }
    }

    println!();
    println!("   Files checked: {}", files.len());
    if failed > 0 {
        anyhow::bail!("{} of {} files failed to parse", failed, files.len());
    }
    println!("   {} All files parse", "✓".green());
    Ok(())
}

/// Returns whether the file parsed
fn check_file(path: &Path) -> Result<bool> {
    let source = fs::read_to_string(path)?;
    let filename = path.display().to_string();

    match parse_with_warnings(&source) {
        Ok(output) => {
            println!("{} {}", "✓".green(), filename);
            for warning in &output.warnings {
                println!(
                    "  {} {}:{}: {}",
                    "warning".yellow().bold(),
                    filename,
                    warning.line(),
                    warning
                );
            }
            Ok(true)
        }
        Err(err) => {
            println!("{} {}", "✗".red(), filename);
            eprintln!("{}", format_error(&source, &filename, &err));
            Ok(false)
        }
    }
}
