use super::resolve_inputs;
use crate::config::Config;
use anyhow::{Context, Result};
use boxlevel_parser::{parse, serialize};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Level file or directory (defaults to the levels directory)
    pub input: Option<PathBuf>,

    /// Report files that are not canonical instead of rewriting them
    #[arg(long)]
    pub check: bool,
}

pub fn fmt(args: FmtArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let files = resolve_inputs(args.input.as_deref(), &config, cwd)?;

    let mut changed = 0;
    for file in &files {
        let source = fs::read_to_string(file)?;
        let formatted = format_source(&source)
            .with_context(|| format!("Failed to parse {}", file.display()))?;

        if formatted == source {
            continue;
        }
        changed += 1;

        if args.check {
            println!("  {} {}", "would reformat".yellow(), file.display());
        } else {
            fs::write(file, formatted)?;
            println!("  {} {}", "reformatted".green(), file.display());
        }
    }

    if args.check && changed > 0 {
        anyhow::bail!("{} of {} files are not formatted", changed, files.len());
    }
    println!("   {} files checked, {} changed", files.len(), changed);
    Ok(())
}

/// Canonical text for a level source
pub fn format_source(source: &str) -> Result<String> {
    Ok(serialize(&parse(source)?))
}
