use anyhow::{Context, Result};
use boxlevel_parser::parse;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Level file to print as JSON
    pub file: PathBuf,

    /// Single-line output
    #[arg(long)]
    pub compact: bool,
}

pub fn dump(args: DumpArgs, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.file);
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document = parse(&source).with_context(|| format!("Failed to parse {}", path.display()))?;

    let json = if args.compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    println!("{}", json);
    Ok(())
}
