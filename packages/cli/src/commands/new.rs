use crate::config::Config;
use anyhow::Result;
use boxlevel_editor::{Editor, HeaderProperty, Mutation};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Level file to create (relative names land in the levels directory)
    pub file: PathBuf,

    /// Title comment for the level header
    #[arg(short, long)]
    pub title: Option<String>,

    /// Force overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = if args.file.is_absolute() || args.file.components().count() > 1 {
        PathBuf::from(cwd).join(&args.file)
    } else {
        config.get_levels_dir(cwd).join(&args.file)
    };

    if path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut editor = Editor::new(&config.editor_config());
    if args.title.is_some() {
        editor.apply(Mutation::SetHeader(HeaderProperty::Title(args.title)))?;
    }
    editor.save_as(&path)?;

    println!("  {} Created {}", "✓".green(), path.display());
    Ok(())
}
