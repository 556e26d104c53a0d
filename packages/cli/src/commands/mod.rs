pub mod check;
pub mod dump;
pub mod fmt;
pub mod lint;
pub mod new;

pub use check::{check, CheckArgs};
pub use dump::{dump, DumpArgs};
pub use fmt::{fmt, FmtArgs};
pub use lint::{lint, LintArgs};
pub use new::{new, NewArgs};

use crate::config::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of level files
pub const LEVEL_EXTENSION: &str = "txt";

/// Expand a command's input into level files. No input means the configured
/// levels directory.
pub fn resolve_inputs(input: Option<&Path>, config: &Config, cwd: &str) -> Result<Vec<PathBuf>> {
    let input = match input {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_levels_dir(cwd),
    };

    if input.is_file() {
        Ok(vec![input])
    } else if input.is_dir() {
        Ok(find_level_files(&input))
    } else {
        Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            input.display()
        ))
    }
}

/// Every level file under `dir`, sorted
pub fn find_level_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|e| e == LEVEL_EXTENSION)
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}
