//! Error types for the editor session

use crate::mutations::Declined;
use boxlevel_parser::FormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Parse error: {0}")]
    Parse(#[from] FormatError),

    #[error("Edit declined: {0}")]
    Declined(#[from] Declined),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document is not file-backed")]
    NotFileBacked,
}
