use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an entire transformation run.
///
/// Everything below the run level is handled in place: unparseable
/// documents are skipped, failed sibling loads fall back to shallow data.
#[derive(Error, Debug)]
pub enum HogRefError {
    #[error("input path is not a directory: {0}")]
    InvalidDataDir(PathBuf),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to enumerate documents: {0}")]
    Walk(#[from] glob::PatternError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HogRefError>;
