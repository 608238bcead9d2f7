//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot access rides file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Rides file contents
    // ---------------------------
    #[error("Malformed record at line {line}: {reason}\n    {content}")]
    MalformedRecord {
        line: usize,
        reason: String,
        content: String,
    },

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("No ride with id {0}")]
    NoSuchRide(usize),

    #[error("No URL for ride {0}")]
    NoUrl(usize),

    // ---------------------------
    // Import
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Config / external tools
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap an I/O error raised while touching the rides file.
    pub fn file_access(path: &Path, source: io::Error) -> Self {
        AppError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>, content: &str) -> Self {
        AppError::MalformedRecord {
            line,
            reason: reason.into(),
            content: content.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
