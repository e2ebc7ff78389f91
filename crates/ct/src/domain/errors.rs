//! Domain-specific errors.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while resolving `--line` into a [`Selection`](super::model::Selection).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid line number '{token}': {source}")]
    InvalidLineNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line number must be positive: {0}")]
    NonPositive(i64),
}

/// Failure while reading a single input file. Never fatal for the whole run.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading file: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no lines found for the specified line numbers")]
    NoMatchingLines { path: PathBuf },
}

/// Run-level failures that abort the invocation.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("no files were successfully read")]
    AllFilesFailed { failed: usize },
    #[error("failed to copy to clipboard: {0:#}")]
    Clipboard(anyhow::Error),
}
