use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in cordscope-core.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit codes used by the `cordscope` binary.
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    NotFound = 2,
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
