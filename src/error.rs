use std::path::PathBuf;

use thiserror::Error;

use crate::service::ServiceError;

/// Custom error types for regex-lens
#[derive(Debug, Error)]
pub enum LensError {
    #[error("Please enter both a pattern and text.")]
    MissingInput,

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
