//! Artifact write errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while persisting the generated artifact.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Could not create destination file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write destination file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not move generated file into place at {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for WriteError {
    fn error_code(&self) -> &'static str {
        error_code::WRITE_ERROR
    }
}
