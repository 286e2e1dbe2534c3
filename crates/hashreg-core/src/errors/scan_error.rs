//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while walking the module source tree.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Source root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
