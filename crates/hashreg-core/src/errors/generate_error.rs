//! Generation run errors.

use super::error_code::ErrorCode;
use super::{ConfigError, ExtractError, RenderError, ScanError, WriteError};

/// Errors that can end a generation run.
/// Aggregates subsystem errors via `From` conversions. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

impl ErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Extract(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Write(e) => e.error_code(),
        }
    }
}
