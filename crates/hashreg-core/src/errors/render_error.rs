//! Artifact rendering errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while rendering the registry into an artifact.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Generated {format} source is invalid: {message}")]
    InvalidSyntax { format: &'static str, message: String },

    #[error("Could not serialize registry as {format}: {message}")]
    Serialization { format: &'static str, message: String },
}

impl ErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        error_code::RENDER_ERROR
    }
}
