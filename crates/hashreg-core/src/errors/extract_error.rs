//! Field extraction errors.

use std::fmt;
use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// A required marker inside a module source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerField {
    HashName,
    KernelType,
}

impl fmt::Display for MarkerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HashName => f.write_str("hash name"),
            Self::KernelType => f.write_str("kernel type"),
        }
    }
}

/// Errors that can occur while extracting fields from a source unit.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Could not locate {field} in {}", path.display())]
    MissingField { field: MarkerField, path: PathBuf },

    #[error("Invalid {field} marker pattern: {message}")]
    InvalidPattern { field: &'static str, message: String },
}

impl ExtractError {
    /// The missing field, if this is a `MissingField` error.
    pub fn missing_field(&self) -> Option<MarkerField> {
        match self {
            Self::MissingField { field, .. } => Some(*field),
            Self::InvalidPattern { .. } => None,
        }
    }
}

impl ErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => error_code::MISSING_FIELD,
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
        }
    }
}
