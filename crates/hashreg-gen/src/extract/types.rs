//! Extraction input and output types.

use std::path::{Path, PathBuf};

/// Raw content of one scanned module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    path: PathBuf,
    content: Vec<u8>,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path the content was read from, used in diagnostics.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// Identity fields located in a single module source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: String,
    pub kernel_type: u64,
    pub example: Option<String>,
}
