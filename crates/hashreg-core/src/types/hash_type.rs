//! A single supported hash type as exposed to runtime callers.

use serde::{Deserialize, Serialize};

/// One registry record: a named hashcat kernel with an optional example hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashTypeEntry {
    /// Human-readable algorithm name. Never empty.
    pub name: String,
    /// Toolkit-defined kernel type identifier.
    #[serde(rename = "type")]
    pub kernel_type: u64,
    /// Example hash in the toolkit's input format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl HashTypeEntry {
    pub fn new(name: impl Into<String>, kernel_type: u64, example: Option<String>) -> Self {
        Self {
            name: name.into(),
            kernel_type,
            example,
        }
    }
}
