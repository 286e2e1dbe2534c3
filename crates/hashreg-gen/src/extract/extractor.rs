//! Marker-based field extraction.

use std::path::Path;

use regex::bytes::Regex;

use hashreg_core::errors::{ExtractError, MarkerField};

use super::markers::MarkerPatterns;
use super::types::{ExtractedFields, SourceUnit};

/// Extracts the hash name, kernel type and example hash from module sources.
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    patterns: MarkerPatterns,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom marker set instead of the hashcat module markers.
    pub fn with_patterns(patterns: MarkerPatterns) -> Self {
        Self { patterns }
    }

    /// Extract fields from a source unit.
    ///
    /// The hash name must be present and non-empty; the kernel type must be
    /// present and parse as an unsigned integer. The example is optional and
    /// an empty example counts as absent.
    pub fn extract(&self, unit: &SourceUnit) -> Result<ExtractedFields, ExtractError> {
        self.extract_bytes(unit.content(), unit.path())
    }

    /// Extract fields from raw content; `origin` names the content in errors.
    pub fn extract_bytes(
        &self,
        content: &[u8],
        origin: &Path,
    ) -> Result<ExtractedFields, ExtractError> {
        let missing = |field| ExtractError::MissingField {
            field,
            path: origin.to_path_buf(),
        };

        let name = first_capture(&self.patterns.hash_name, content)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| missing(MarkerField::HashName))?;

        let kernel_type = first_capture(&self.patterns.kern_type, content)
            .and_then(|raw| raw.parse::<u64>().ok())
            .ok_or_else(|| missing(MarkerField::KernelType))?;

        let example = first_capture(&self.patterns.st_hash, content).filter(|ex| !ex.is_empty());

        Ok(ExtractedFields {
            name,
            kernel_type,
            example,
        })
    }
}

/// Capture group 1 of the first match, decoded lossily.
fn first_capture(regex: &Regex, content: &[u8]) -> Option<String> {
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}
