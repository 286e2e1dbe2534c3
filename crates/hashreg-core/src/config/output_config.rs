//! Generated artifact configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default destination, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "hash_types.rs";

/// Syntax of the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rust source with a static list and a `supported_hashes()` accessor.
    #[default]
    Rust,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected rust or json)")),
        }
    }
}

/// Configuration for the generated artifact.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file. Default: `hash_types.rs`.
    pub path: Option<String>,
    /// Artifact syntax. Default: rust.
    pub format: Option<OutputFormat>,
}

impl OutputConfig {
    pub fn effective_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH))
    }

    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        assert_eq!("rust".parse::<OutputFormat>(), Ok(OutputFormat::Rust));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.effective_path(), PathBuf::from("hash_types.rs"));
        assert_eq!(config.effective_format(), OutputFormat::Rust);
    }
}
