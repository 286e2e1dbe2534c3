//! Module source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where to find the hashcat module sources and how to walk them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SourceConfig {
    /// Root of hashcat's `src/modules` directory. Required.
    pub root: Option<String>,
    /// File extensions to scan (without the dot). Empty means every file.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl SourceConfig {
    /// Returns the configured root as given, or `None` when unset or blank.
    pub fn effective_root(&self) -> Option<PathBuf> {
        self.root
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Returns whether symlinks are followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
