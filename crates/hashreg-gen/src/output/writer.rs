//! Atomic artifact writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use hashreg_core::errors::WriteError;

/// Writes the rendered artifact to its destination.
///
/// Content goes to a temporary sibling first and is renamed into place once
/// fully flushed, so the destination either holds the complete new artifact
/// or is left untouched.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    destination: PathBuf,
}

impl ArtifactWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn write(&self, contents: &str) -> Result<(), WriteError> {
        let staging = self.staging_path();

        if let Err(err) = self.write_staging(&staging, contents) {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }

        fs::rename(&staging, &self.destination).map_err(|source| {
            let _ = fs::remove_file(&staging);
            WriteError::Persist {
                path: self.destination.clone(),
                source,
            }
        })?;

        tracing::info!(
            path = %self.destination.display(),
            bytes = contents.len(),
            "artifact written"
        );
        Ok(())
    }

    fn write_staging(&self, staging: &Path, contents: &str) -> Result<(), WriteError> {
        let mut file = File::create(staging).map_err(|source| WriteError::Create {
            path: self.destination.clone(),
            source,
        })?;
        file.write_all(contents.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|source| WriteError::Write {
                path: self.destination.clone(),
                source,
            })
    }

    /// `<dir>/.<file name>.tmp`, next to the destination so rename stays on
    /// one filesystem.
    fn staging_path(&self) -> PathBuf {
        let file_name = self
            .destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "artifact".to_string());
        self.destination
            .with_file_name(format!(".{file_name}.tmp"))
    }
}
