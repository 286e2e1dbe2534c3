//! Sequential source walker using walkdir.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use hashreg_core::config::HashregConfig;
use hashreg_core::errors::ScanError;

use crate::extract::SourceUnit;

/// How the source tree is walked.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Extensions to keep (without the dot, case-insensitive). Empty keeps all.
    pub extensions: Vec<String>,
    pub follow_symlinks: bool,
}

impl WalkOptions {
    pub fn from_config(config: &HashregConfig) -> Self {
        Self {
            extensions: config
                .source
                .extensions
                .iter()
                .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            follow_symlinks: config.source.effective_follow_symlinks(),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|wanted| *wanted == ext)
            })
            .unwrap_or(false)
    }
}

/// Yields one `SourceUnit` per regular file under the root.
///
/// Each file is read fully and closed before it is yielded. The first walk
/// or read error is yielded as `Err`; callers are expected to stop there.
pub struct SourceWalker {
    root: PathBuf,
    options: WalkOptions,
    inner: walkdir::IntoIter,
}

impl SourceWalker {
    /// Start a walk at `root`. Fails if `root` is not an existing directory.
    pub fn new(root: impl Into<PathBuf>, options: WalkOptions) -> Result<Self, ScanError> {
        let root = root.into();
        let metadata = fs::metadata(&root).map_err(|source| ScanError::IoError {
            path: root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }

        let inner = WalkDir::new(&root)
            .follow_links(options.follow_symlinks)
            .sort_by_file_name()
            .into_iter();

        Ok(Self {
            root,
            options,
            inner,
        })
    }
}

impl Iterator for SourceWalker {
    type Item = Result<SourceUnit, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(ScanError::IoError {
                        path,
                        source: err.into(),
                    }));
                }
            };

            // Skip directories
            if entry.file_type().is_dir() {
                continue;
            }
            if !self.options.accepts(entry.path()) {
                tracing::trace!(path = %entry.path().display(), "skipping filtered file");
                continue;
            }

            let path = entry.into_path();
            return Some(match fs::read(&path) {
                Ok(content) => Ok(SourceUnit::new(path, content)),
                Err(source) => Err(ScanError::IoError { path, source }),
            });
        }
    }
}
