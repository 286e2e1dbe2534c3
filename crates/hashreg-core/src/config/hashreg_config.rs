//! Top-level hashreg configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{OutputConfig, OutputFormat, SourceConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the config directory.
pub const PROJECT_CONFIG_FILE: &str = "hashreg.toml";

/// Environment variable naming hashcat's `src/modules` directory.
pub const ENV_SOURCE_ROOT: &str = "HASHCAT_SRC_PATH";
pub const ENV_OUTPUT_PATH: &str = "HASHREG_OUTPUT_PATH";
pub const ENV_OUTPUT_FORMAT: &str = "HASHREG_OUTPUT_FORMAT";
pub const ENV_FOLLOW_SYMLINKS: &str = "HASHREG_FOLLOW_SYMLINKS";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`HASHCAT_SRC_PATH`, `HASHREG_*`)
/// 3. Project config (`hashreg.toml` in the config directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HashregConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source_root: Option<String>,
    pub output_path: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub follow_symlinks: Option<bool>,
}

impl HashregConfig {
    /// Load configuration with layered resolution and validate the result.
    ///
    /// A missing `hashreg.toml` is not an error; a malformed one is.
    pub fn load(
        config_dir: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = config_dir.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            ::tracing::debug!(path = %project_config_path.display(), "merging project config");
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// The source root must be set to a non-blank path before any traversal
    /// starts.
    pub fn validate(config: &HashregConfig) -> Result<(), ConfigError> {
        if config.source.effective_root().is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "source.root".to_string(),
                message: format!(
                    "{ENV_SOURCE_ROOT} must be set to hashcat's src/modules directory to generate code"
                ),
            });
        }
        if let Some(ref path) = config.output.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if config
            .source
            .extensions
            .iter()
            .any(|ext| ext.trim().trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "source.extensions".to_string(),
                message: "extensions must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Validated source root. Only fails for configs that skipped `validate`.
    pub fn source_root(&self) -> Result<PathBuf, ConfigError> {
        self.source
            .effective_root()
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "source.root".to_string(),
                message: format!("{ENV_SOURCE_ROOT} must be set"),
            })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut HashregConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HashregConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut HashregConfig, other: &HashregConfig) {
        // Source
        if other.source.root.is_some() {
            base.source.root = other.source.root.clone();
        }
        if !other.source.extensions.is_empty() {
            base.source.extensions = other.source.extensions.clone();
        }
        if other.source.follow_symlinks.is_some() {
            base.source.follow_symlinks = other.source.follow_symlinks;
        }

        // Output
        if other.output.path.is_some() {
            base.output.path = other.output.path.clone();
        }
        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
    }

    /// Apply environment variable overrides.
    ///
    /// An explicitly empty `HASHCAT_SRC_PATH` still overrides lower layers so
    /// that validation rejects it.
    fn apply_env_overrides(config: &mut HashregConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(ENV_SOURCE_ROOT) {
            config.source.root = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_OUTPUT_PATH) {
            config.output.path = Some(val);
        }
        if let Ok(val) = std::env::var(ENV_OUTPUT_FORMAT) {
            let format = val.parse::<OutputFormat>().map_err(|message| {
                ConfigError::InvalidValue {
                    field: ENV_OUTPUT_FORMAT.to_string(),
                    message,
                }
            })?;
            config.output.format = Some(format);
        }
        if let Ok(val) = std::env::var(ENV_FOLLOW_SYMLINKS) {
            let follow = val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                field: ENV_FOLLOW_SYMLINKS.to_string(),
                message: format!("expected `true` or `false`, got {val:?}"),
            })?;
            config.source.follow_symlinks = Some(follow);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut HashregConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.source_root {
            config.source.root = Some(v.clone());
        }
        if let Some(ref v) = cli.output_path {
            config.output.path = Some(v.clone());
        }
        if let Some(v) = cli.output_format {
            config.output.format = Some(v);
        }
        if let Some(v) = cli.follow_symlinks {
            config.source.follow_symlinks = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
