//! Configuration system for hashreg.
//! TOML-based, 3-layer resolution: CLI > env > project > defaults.

pub mod hashreg_config;
pub mod output_config;
pub mod source_config;

pub use hashreg_config::{CliOverrides, HashregConfig};
pub use output_config::{OutputConfig, OutputFormat};
pub use source_config::SourceConfig;
