//! hashreg-core: shared foundation for the hashreg registry generator.
//!
//! - Types: `HashTypeEntry` records and the immutable `Registry`
//! - Errors: one `thiserror` enum per subsystem, aggregated by `GenerateError`
//! - Config: TOML-based, layered (CLI > env > project > defaults)
//! - Tracing: `EnvFilter`-driven subscriber setup

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{CliOverrides, HashregConfig, OutputFormat};
pub use errors::{ErrorCode, GenerateError};
pub use types::{HashTypeEntry, Registry};
