//! Error handling for hashreg.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod extract_error;
pub mod generate_error;
pub mod render_error;
pub mod scan_error;
pub mod write_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use extract_error::{ExtractError, MarkerField};
pub use generate_error::GenerateError;
pub use render_error::RenderError;
pub use scan_error::ScanError;
pub use write_error::WriteError;
