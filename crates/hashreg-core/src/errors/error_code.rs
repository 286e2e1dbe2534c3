//! ErrorCode trait for process-exit diagnostics.

/// Every hashreg error enum implements this to provide a stable,
/// machine-greppable code alongside its human message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "MISSING_FIELD").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic line: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MISSING_FIELD: &str = "MISSING_FIELD";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const WRITE_ERROR: &str = "WRITE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
