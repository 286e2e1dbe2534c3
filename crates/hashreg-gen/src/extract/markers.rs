//! Marker patterns for the three module identity constants.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use hashreg_core::errors::ExtractError;

/// `static const char *HASH_NAME = "...";`
pub const HASH_NAME_PATTERN: &str = r#"static const char \*HASH_NAME\s+=\s+"(.*?)";"#;

/// `static const u64 KERN_TYPE = ...;`
pub const KERN_TYPE_PATTERN: &str = r#"static const u64\s+KERN_TYPE\s+=\s+(.*?);"#;

/// `static const char *ST_HASH = "...";`
pub const ST_HASH_PATTERN: &str = r#"static const char\s+\*ST_HASH\s+=\s+"(.*?)";"#;

static DEFAULT_PATTERNS: Lazy<MarkerPatterns> = Lazy::new(|| MarkerPatterns {
    hash_name: Regex::new(HASH_NAME_PATTERN).unwrap(),
    kern_type: Regex::new(KERN_TYPE_PATTERN).unwrap(),
    st_hash: Regex::new(ST_HASH_PATTERN).unwrap(),
});

/// Compiled marker regexes. Capture group 1 of each holds the value.
#[derive(Debug, Clone)]
pub struct MarkerPatterns {
    pub hash_name: Regex,
    pub kern_type: Regex,
    pub st_hash: Regex,
}

impl MarkerPatterns {
    /// Compile a custom pattern set. Each pattern needs one capture group.
    pub fn new(hash_name: &str, kern_type: &str, st_hash: &str) -> Result<Self, ExtractError> {
        Ok(Self {
            hash_name: compile("hash name", hash_name)?,
            kern_type: compile("kernel type", kern_type)?,
            st_hash: compile("example hash", st_hash)?,
        })
    }
}

impl Default for MarkerPatterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, ExtractError> {
    let regex = Regex::new(pattern).map_err(|e| ExtractError::InvalidPattern {
        field,
        message: e.to_string(),
    })?;
    if regex.captures_len() < 2 {
        return Err(ExtractError::InvalidPattern {
            field,
            message: "pattern must contain a capture group".to_string(),
        });
    }
    Ok(regex)
}
