//! Field extraction from hashcat module sources.
//!
//! Each module file declares its identity through three C constants. The
//! extractor locates them with independent regex searches over raw bytes.

mod extractor;
pub mod markers;
mod types;

pub use extractor::FieldExtractor;
pub use markers::{MarkerPatterns, HASH_NAME_PATTERN, KERN_TYPE_PATTERN, ST_HASH_PATTERN};
pub use types::{ExtractedFields, SourceUnit};
