//! Scanner module - sequential walk over the module source tree.
//!
//! Files are visited depth-first in file-name order so that the generated
//! registry is reproducible across platforms. Directories are never yielded.

mod walker;

pub use walker::{SourceWalker, WalkOptions};
