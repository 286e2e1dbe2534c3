//! Generated artifact persistence.

mod emit;
mod writer;

pub use emit::emit_artifact;
pub use writer::ArtifactWriter;
