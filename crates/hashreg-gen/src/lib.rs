//! hashreg-gen: builds the hashcat supported-hash-types registry.
//!
//! - Extract: marker-based field extraction from module sources
//! - Variants: one-to-many expansion of known variant families
//! - Aggregate: fail-fast, order-preserving registry assembly
//! - Scanner: sequential, sorted walk of the module tree
//! - Render/Output: validated artifact rendering and atomic writes

pub mod aggregate;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod scanner;
pub mod variants;

pub use aggregate::RegistryAggregator;
pub use extract::{ExtractedFields, FieldExtractor, MarkerPatterns, SourceUnit};
pub use output::{emit_artifact, ArtifactWriter};
pub use pipeline::{GenerateReport, Generation, Generator};
pub use scanner::{SourceWalker, WalkOptions};
pub use variants::{VariantExpander, VariantTable, VariantTemplate};
