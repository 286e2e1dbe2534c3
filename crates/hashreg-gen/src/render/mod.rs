//! Artifact rendering.
//!
//! Renderers turn a finished registry into the text of the generated
//! artifact. Output is validated before it is returned, so a rendered
//! string is always safe to write.

mod json;
mod rust;

pub use json::render_json;
pub use rust::{render_rust, GENERATED_HEADER};

use hashreg_core::config::OutputFormat;
use hashreg_core::errors::RenderError;
use hashreg_core::types::Registry;

/// Render `registry` in the requested format.
pub fn render(registry: &Registry, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Rust => render_rust(registry),
        OutputFormat::Json => render_json(registry),
    }
}
