//! JSON rendering.

use hashreg_core::errors::RenderError;
use hashreg_core::types::Registry;

/// Render the registry as a pretty-printed JSON array.
pub fn render_json(registry: &Registry) -> Result<String, RenderError> {
    let mut out =
        serde_json::to_string_pretty(registry).map_err(|e| RenderError::Serialization {
            format: "json",
            message: e.to_string(),
        })?;
    out.push('\n');
    Ok(out)
}
