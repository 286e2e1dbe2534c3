//! Rust source rendering, validated with `syn`.

use hashreg_core::errors::RenderError;
use hashreg_core::types::{HashTypeEntry, Registry};

pub const GENERATED_HEADER: &str = "// Code automatically generated; DO NOT EDIT.";

const PRELUDE: &str = r#"
/// Describes a hash type supported by hashcat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashType {
    pub name: &'static str,
    pub kernel_type: u64,
    pub example: Option<&'static str>,
}
"#;

const ACCESSOR: &str = r#"
/// Returns the hash types supported by hashcat, in registry order.
pub fn supported_hashes() -> &'static [HashType] {
    HASHES
}
"#;

/// Render the registry as a Rust module exposing `supported_hashes()`.
pub fn render_rust(registry: &Registry) -> Result<String, RenderError> {
    let mut out = String::with_capacity(256 + registry.len() * 128);
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str(PRELUDE);
    out.push_str("\nstatic HASHES: &[HashType] = &[\n");
    for entry in registry {
        push_entry(&mut out, entry);
    }
    out.push_str("];\n");
    out.push_str(ACCESSOR);

    syn::parse_file(&out).map_err(|e| RenderError::InvalidSyntax {
        format: "rust",
        message: e.to_string(),
    })?;

    Ok(out)
}

fn push_entry(out: &mut String, entry: &HashTypeEntry) {
    out.push_str("    HashType {\n");
    out.push_str(&format!("        name: {},\n", string_literal(&entry.name)));
    out.push_str(&format!("        kernel_type: {},\n", entry.kernel_type));
    match entry.example {
        Some(ref example) => {
            out.push_str(&format!("        example: Some({}),\n", string_literal(example)))
        }
        None => out.push_str("        example: None,\n"),
    }
    out.push_str("    },\n");
}

/// Quote `value` as a Rust string literal.
fn string_literal(value: &str) -> String {
    format!("{value:?}")
}
