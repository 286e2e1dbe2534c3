//! Immutable lookup table of known variant families.

use rustc_hash::FxHashMap;

/// Kernel type of hashcat's JWT module, which covers HS256/HS384/HS512.
pub const JWT_KERNEL_TYPE: u64 = 16511;

/// One entry a variant family expands into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTemplate {
    pub name: String,
    pub kernel_type: u64,
    /// Template-specific example. Empty or absent falls back to the module's.
    pub example: Option<String>,
}

impl VariantTemplate {
    pub fn new(name: impl Into<String>, kernel_type: u64) -> Self {
        Self {
            name: name.into(),
            kernel_type,
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Maps a kernel type to the ordered templates it expands into.
///
/// Built once, then only read. Template order is preserved exactly as
/// declared.
#[derive(Debug, Clone, Default)]
pub struct VariantTable {
    families: FxHashMap<u64, Vec<VariantTemplate>>,
}

impl VariantTable {
    /// A table with no variant families; every kernel type maps directly.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The variant families known to hashcat's module layout.
    pub fn builtin() -> Self {
        Self::empty().with_family(
            JWT_KERNEL_TYPE,
            vec![
                VariantTemplate::new("JWT (JSON Web Token) HS256", 16511),
                VariantTemplate::new("JWT (JSON Web Token) HS384", 16512),
                VariantTemplate::new("JWT (JSON Web Token) HS512", 16513),
            ],
        )
    }

    /// Add or replace a family while building the table.
    pub fn with_family(mut self, kernel_type: u64, templates: Vec<VariantTemplate>) -> Self {
        self.families.insert(kernel_type, templates);
        self
    }

    pub fn get(&self, kernel_type: u64) -> Option<&[VariantTemplate]> {
        self.families.get(&kernel_type).map(Vec::as_slice)
    }
}
