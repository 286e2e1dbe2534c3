//! One-to-many expansion of variant families.

use hashreg_core::types::HashTypeEntry;

use super::table::VariantTable;

/// Expands kernel types that belong to a variant family.
#[derive(Debug, Clone)]
pub struct VariantExpander {
    table: VariantTable,
}

impl VariantExpander {
    pub fn new(table: VariantTable) -> Self {
        Self { table }
    }

    /// Expand `kernel_type` into its family entries.
    ///
    /// Returns an empty vec when the kernel type is not a variant family;
    /// the caller then registers a single direct entry. Each entry takes its
    /// template's example when non-empty, otherwise `fallback_example`.
    pub fn expand(&self, kernel_type: u64, fallback_example: Option<&str>) -> Vec<HashTypeEntry> {
        let Some(templates) = self.table.get(kernel_type) else {
            return Vec::new();
        };

        let fallback = fallback_example.filter(|ex| !ex.is_empty());

        templates
            .iter()
            .map(|template| {
                let example = template
                    .example
                    .as_deref()
                    .filter(|ex| !ex.is_empty())
                    .or(fallback)
                    .map(str::to_owned);
                HashTypeEntry::new(template.name.clone(), template.kernel_type, example)
            })
            .collect()
    }
}

impl Default for VariantExpander {
    fn default() -> Self {
        Self::new(VariantTable::builtin())
    }
}
