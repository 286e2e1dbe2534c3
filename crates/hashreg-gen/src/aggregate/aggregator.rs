//! Fail-fast, order-preserving registry builder.

use hashreg_core::errors::ExtractError;
use hashreg_core::types::{HashTypeEntry, Registry};

use crate::extract::{FieldExtractor, SourceUnit};
use crate::variants::VariantExpander;

/// Drives extraction and variant expansion across all source units.
#[derive(Debug, Clone, Default)]
pub struct RegistryAggregator {
    extractor: FieldExtractor,
    expander: VariantExpander,
}

impl RegistryAggregator {
    pub fn new(extractor: FieldExtractor, expander: VariantExpander) -> Self {
        Self {
            extractor,
            expander,
        }
    }

    /// Build a registry from in-memory source units.
    pub fn build<I>(&self, units: I) -> Result<Registry, ExtractError>
    where
        I: IntoIterator<Item = SourceUnit>,
    {
        self.try_build(units.into_iter().map(Ok))
    }

    /// Build a registry from a fallible stream of source units.
    ///
    /// The first error, from the stream or from extraction, aborts the build
    /// and no registry is returned.
    pub fn try_build<I, E>(&self, units: I) -> Result<Registry, E>
    where
        I: IntoIterator<Item = Result<SourceUnit, E>>,
        E: From<ExtractError>,
    {
        let mut entries = Vec::new();
        for unit in units {
            let unit = unit?;
            self.append_unit(&unit, &mut entries)?;
        }
        tracing::debug!(entries = entries.len(), "registry assembled");
        Ok(Registry::from(entries))
    }

    fn append_unit(
        &self,
        unit: &SourceUnit,
        entries: &mut Vec<HashTypeEntry>,
    ) -> Result<(), ExtractError> {
        let fields = self.extractor.extract(unit)?;

        let variants = self
            .expander
            .expand(fields.kernel_type, fields.example.as_deref());

        if variants.is_empty() {
            tracing::debug!(
                path = %unit.path().display(),
                name = %fields.name,
                kernel_type = fields.kernel_type,
                "registered hash type"
            );
            entries.push(HashTypeEntry::new(
                fields.name,
                fields.kernel_type,
                fields.example,
            ));
        } else {
            tracing::debug!(
                path = %unit.path().display(),
                kernel_type = fields.kernel_type,
                variants = variants.len(),
                "expanded variant family"
            );
            entries.extend(variants);
        }
        Ok(())
    }
}
