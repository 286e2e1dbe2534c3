//! Registry aggregation: extraction + expansion over every source unit.

mod aggregator;

pub use aggregator::RegistryAggregator;
