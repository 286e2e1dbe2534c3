//! Variant families: kernel types that register as several named entries.

mod expander;
mod table;

pub use expander::VariantExpander;
pub use table::{VariantTable, VariantTemplate, JWT_KERNEL_TYPE};
