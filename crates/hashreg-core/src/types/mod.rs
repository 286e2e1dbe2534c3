//! Registry data model.

pub mod hash_type;
pub mod registry;

pub use hash_type::HashTypeEntry;
pub use registry::Registry;
