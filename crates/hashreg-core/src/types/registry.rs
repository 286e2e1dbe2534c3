//! The final, immutable list of supported hash types.

use serde::{Deserialize, Serialize};

use super::HashTypeEntry;

/// Ordered registry of hash types.
///
/// Order is traversal order of the scanned module sources, with variant
/// families contributing their entries in table order. Once built there is
/// no mutation path; callers only get shared access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entries: Vec<HashTypeEntry>,
}

impl Registry {
    pub fn entries(&self) -> &[HashTypeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HashTypeEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HashTypeEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<HashTypeEntry>> for Registry {
    fn from(entries: Vec<HashTypeEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a HashTypeEntry;
    type IntoIter = std::slice::Iter<'a, HashTypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
