#![deny(missing_docs)]

//! # Metadata Set
//!
//! The caller-owned, ordered accumulation of [`StructDescription`]s across
//! every scanned source unit. Order is source order, then declaration order.

use crate::discovery::SourceUnit;
use crate::parser::{extract, StructDescription};
use tracing::{debug, info};

/// Ordered collection of struct descriptions handed to a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSet {
    structs: Vec<StructDescription>,
}

impl MetadataSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from discovered source units, in the order given.
    pub fn from_sources<'a>(units: impl IntoIterator<Item = &'a SourceUnit>) -> Self {
        let mut set = Self::new();
        for unit in units {
            let added = set.extend_from_source(&unit.text);
            if added > 0 {
                info!(path = %unit.path.display(), structs = added, "extracted metadata");
            } else {
                debug!(path = %unit.path.display(), "no serialized structs");
            }
        }
        set
    }

    /// Extracts descriptions from one source text and appends them.
    ///
    /// Returns the number of descriptions added.
    pub fn extend_from_source(&mut self, text: &str) -> usize {
        let found = extract(text);
        let added = found.len();
        self.structs.extend(found);
        added
    }

    /// Appends a single description.
    pub fn push(&mut self, description: StructDescription) {
        self.structs.push(description);
    }

    /// Number of descriptions.
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }

    /// Iterates descriptions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StructDescription> {
        self.structs.iter()
    }

    /// Borrowed view of all descriptions.
    pub fn structs(&self) -> &[StructDescription] {
        &self.structs
    }

    /// All descriptions with the given name. Same-named declarations are
    /// never merged, so this may return several.
    pub fn find<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a StructDescription> + 'a {
        self.structs.iter().filter(move |s| s.name == name)
    }

    /// Total number of serialized field entries across all descriptions.
    pub fn serialized_field_count(&self) -> usize {
        self.structs.iter().map(|s| s.serialized_fields.len()).sum()
    }

    /// Consumes the set, returning the descriptions.
    pub fn into_inner(self) -> Vec<StructDescription> {
        self.structs
    }
}

impl Extend<StructDescription> for MetadataSet {
    fn extend<I: IntoIterator<Item = StructDescription>>(&mut self, iter: I) {
        self.structs.extend(iter);
    }
}

impl FromIterator<StructDescription> for MetadataSet {
    fn from_iter<I: IntoIterator<Item = StructDescription>>(iter: I) -> Self {
        Self {
            structs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MetadataSet {
    type Item = &'a StructDescription;
    type IntoIter = std::slice::Iter<'a, StructDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.structs.iter()
    }
}
