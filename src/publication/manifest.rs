//! The rendition manifest: an id-keyed, insertion-ordered resource set.

use crate::publication::resource::Resource;
use std::collections::HashMap;

/// Holds every [`Resource`] of one rendition.
///
/// Insertion order is preserved and becomes the emission order of both the
/// package document's `<manifest>` and the archive's resource entries.
/// Ids are unique; on collision the first insertion wins.
#[derive(Clone, Debug, Default)]
pub struct Manifest {
    resources: Vec<Resource>,
    index: HashMap<String, usize>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, returning `false` (and dropping the argument) when a
    /// resource with the same id is already present.
    pub fn add(&mut self, resource: impl Into<Resource>) -> bool {
        let resource = resource.into();

        if self.index.contains_key(resource.id()) {
            return false;
        }

        self.index
            .insert(resource.id().to_owned(), self.resources.len());
        self.resources.push(resource);
        true
    }

    /// Resources in insertion order.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    pub fn by_id(&self, id: &str) -> Option<&Resource> {
        self.index.get(id).map(|&position| &self.resources[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
