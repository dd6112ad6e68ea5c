//! The rendition spine: the default reading order.

use crate::publication::resource::ItemRef;

/// An ordered list of [`ItemRef`]s into the manifest.
///
/// The spine does not validate idrefs; dangling references are reported
/// during serialization.
#[derive(Clone, Debug, Default)]
pub struct Spine {
    entries: Vec<ItemRef>,
}

impl Spine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reading order wholesale.
    pub fn set(&mut self, entries: impl IntoIterator<Item = ItemRef>) {
        self.entries = entries.into_iter().collect();
    }

    pub fn push(&mut self, entry: ItemRef) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn itemrefs(&self) -> impl Iterator<Item = &ItemRef> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
