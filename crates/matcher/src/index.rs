use hashbrown::HashMap;

use crate::types::{IdentityId, IdentitySet};

/// In-memory map from identity set to the ids seeded under it.
///
/// Each bucket is an append-only list in seeding order. Seeding an id under a
/// set it already holds appends it again.
#[derive(Debug, Clone, Default)]
pub struct SeedIndex {
    buckets: HashMap<IdentitySet, Vec<IdentityId>>,
}

impl SeedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` to the bucket for `set`.
    pub fn insert(&mut self, set: IdentitySet, id: IdentityId) {
        self.buckets.entry(set).or_default().push(id);
    }

    pub fn get(&self, set: &IdentitySet) -> Option<&[IdentityId]> {
        self.buckets.get(set).map(Vec::as_slice)
    }

    /// Number of distinct identity sets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}
