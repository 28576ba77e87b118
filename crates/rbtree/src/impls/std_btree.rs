use std::collections::BTreeSet;

use crate::OrderedSet;

/// `std::collections::BTreeSet` behind [`OrderedSet`], the baseline the tree
/// is measured and checked against.
pub struct StdBTreeSet<K: Ord> {
    inner: BTreeSet<K>,
}

impl<K: Ord> StdBTreeSet<K> {
    pub fn into_inner(self) -> BTreeSet<K> {
        self.inner
    }
}

impl<K: Ord> OrderedSet for StdBTreeSet<K> {
    type Key = K;

    fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, key: &Self::Key) -> bool {
        self.inner.contains(key)
    }

    fn insert(&mut self, key: Self::Key) -> bool {
        self.inner.insert(key)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}
