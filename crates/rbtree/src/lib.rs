mod check;
mod node;
mod traversal;

pub mod impls;

/// Ordered set interface.
///
/// - Keys are unique.
/// - `insert` returns `true` when the key was not present; inserting a
///   present key leaves the key set unchanged.
pub trait OrderedSet {
    type Key: Ord;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &Self::Key) -> bool;

    fn insert(&mut self, key: Self::Key) -> bool;

    fn clear(&mut self);
}

pub use check::InvariantError;
pub use impls::{RedBlackTree, StdBTreeSet};
pub use node::Color;
pub use traversal::{Iter, Order};

#[cfg(test)]
pub(crate) mod testing {
    #[derive(Clone)]
    pub(crate) struct XorShift64 {
        state: u64,
    }

    impl XorShift64 {
        pub(crate) fn new(seed: u64) -> Self {
            Self { state: seed }
        }

        pub(crate) fn next_u64(&mut self) -> u64 {
            let mut x = self.state;
            x ^= x << 7;
            x ^= x >> 9;
            x ^= x << 8;
            self.state = x;
            x
        }
    }
}
