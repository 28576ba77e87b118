mod std_btree;
mod top_down;

pub use std_btree::StdBTreeSet;
pub use top_down::RedBlackTree;
