use std::error;
use std::fmt;

use crate::impls::RedBlackTree;
use crate::node::Link;

/// A broken red-black or search-tree invariant found by
/// [`RedBlackTree::validate`]. Keys are rendered with `Debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    RedRoot,
    RedRedEdge {
        parent: String,
        child: String,
    },
    BlackHeightMismatch {
        key: String,
        left: usize,
        right: usize,
    },
    OrderViolation {
        key: String,
    },
    LengthMismatch {
        tracked: usize,
        counted: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InvariantError::*;

        match self {
            RedRoot => write!(f, "root is red"),
            RedRedEdge { parent, child } => {
                write!(f, "red node {parent} has red child {child}")
            }
            BlackHeightMismatch { key, left, right } => write!(
                f,
                "black height below {key} differs: left {left}, right {right}"
            ),
            OrderViolation { key } => write!(f, "key {key} is out of search order"),
            LengthMismatch { tracked, counted } => {
                write!(f, "tracked length {tracked} but {counted} nodes")
            }
        }
    }
}

impl error::Error for InvariantError {}

/// Returns the black height of `link` counting the null leaf, or the first
/// violation found. `lower` and `upper` are exclusive key bounds.
fn check<K: Ord + fmt::Debug>(
    link: &Link<K>,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<usize, InvariantError> {
    let Some(node) = link.as_deref() else {
        return Ok(1);
    };

    if lower.is_some_and(|lo| node.key <= *lo) || upper.is_some_and(|hi| node.key >= *hi) {
        return Err(InvariantError::OrderViolation {
            key: format!("{:?}", node.key),
        });
    }

    if node.color.is_red() {
        for child in [&node.left, &node.right].into_iter().flatten() {
            if child.color.is_red() {
                return Err(InvariantError::RedRedEdge {
                    parent: format!("{:?}", node.key),
                    child: format!("{:?}", child.key),
                });
            }
        }
    }

    let left = check(&node.left, lower, Some(&node.key))?;
    let right = check(&node.right, Some(&node.key), upper)?;
    if left != right {
        return Err(InvariantError::BlackHeightMismatch {
            key: format!("{:?}", node.key),
            left,
            right,
        });
    }
    Ok(left + usize::from(node.color.is_black()))
}

fn height<K>(link: &Link<K>) -> usize {
    link.as_deref()
        .map_or(0, |node| 1 + height(&node.left).max(height(&node.right)))
}

impl<K: Ord + fmt::Debug> RedBlackTree<K> {
    /// Checks every red-black and ordering invariant and returns the black
    /// height: black nodes from below the root down to and including a null
    /// leaf. An empty tree has black height 0.
    pub fn validate(&self) -> Result<usize, InvariantError> {
        let counted = self.count_nodes();
        if counted != self.len {
            return Err(InvariantError::LengthMismatch {
                tracked: self.len,
                counted,
            });
        }
        let Some(root) = self.root.as_deref() else {
            return Ok(0);
        };
        if root.color.is_red() {
            return Err(InvariantError::RedRoot);
        }
        Ok(check(&self.root, None, None)? - 1)
    }
}

impl<K> RedBlackTree<K> {
    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Black height along the leftmost path, see [`RedBlackTree::validate`].
    pub fn black_height(&self) -> usize {
        let Some(root) = self.root.as_deref() else {
            return 0;
        };
        let mut blacks = 1;
        let mut cur = root.left.as_deref();
        while let Some(node) = cur {
            blacks += usize::from(node.color.is_black());
            cur = node.left.as_deref();
        }
        blacks
    }
}
