use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::OrderedSet;
use crate::node::{Color, Link, Node, Side};

/// Red-black tree set with single-pass top-down insertion.
///
/// Nodes with two red children are split on the way down, so a red parent
/// found at the bottom can always be repaired with at most two rotations at
/// the grandparent and great-grandparent. There is no parent pointer and no
/// bottom-up fix-up pass.
#[derive(Clone, PartialEq, Eq)]
pub struct RedBlackTree<K> {
    pub(crate) root: Link<K>,
    pub(crate) len: usize,
}

/// Right rotation: promotes `node.left` into `node`'s position.
fn rotate_with_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut left = node.left.take().expect("rotate_with_left requires left");
    node.left = left.right.take();
    left.right = Some(node);
    left
}

/// Left rotation: promotes `node.right` into `node`'s position.
fn rotate_with_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut right = node.right.take().expect("rotate_with_right requires right");
    node.right = right.left.take();
    right.left = Some(node);
    right
}

/// Rotates the node held in `link` with its child on `side` and relinks the
/// promoted child into `link`.
fn rotate<K>(link: &mut Link<K>, side: Side) {
    let node = link.take().expect("rotate requires a node");
    let promoted = match side {
        Side::Left => rotate_with_left(node),
        Side::Right => rotate_with_right(node),
    };
    *link = Some(promoted);
}

/// The rolling `great-grandparent / grandparent / parent / current` window of
/// one insert call.
///
/// `anchor` is the great-grandparent's child slot, i.e. the slot holding the
/// grandparent, and `path` the sides taken from there down to `current`.
/// While the descent is less than two levels below the root, `anchor` is the
/// root slot and the missing ancestors are the black header above the root.
struct Window<'a, K> {
    anchor: &'a mut Link<K>,
    path: [Side; 2],
    depth: usize,
    at_root: bool,
}

impl<'a, K> Window<'a, K> {
    fn new(root: &'a mut Link<K>) -> Self {
        Self {
            anchor: root,
            path: [Side::Left; 2],
            depth: 0,
            at_root: true,
        }
    }

    fn current(&mut self) -> &mut Node<K> {
        let mut node = self
            .anchor
            .as_deref_mut()
            .expect("window anchor holds a node");
        for &side in &self.path[..self.depth] {
            node = node
                .child_mut(side)
                .as_deref_mut()
                .expect("window path leads to a node");
        }
        node
    }

    /// Moves `current` one level down on `side`.
    fn push(self, side: Side) -> Self {
        let Window {
            anchor,
            mut path,
            depth,
            at_root,
        } = self;
        if depth < 2 {
            path[depth] = side;
            return Window {
                anchor,
                path,
                depth: depth + 1,
                at_root,
            };
        }
        let grandparent = anchor.as_deref_mut().expect("window anchor holds a node");
        Window {
            anchor: grandparent.child_mut(path[0]),
            path: [path[1], side],
            depth: 2,
            at_root: false,
        }
    }

    /// Recolors `current` red and its children black, then repairs a red
    /// parent with a single (zig-zig) or double (zig-zag) rotation.
    fn reorient(&mut self) {
        let current = self.current();
        current.color = Color::Red;
        Node::paint(&mut current.left, Color::Black);
        Node::paint(&mut current.right, Color::Black);

        if self.depth == 2 {
            let [outer, inner] = self.path;
            let grandparent = self
                .anchor
                .as_deref_mut()
                .expect("window anchor holds a node");
            if Node::is_red(grandparent.child(outer)) {
                grandparent.color = Color::Red;
                if outer != inner {
                    trace!("red parent on the inside: double rotation");
                    rotate(grandparent.child_mut(outer), inner);
                } else {
                    trace!("red parent on the outside: single rotation");
                }
                rotate(self.anchor, outer);
                let promoted = self
                    .anchor
                    .as_deref_mut()
                    .expect("rotation leaves a node in the anchor");
                promoted.color = Color::Black;
                self.depth = 0;
            }
        } else {
            debug_assert!(
                self.depth == 0
                    || self
                        .anchor
                        .as_deref()
                        .is_some_and(|parent| parent.color.is_black()),
                "red parent without a grandparent"
            );
        }

        if self.at_root {
            Node::paint(self.anchor, Color::Black);
        }
    }
}

impl<K> RedBlackTree<K> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys, tracked on insert. Always equal to [`Self::count_nodes`].
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every node and returns to the empty state.
    pub fn make_empty(&mut self) {
        debug!("dropping {} nodes", self.len);
        self.root = None;
        self.len = 0;
    }

    /// Counts nodes by walking the whole tree.
    pub fn count_nodes(&self) -> usize {
        fn count<K>(link: &Link<K>) -> usize {
            link.as_ref()
                .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
        }
        count(&self.root)
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref().map(|node| &node.key)
    }

    pub fn root_color(&self) -> Option<Color> {
        self.root.as_ref().map(|node| node.color)
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Inserts `key`, returning `false` if it was already present.
    ///
    /// Splits performed on the way down before a duplicate is found are kept,
    /// so inserting a present key may still recolor or rotate the tree.
    pub fn insert(&mut self, key: K) -> bool {
        if self.root.is_none() {
            self.root = Some(Box::new(Node::new(key, Color::Black)));
            self.len = 1;
            return true;
        }

        let inserted = Self::insert_top_down(&mut self.root, key);
        Node::paint(&mut self.root, Color::Black);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_top_down(root: &mut Link<K>, key: K) -> bool {
        let mut window = Window::new(root);
        loop {
            if window.current().has_two_red_children() {
                trace!("splitting node with two red children");
                window.reorient();
            }

            let current = window.current();
            let side = match key.cmp(&current.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            if current.child(side).is_none() {
                *current.child_mut(side) = Some(Box::new(Node::new(key, Color::Red)));
                window = window.push(side);
                window.reorient();
                return true;
            }
            window = window.push(side);
        }
    }

    /// Binary search descent from the root. Never rebalances.
    pub fn search(&self, key: &K) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key)
    }
}

impl<K> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for RedBlackTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for RedBlackTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RedBlackTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> OrderedSet for RedBlackTree<K> {
    type Key = K;

    fn new() -> Self {
        RedBlackTree::new()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, key: &Self::Key) -> bool {
        self.search(key)
    }

    fn insert(&mut self, key: Self::Key) -> bool {
        RedBlackTree::insert(self, key)
    }

    fn clear(&mut self) {
        self.make_empty();
    }
}
