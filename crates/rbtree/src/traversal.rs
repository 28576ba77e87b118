use std::fmt::Display;
use std::io::{self, Write};

use crate::impls::RedBlackTree;
use crate::node::{Color, Link, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    InOrder,
    PreOrder,
    PostOrder,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::InOrder, Order::PreOrder, Order::PostOrder];

    pub fn name(self) -> &'static str {
        match self {
            Order::InOrder => "inorder",
            Order::PreOrder => "preorder",
            Order::PostOrder => "postorder",
        }
    }
}

fn walk<'a, K, F>(link: &'a Link<K>, order: Order, visit: &mut F)
where
    F: FnMut(&'a Node<K>),
{
    let Some(node) = link.as_deref() else {
        return;
    };
    if order == Order::PreOrder {
        visit(node);
    }
    walk(&node.left, order, visit);
    if order == Order::InOrder {
        visit(node);
    }
    walk(&node.right, order, visit);
    if order == Order::PostOrder {
        visit(node);
    }
}

impl<K> RedBlackTree<K> {
    /// Keys with their colors in the given order.
    pub fn traverse(&self, order: Order) -> Vec<(&K, Color)> {
        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, order, &mut |node| out.push((&node.key, node.color)));
        out
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<K: Display> RedBlackTree<K> {
    /// Writes `<key> <color> ` for every node in the given order.
    pub fn write_traversal<W: Write>(&self, order: Order, out: &mut W) -> io::Result<()> {
        let mut result = Ok(());
        walk(&self.root, order, &mut |node| {
            if result.is_ok() {
                result = write!(out, "{} {} ", node.key, node.color);
            }
        });
        result
    }

    pub fn print_inorder(&self) -> io::Result<()> {
        self.print(Order::InOrder)
    }

    pub fn print_preorder(&self) -> io::Result<()> {
        self.print(Order::PreOrder)
    }

    pub fn print_postorder(&self) -> io::Result<()> {
        self.print(Order::PostOrder)
    }

    fn print(&self, order: Order) -> io::Result<()> {
        let mut out = io::stdout().lock();
        self.write_traversal(order, &mut out)?;
        out.flush()
    }
}

/// Inorder iterator over the keys of a [`RedBlackTree`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a RedBlackTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tree: &RedBlackTree<i32>, order: Order) -> String {
        let mut out = Vec::new();
        tree.write_traversal(order, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn three_orders_of_balanced_triple() {
        let tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(render(&tree, Order::InOrder), "10 R 20 B 30 R ");
        assert_eq!(render(&tree, Order::PreOrder), "20 B 10 R 30 R ");
        assert_eq!(render(&tree, Order::PostOrder), "10 R 30 R 20 B ");
    }

    #[test]
    fn empty_tree_writes_nothing() {
        let tree = RedBlackTree::<i32>::new();
        for order in Order::ALL {
            assert_eq!(render(&tree, order), "");
            assert!(tree.traverse(order).is_empty());
        }
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn every_order_visits_each_node_once() {
        let tree: RedBlackTree<i32> = (0..200).map(|i| (i * 37) % 211).collect();
        let mut sorted: Vec<i32> = (0..200).map(|i| (i * 37) % 211).collect();
        sorted.sort_unstable();

        for order in Order::ALL {
            let mut keys: Vec<i32> = tree.traverse(order).into_iter().map(|(k, _)| *k).collect();
            assert_eq!(keys.len(), tree.count_nodes());
            keys.sort_unstable();
            assert_eq!(keys, sorted);
        }
    }

    #[test]
    fn inorder_is_strictly_increasing() {
        let tree: RedBlackTree<i32> = [5, 3, 9, 1, 4, 8, 7, 2, 6, 0, 3, 5].into_iter().collect();
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        let walked: Vec<i32> = tree
            .traverse(Order::InOrder)
            .into_iter()
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(keys, walked);
    }

    #[test]
    fn iterator_reports_exact_size() {
        let tree: RedBlackTree<i32> = (1..=10).collect();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 10);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!((&tree).into_iter().sum::<i32>(), 55);
    }

    #[test]
    fn preorder_starts_and_postorder_ends_at_root() {
        let tree: RedBlackTree<i32> = (1..=31).collect();
        let root = *tree.root_key().unwrap();
        let pre = tree.traverse(Order::PreOrder);
        let post = tree.traverse(Order::PostOrder);
        assert_eq!(*pre[0].0, root);
        assert_eq!(pre[0].1, Color::Black);
        assert_eq!(*post[post.len() - 1].0, root);
    }
}
