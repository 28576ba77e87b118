use std::fmt;

/// Node color. An absent child counts as [`Color::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    pub fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }

    /// Single-letter tag used by the traversal printers.
    pub fn tag(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Which child of a node the search path continues into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, color: Color) -> Self {
        Self {
            key,
            color,
            left: None,
            right: None,
        }
    }

    pub(crate) fn is_red(link: &Link<K>) -> bool {
        link.as_ref().is_some_and(|n| n.color.is_red())
    }

    pub(crate) fn paint(link: &mut Link<K>, color: Color) {
        if let Some(node) = link.as_deref_mut() {
            node.color = color;
        }
    }

    pub(crate) fn child(&self, side: Side) -> &Link<K> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Both children present and red: a 4-node that top-down insertion splits.
    pub(crate) fn has_two_red_children(&self) -> bool {
        Self::is_red(&self.left) && Self::is_red(&self.right)
    }
}
