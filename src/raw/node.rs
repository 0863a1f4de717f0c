use super::handle::NodeId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child slot of a node a link occupies. Every rebalancing step has a mirror image, so the
/// fix-up code is written once against a `Direction` and its `opposite()`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
        }
    }
}

/// A tree vertex. The child links decide the tree's shape; `parent` only mirrors them so that
/// fix-up can walk upward.
#[derive(Debug)]
pub(crate) struct Node<T> {
    value: T,
    color: Color,
    parent: Option<NodeId>,
    children: [Option<NodeId>; 2],
}

impl<T> Node<T> {
    /// Creates a detached red node, the color every inserted node starts with.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            color: Color::Red,
            parent: None,
            children: [None, None],
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn child(&self, direction: Direction) -> Option<NodeId> {
        self.children[direction.slot()]
    }

    #[inline]
    pub(crate) fn set_child(&mut self, direction: Direction, child: Option<NodeId>) {
        self.children[direction.slot()] = child;
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<NodeId> {
        self.child(Direction::Left)
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<NodeId> {
        self.child(Direction::Right)
    }

    /// Returns the only child of a node with at most one child.
    pub(crate) fn sole_child(&self) -> Option<NodeId> {
        debug_assert!(
            self.left().is_none() || self.right().is_none(),
            "`Node::sole_child()` - node has two children!"
        );
        self.left().or(self.right())
    }

    pub(crate) fn has_two_children(&self) -> bool {
        self.left().is_some() && self.right().is_some()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn new_nodes_are_red_and_detached() {
        let node = Node::new("leaf");
        assert!(node.is_red());
        assert_eq!(node.parent(), None);
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
        assert_eq!(*node.value(), "leaf");
    }

    #[test]
    fn children_are_addressed_by_direction() {
        let mut node = Node::new(0);
        node.set_child(Direction::Right, Some(NodeId::from_index(4)));
        assert_eq!(node.right(), Some(NodeId::from_index(4)));
        assert_eq!(node.child(Direction::Left.opposite()), Some(NodeId::from_index(4)));
        assert_eq!(node.sole_child(), Some(NodeId::from_index(4)));
        assert!(!node.has_two_children());

        node.set_child(Direction::Left, Some(NodeId::from_index(2)));
        assert!(node.has_two_children());
    }
}
