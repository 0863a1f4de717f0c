use core::cmp::Ordering;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::NodeId;
use super::node::{Color, Direction, Node};
use crate::{Comparator, Error};

/// Explicit stack for walks over the tree. A valid tree of `n` nodes is at most
/// `2 * log2(n + 1)` deep, so this rarely spills to the heap.
pub(crate) type WalkStack = SmallVec<[NodeId; 64]>;

/// The core Red-Black tree backing `RBTree`. Comparators are passed in per call so that the
/// façade can borrow its comparator, its disposer and this structure independently.
pub(crate) struct RawRBTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// The root node, if the tree is non-empty.
    root: Option<NodeId>,
    /// Number of values reachable from `root`.
    len: usize,
}

/// Outcome of a BST descent.
pub(crate) enum Location {
    /// The tree is empty.
    Empty,
    /// A node holding a value comparing equal.
    Found(NodeId),
    /// The last node visited; the probe belongs in its empty child slot on `Direction`.
    Vacant(NodeId, Direction),
}

impl<T> RawRBTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes.get_mut(id)
    }

    pub(crate) fn value(&self, id: NodeId) -> &T {
        self.nodes.get(id).value()
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Arena<Node<T>> {
        &mut self.nodes
    }

    pub(crate) fn increment_len(&mut self) {
        self.len += 1;
    }

    pub(crate) fn decrement_len(&mut self) {
        self.len -= 1;
    }

    /// Absent children count as black.
    #[inline]
    pub(crate) fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.node(id).color())
    }

    #[inline]
    pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color_of(id) == Color::Red
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).set_color(color);
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        self.node(id).child(direction)
    }

    /// Links `child` below `parent` on `direction`, keeping the back-reference in step.
    pub(crate) fn attach(&mut self, parent: NodeId, direction: Direction, child: Option<NodeId>) {
        self.node_mut(parent).set_child(direction, child);
        if let Some(child) = child {
            self.node_mut(child).set_parent(Some(parent));
        }
    }

    /// Returns which child of its parent `id` is. Must not be called on the root.
    pub(crate) fn side_of(&self, id: NodeId) -> Direction {
        let parent = self.parent(id).expect("`RawRBTree::side_of()` - node has no parent!");
        if self.child(parent, Direction::Left) == Some(id) {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// The other child of `id`'s parent.
    pub(crate) fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        self.child(parent, self.side_of(id).opposite())
    }

    /// Follows `direction` links from `id` as far as they go.
    pub(crate) fn extreme(&self, mut id: NodeId, direction: Direction) -> NodeId {
        while let Some(next) = self.child(id, direction) {
            id = next;
        }
        id
    }

    /// Descends from the root comparing against `probe`.
    pub(crate) fn locate<C>(&self, probe: &T, comparator: &C) -> Location
    where
        C: Comparator<T> + ?Sized,
    {
        let Some(mut current) = self.root else {
            return Location::Empty;
        };

        loop {
            let direction = match comparator.compare(self.value(current), probe) {
                Ordering::Equal => return Location::Found(current),
                Ordering::Greater => Direction::Left,
                Ordering::Less => Direction::Right,
            };
            match self.child(current, direction) {
                Some(next) => current = next,
                None => return Location::Vacant(current, direction),
            }
        }
    }

    /// Returns the node holding a value equal to `probe`.
    pub(crate) fn find<C>(&self, probe: &T, comparator: &C) -> Option<NodeId>
    where
        C: Comparator<T> + ?Sized,
    {
        match self.locate(probe, comparator) {
            Location::Found(id) => Some(id),
            Location::Empty | Location::Vacant(..) => None,
        }
    }

    /// Returns the smallest (`Left`) or largest (`Right`) value.
    pub(crate) fn end(&self, direction: Direction) -> Option<&T> {
        let root = self.root?;
        Some(self.value(self.extreme(root, direction)))
    }

    /// Visits values in ascending order until `visit` returns `false`.
    /// Returns `true` if every value was visited.
    pub(crate) fn for_each_in_order<'a, F>(&'a self, mut visit: F) -> bool
    where
        F: FnMut(&'a T) -> bool,
    {
        let mut stack = WalkStack::new();
        let mut current = self.root;

        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left();
            }
            let Some(id) = stack.pop() else {
                return true;
            };
            let node = self.node(id);
            if !visit(node.value()) {
                return false;
            }
            current = node.right();
        }
    }

    /// Empties the tree, handing every value to `release` in post-order (left subtree, right
    /// subtree, node). Returns the number of values released.
    pub(crate) fn drain_post_order<F>(&mut self, mut release: F) -> usize
    where
        F: FnMut(T),
    {
        let mut released = 0;
        let mut stack = WalkStack::new();
        let mut last: Option<NodeId> = None;
        let mut current = self.root.take();

        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left();
            }
            let Some(&top) = stack.last() else {
                break;
            };
            let right = self.node(top).right();
            if right.is_some() && right != last {
                current = right;
                continue;
            }
            stack.pop();
            release(self.nodes.take(top).into_value());
            released += 1;
            last = Some(top);
        }

        self.nodes.clear();
        self.len = 0;
        released
    }

    /// Checks every structural invariant, returning the tree's black-height.
    pub(crate) fn validate<C>(&self, comparator: &C) -> Result<usize, Error>
    where
        C: Comparator<T> + ?Sized,
    {
        let Some(root) = self.root else {
            return if self.len == 0 && self.nodes.is_empty() { Ok(0) } else { Err(Error::InconsistentState) };
        };
        if self.parent(root).is_some() || self.is_red(Some(root)) {
            return Err(Error::InconsistentState);
        }

        let mut count = 0;
        let black_height = self.validate_subtree(root, comparator, &mut count)?;

        let mut previous: Option<&T> = None;
        let ascending = self.for_each_in_order(|value| {
            let ordered = previous.is_none_or(|previous| comparator.compare(previous, value) == Ordering::Less);
            previous = Some(value);
            ordered
        });

        if !ascending || count != self.len || self.nodes.len() != self.len {
            return Err(Error::InconsistentState);
        }
        Ok(black_height)
    }

    fn validate_subtree<C>(&self, id: NodeId, comparator: &C, count: &mut usize) -> Result<usize, Error>
    where
        C: Comparator<T> + ?Sized,
    {
        *count += 1;
        let node = self.node(id);
        let mut heights = [0; 2];

        for (slot, direction) in [Direction::Left, Direction::Right].into_iter().enumerate() {
            let Some(child) = node.child(direction) else {
                continue;
            };
            let child_node = self.node(child);
            let expected = match direction {
                Direction::Left => Ordering::Greater,
                Direction::Right => Ordering::Less,
            };
            if child_node.parent() != Some(id)
                || (node.is_red() && child_node.is_red())
                || comparator.compare(node.value(), child_node.value()) != expected
            {
                return Err(Error::InconsistentState);
            }
            heights[slot] = self.validate_subtree(child, comparator, count)?;
        }

        if heights[0] != heights[1] {
            return Err(Error::InconsistentState);
        }
        Ok(heights[0] + usize::from(!node.is_red()))
    }
}
