use log::trace;

use super::handle::NodeId;
use super::node::{Color, Direction, Node};
use super::raw_rb_tree::{Location, RawRBTree};
use crate::{Comparator, Error, InsertError};

impl<T> RawRBTree<T> {
    /// Inserts `value` and rebalances. On failure the tree is untouched and `value` comes back.
    pub(crate) fn insert<C>(&mut self, value: T, comparator: &C) -> Result<(), InsertError<T>>
    where
        C: Comparator<T> + ?Sized,
    {
        if self.root().is_none() != self.is_empty() {
            return Err(InsertError::new(Error::InconsistentState, value));
        }

        let location = self.locate(&value, comparator);
        let (parent, direction) = match location {
            Location::Found(_) => return Err(InsertError::new(Error::Duplicate, value)),
            Location::Empty => {
                let root = self.alloc(value)?;
                self.set_color(root, Color::Black);
                self.set_root(Some(root));
                self.increment_len();
                return Ok(());
            }
            Location::Vacant(parent, direction) => (parent, direction),
        };

        let node = self.alloc(value)?;
        self.attach(parent, direction, Some(node));
        self.increment_len();

        if !self.is_red(Some(parent)) {
            return Ok(());
        }
        if let Some(pivot) = self.recolor(node) {
            self.resolve_rotation_case(pivot);
        }
        if let Some(root) = self.root() {
            self.set_color(root, Color::Black);
        }
        Ok(())
    }

    fn alloc(&mut self, value: T) -> Result<NodeId, InsertError<T>> {
        self.nodes_mut()
            .try_alloc(Node::new(value))
            .map_err(|node| InsertError::new(Error::AllocationFailure, node.into_value()))
    }

    /// Pushes a red-red violation at `node` up the tree by recoloring.
    ///
    /// Each step where the uncle is red blackens the parent and uncle and moves the violation to
    /// the grandparent. Returns the node that needs a rotation once a black uncle is met, or
    /// `None` when recoloring alone resolved it.
    pub(crate) fn recolor(&mut self, node: NodeId) -> Option<NodeId> {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            self.set_color(current, Color::Red);
            if !self.is_red(Some(parent)) {
                return None;
            }
            if !self.is_red(self.sibling(parent)) {
                return Some(current);
            }

            let grandparent =
                self.parent(parent).expect("`RawRBTree::recolor()` - red parent is the root!");
            trace!("recolor: red uncle below {grandparent:?}, moving violation up");
            for side in [Direction::Left, Direction::Right] {
                if let Some(child) = self.child(grandparent, side) {
                    self.set_color(child, Color::Black);
                }
            }
            current = grandparent;
        }
        None
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::node::Color::{Black, Red};
    use super::super::node::Direction::{Left, Right};
    use super::super::raw_rb_tree::RawRBTree;
    use super::super::raw_rb_tree::tests::{build, in_order};
    use crate::{Error, Natural};

    fn insert_all(values: &[i32]) -> RawRBTree<i32> {
        let mut tree = RawRBTree::new();
        for &value in values {
            tree.insert(value, &Natural).unwrap();
            tree.validate(&Natural).unwrap();
        }
        tree
    }

    #[test]
    fn first_value_becomes_black_root() {
        let tree = insert_all(&[7]);
        assert!(!tree.is_red(tree.root()));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn black_parent_needs_no_fix_up() {
        let tree = insert_all(&[10, 5]);
        let root = tree.root().unwrap();
        assert_eq!(*tree.value(root), 10);
        assert!(tree.is_red(tree.child(root, Left)));
    }

    #[test]
    fn red_uncle_recolors_upward() {
        let tree = insert_all(&[10, 5, 20, 1]);
        let root = tree.root().unwrap();
        assert_eq!(*tree.value(root), 10);
        assert!(!tree.is_red(tree.child(root, Left)));
        assert!(!tree.is_red(tree.child(root, Right)));
        assert_eq!(tree.validate(&Natural), Ok(2));
    }

    #[test]
    fn recolor_stops_at_black_uncle() {
        let mut tree = build(&[(10, Black, None), (5, Red, Some((0, Left))), (1, Red, Some((1, Left)))]);
        let five = tree.child(tree.root().unwrap(), Left).unwrap();
        let one = tree.child(five, Left).unwrap();
        assert_eq!(tree.recolor(one), Some(one));
    }

    #[test]
    fn recolor_reaching_root_needs_no_rotation() {
        let mut tree = build(&[
            (10, Black, None),
            (5, Red, Some((0, Left))),
            (20, Red, Some((0, Right))),
            (1, Red, Some((1, Left))),
        ]);
        let root = tree.root().unwrap();
        let one = tree.child(tree.child(root, Left).unwrap(), Left).unwrap();
        assert_eq!(tree.recolor(one), None);
        assert!(!tree.is_red(tree.root()));
        assert_eq!(tree.validate(&Natural), Ok(2));
    }

    #[test]
    fn ascending_and_descending_runs_stay_balanced() {
        let ascending: alloc::vec::Vec<i32> = (0..200).collect();
        let tree = insert_all(&ascending);
        assert_eq!(in_order(&tree), ascending);

        let descending: alloc::vec::Vec<i32> = (0..200).rev().collect();
        let tree = insert_all(&descending);
        assert_eq!(in_order(&tree), ascending);
    }

    #[test]
    fn duplicates_are_handed_back() {
        let mut tree = insert_all(&[3, 1, 2]);
        let rejected = tree.insert(2, &Natural).unwrap_err();
        assert_eq!(rejected.error(), Error::Duplicate);
        assert_eq!(rejected.into_value(), 2);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn length_without_root_is_rejected() {
        let mut tree = RawRBTree::new();
        tree.increment_len();
        let rejected = tree.insert(1, &Natural).unwrap_err();
        assert_eq!(rejected.error(), Error::InconsistentState);
        assert_eq!(rejected.into_value(), 1);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn full_arena_rejects_insert_unchanged() {
        let mut tree = RawRBTree::new();
        let limit = super::super::handle::NodeId::MAX + 1;
        for value in 0..limit {
            tree.insert(value, &Natural).unwrap();
        }
        let rejected = tree.insert(limit, &Natural).unwrap_err();
        assert_eq!(rejected.error(), Error::AllocationFailure);
        assert_eq!(tree.len(), limit);
        assert!(tree.validate(&Natural).is_ok());
    }
}
