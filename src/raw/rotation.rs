use log::trace;

use super::handle::NodeId;
use super::node::Direction;
use super::raw_rb_tree::RawRBTree;

impl<T> RawRBTree<T> {
    /// Rotates `parent` toward `direction`, lifting `child` into its place.
    ///
    /// `child` must be `parent`'s child on `direction.opposite()`. Afterwards `parent` is
    /// `child`'s child on `direction`, and `child`'s former inner subtree (the one on
    /// `direction`) hangs from `parent` in the slot `child` vacated. Colors are untouched.
    pub(crate) fn rotate(&mut self, parent: NodeId, child: NodeId, direction: Direction) {
        debug_assert_eq!(
            self.child(parent, direction.opposite()),
            Some(child),
            "`RawRBTree::rotate()` - `child` is not on the far side of `parent`!"
        );

        let grandparent = self.parent(parent);
        match grandparent {
            None => self.set_root(Some(child)),
            Some(grandparent) => {
                let side = self.side_of(parent);
                self.node_mut(grandparent).set_child(side, Some(child));
            }
        }
        self.node_mut(child).set_parent(grandparent);

        let inner = self.child(child, direction);
        self.attach(parent, direction.opposite(), inner);
        self.attach(child, direction, Some(parent));
    }

    /// Resolves a red-red violation between `node` and its parent when the uncle is black.
    ///
    /// Outer cases (left-left, right-right) take one rotation at the grandparent; inner cases
    /// (left-right, right-left) first rotate `node` above its parent so the shape becomes an
    /// outer case. The node lifted into the grandparent's place ends up black with two red
    /// children, so black-heights are unchanged.
    pub(crate) fn resolve_rotation_case(&mut self, node: NodeId) {
        let parent = self.parent(node).expect("`RawRBTree::resolve_rotation_case()` - node has no parent!");
        let grandparent =
            self.parent(parent).expect("`RawRBTree::resolve_rotation_case()` - parent is the root!");
        let node_side = self.side_of(node);
        let parent_side = self.side_of(parent);

        let pivot = if node_side == parent_side {
            trace!("rotation case {parent_side:?}-{node_side:?}: single rotation at {grandparent:?}");
            parent
        } else {
            trace!("rotation case {parent_side:?}-{node_side:?}: double rotation at {grandparent:?}");
            self.rotate(parent, node, parent_side);
            node
        };

        // The grandparent always moves down on the side away from the parent.
        let demoted = parent_side.opposite();
        self.rotate(grandparent, pivot, demoted);
        self.swap_colors(pivot, grandparent);
    }

    fn swap_colors(&mut self, a: NodeId, b: NodeId) {
        let color_a = self.node(a).color();
        let color_b = self.node(b).color();
        self.set_color(a, color_b);
        self.set_color(b, color_a);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::super::node::Color::{Black, Red};
    use super::super::node::Direction::{Left, Right};
    use super::super::raw_rb_tree::tests::{build, in_order};
    use crate::Natural;

    #[test]
    fn rotate_moves_inner_subtree() {
        //     2            4
        //    / \          / \
        //   1   4   =>   2   5
        //      / \      / \
        //     3   5    1   3
        let mut tree = build(&[
            (2, Black, None),
            (1, Black, Some((0, Left))),
            (4, Black, Some((0, Right))),
            (3, Black, Some((2, Left))),
            (5, Black, Some((2, Right))),
        ]);
        let two = tree.root().unwrap();
        let four = tree.child(two, Right).unwrap();

        tree.rotate(two, four, Left);

        assert_eq!(tree.root(), Some(four));
        assert_eq!(tree.parent(four), None);
        assert_eq!(tree.child(four, Left), Some(two));
        assert_eq!(*tree.value(tree.child(two, Right).unwrap()), 3);
        assert_eq!(tree.parent(tree.child(two, Right).unwrap()), Some(two));
        assert_eq!(in_order(&tree), [1, 2, 3, 4, 5]);

        tree.rotate(four, two, Right);
        assert_eq!(tree.root(), Some(two));
        assert_eq!(in_order(&tree), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotate_updates_grandparent_link() {
        let mut tree = build(&[
            (10, Black, None),
            (5, Black, Some((0, Left))),
            (20, Black, Some((0, Right))),
            (30, Red, Some((2, Right))),
        ]);
        let root = tree.root().unwrap();
        let twenty = tree.child(root, Right).unwrap();
        let thirty = tree.child(twenty, Right).unwrap();

        tree.rotate(twenty, thirty, Left);

        assert_eq!(tree.child(root, Right), Some(thirty));
        assert_eq!(tree.parent(thirty), Some(root));
        assert_eq!(tree.child(thirty, Left), Some(twenty));
        assert_eq!(in_order(&tree), [5, 10, 20, 30]);
    }

    #[test]
    fn outer_cases_use_one_rotation() {
        // Left-left: 3 <- 2 <- 1 hanging off a black grandparent.
        let mut tree = build(&[(3, Black, None), (2, Red, Some((0, Left))), (1, Red, Some((1, Left)))]);
        let one = tree.child(tree.child(tree.root().unwrap(), Left).unwrap(), Left).unwrap();
        tree.resolve_rotation_case(one);
        assert_eq!(*tree.value(tree.root().unwrap()), 2);
        assert_eq!(tree.validate(&Natural), Ok(1));

        // Right-right mirror.
        let mut tree = build(&[(1, Black, None), (2, Red, Some((0, Right))), (3, Red, Some((1, Right)))]);
        let three = tree.child(tree.child(tree.root().unwrap(), Right).unwrap(), Right).unwrap();
        tree.resolve_rotation_case(three);
        assert_eq!(*tree.value(tree.root().unwrap()), 2);
        assert_eq!(tree.validate(&Natural), Ok(1));
    }

    #[test]
    fn inner_cases_use_two_rotations() {
        // Left-right: the node lands in the grandparent's place.
        let mut tree = build(&[(3, Black, None), (1, Red, Some((0, Left))), (2, Red, Some((1, Right)))]);
        let two = tree.child(tree.child(tree.root().unwrap(), Left).unwrap(), Right).unwrap();
        tree.resolve_rotation_case(two);
        assert_eq!(tree.root(), Some(two));
        assert_eq!(in_order(&tree), [1, 2, 3]);
        assert_eq!(tree.validate(&Natural), Ok(1));

        // Right-left mirror, below a black uncle.
        let mut tree = build(&[
            (10, Black, None),
            (5, Black, Some((0, Left))),
            (20, Black, Some((0, Right))),
            (30, Red, Some((2, Right))),
            (25, Red, Some((3, Left))),
        ]);
        let thirty = tree.child(tree.child(tree.root().unwrap(), Right).unwrap(), Right).unwrap();
        let twenty_five = tree.child(thirty, Left).unwrap();
        tree.resolve_rotation_case(twenty_five);
        assert_eq!(tree.child(tree.root().unwrap(), Right), Some(twenty_five));
        assert_eq!(in_order(&tree), [5, 10, 20, 25, 30]);
        assert_eq!(tree.validate(&Natural), Ok(2));
    }
}
