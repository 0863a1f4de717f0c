use log::trace;

use super::handle::NodeId;
use super::node::{Color, Direction};
use super::raw_rb_tree::RawRBTree;
use crate::{Comparator, Error};

impl<T> RawRBTree<T> {
    /// Removes the value equal to `probe` and returns it.
    pub(crate) fn delete<C>(&mut self, probe: &T, comparator: &C) -> Result<T, Error>
    where
        C: Comparator<T> + ?Sized,
    {
        let target = self.find(probe, comparator).ok_or(Error::NotFound)?;
        Ok(self.remove_node(target))
    }

    /// Unlinks the value held by `target`, rebalancing as needed.
    fn remove_node(&mut self, target: NodeId) -> T {
        // A node with two children trades values with its in-order successor, which has no left
        // child, and the successor's slot is the one spliced out.
        let spliced = if self.node(target).has_two_children() {
            let right = self.node(target).right().expect("`RawRBTree::remove_node()` - missing right child!");
            let successor = self.extreme(right, Direction::Left);
            let (target_node, successor_node) = self.nodes_mut().pair_mut(target, successor);
            core::mem::swap(target_node.value_mut(), successor_node.value_mut());
            successor
        } else {
            target
        };

        let child = self.node(spliced).sole_child();
        let removed_black = !self.node(spliced).is_red();

        match self.parent(spliced) {
            None => {
                self.set_root(child);
                if let Some(child) = child {
                    self.node_mut(child).set_parent(None);
                    self.set_color(child, Color::Black);
                }
            }
            Some(parent) => {
                let side = self.side_of(spliced);
                self.attach(parent, side, child);
                if removed_black {
                    if self.is_red(child) {
                        self.set_color(child.expect("red child is present"), Color::Black);
                    } else {
                        self.fix_double_black(parent, side);
                    }
                }
            }
        }

        self.decrement_len();
        self.nodes_mut().take(spliced).into_value()
    }

    /// Restores uniform black-height after the subtree on `direction` of `parent` lost a black
    /// node.
    ///
    /// Each pass either finishes, rotates, or moves the deficiency one level up. At most three
    /// rotations happen in total.
    pub(crate) fn fix_double_black(&mut self, mut parent: NodeId, mut direction: Direction) {
        loop {
            let away = direction.opposite();
            // The short side has black-height at least one less than this side, so it is never
            // empty.
            let sibling = self.child(parent, away).expect("`RawRBTree::fix_double_black()` - missing sibling!");

            if self.is_red(Some(sibling)) {
                trace!("double black at {parent:?}: red sibling, rotating {direction:?}");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, sibling, direction);
                continue;
            }

            let far = self.child(sibling, away);
            let near = self.child(sibling, direction);

            if self.is_red(far) {
                trace!("double black at {parent:?}: red far nephew, rotating {direction:?}");
                let parent_color = self.node(parent).color();
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Black);
                self.set_color(far.expect("red nephew is present"), Color::Black);
                self.rotate(parent, sibling, direction);
                return;
            }

            if let Some(near) = near.filter(|&near| self.is_red(Some(near))) {
                trace!("double black at {parent:?}: red near nephew, rotating sibling {away:?}");
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, near, away);
                continue;
            }

            self.set_color(sibling, Color::Red);
            if self.is_red(Some(parent)) {
                self.set_color(parent, Color::Black);
                return;
            }
            let Some(grandparent) = self.parent(parent) else {
                trace!("double black reached the root, black-height shrinks");
                return;
            };
            trace!("double black moves up from {parent:?} to {grandparent:?}");
            direction = self.side_of(parent);
            parent = grandparent;
        }
    }
}
