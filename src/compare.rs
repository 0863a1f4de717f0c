//! The two capabilities an [`RBTree`](crate::RBTree) needs from its values: a total order to
//! arrange them by, and a way to release them once the tree is done with them.

use core::cmp::Ordering;

/// A total order over `T`.
///
/// Implementations must be consistent: antisymmetric, transitive, and stable for as long as the
/// compared values live in a tree. Two values comparing [`Ordering::Equal`] are the same key, and
/// only one of them can be stored.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
///
/// # Examples
///
/// ```
/// use aka_tree::RBTree;
///
/// // Order strings by length, then alphabetically.
/// let mut tree = RBTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()).then(a.cmp(b)));
/// tree.insert("pear");
/// tree.insert("fig");
/// tree.insert("banana");
///
/// let mut seen = Vec::new();
/// tree.for_each(|word| {
///     seen.push(*word);
///     true
/// });
/// assert_eq!(seen, ["fig", "pear", "banana"]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Releases values the tree no longer holds.
///
/// The tree hands each stored value to its disposer exactly once: when the value is deleted, or
/// when the whole tree is destroyed or cleared. Any `FnMut(T)` closure is a disposer.
pub trait Disposer<T> {
    /// Takes ownership of a value removed from the tree.
    fn dispose(&mut self, value: T);
}

impl<T, F> Disposer<T> for F
where
    F: FnMut(T),
{
    #[inline]
    fn dispose(&mut self, value: T) {
        self(value);
    }
}

/// Releases values by dropping them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DropDisposer;

impl<T> Disposer<T> for DropDisposer {
    #[inline]
    fn dispose(&mut self, value: T) {
        drop(value);
    }
}
