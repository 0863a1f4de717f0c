use core::fmt;

use log::debug;

use crate::raw::{Direction, RawRBTree};
use crate::{Comparator, Disposer, DropDisposer, Error, InsertError, Natural};

/// An ordered set of caller-owned values, kept balanced as a Red-Black tree.
///
/// Values are arranged by a [`Comparator`] and, once removed, handed to a [`Disposer`]. Both
/// default to the natural [`Ord`] order and plain dropping, but any closure will do, which lets
/// the tree hold types that have no `Ord` of their own or that need explicit cleanup.
///
/// Insertion, deletion and lookup take O(log n) time. The tree stays balanced on any insertion
/// order: the root is black, no red node has a red child, and every path from a node down to an
/// empty slot crosses the same number of black nodes, so no path is more than twice as long as
/// another.
///
/// Values comparing [`Equal`](core::cmp::Ordering::Equal) are the same key; inserting a second
/// one is rejected. It is a logic error for a value's ordering to change while it is in the tree.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to
/// the `RBTree` that observed it and not result in undefined behavior.
///
/// Dropping a tree drops its values without consulting the disposer. Use [`destroy`] or
/// [`clear`] to route every value through it.
///
/// [`destroy`]: RBTree::destroy
/// [`clear`]: RBTree::clear
///
/// # Examples
///
/// ```
/// use aka_tree::RBTree;
///
/// let mut tree = RBTree::new();
/// for value in [10, 20, 5, 15, 30, 1] {
///     assert!(tree.insert(value));
/// }
/// assert!(!tree.insert(15));
///
/// assert!(tree.delete(&20));
/// assert!(tree.delete(&1));
/// assert!(!tree.delete(&1));
///
/// let mut ordered = Vec::new();
/// tree.for_each(|&value| {
///     ordered.push(value);
///     true
/// });
/// assert_eq!(ordered, [5, 10, 15, 30]);
/// assert_eq!(tree.destroy(), 4);
/// ```
pub struct RBTree<T, C = Natural, D = DropDisposer> {
    raw: RawRBTree<T>,
    comparator: C,
    disposer: Option<D>,
}

impl<T: Ord> RBTree<T> {
    /// Makes a new, empty `RBTree` ordered by `T`'s [`Ord`] implementation.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert(1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawRBTree::new(),
            comparator: Natural,
            disposer: Some(DropDisposer),
        }
    }

    /// Makes a new, empty `RBTree` with room for at least `capacity` values before it
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let tree: RBTree<u64> = RBTree::with_capacity(100);
    /// assert!(tree.capacity() >= 100);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: RawRBTree::with_capacity(capacity),
            comparator: Natural,
            disposer: Some(DropDisposer),
        }
    }
}

impl<T, C: Comparator<T>> RBTree<T, C> {
    /// Makes a new, empty `RBTree` ordered by `comparator`. Removed values are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let mut tree = RBTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.first(), Some(&3));
    /// ```
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_parts(comparator, DropDisposer)
    }

    /// Makes a new, empty `RBTree` ordered by `comparator` with no disposer.
    ///
    /// Such a tree can be filled, searched and traversed, but [`try_delete`](Self::try_delete)
    /// is rejected with [`Error::InvalidArgument`], and [`destroy`](Self::destroy) and
    /// [`clear`](Self::clear) drop values without counting them.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::{Error, RBTree};
    ///
    /// let mut tree = RBTree::without_disposer(|a: &u8, b: &u8| a.cmp(b));
    /// tree.insert(4);
    /// assert!(tree.contains(&4));
    /// assert_eq!(tree.try_delete(&4), Err(Error::InvalidArgument));
    /// ```
    #[must_use]
    pub fn without_disposer(comparator: C) -> Self {
        Self {
            raw: RawRBTree::new(),
            comparator,
            disposer: None,
        }
    }
}

impl<T, C: Comparator<T>, D: Disposer<T>> RBTree<T, C, D> {
    /// Makes a new, empty `RBTree` ordered by `comparator`, handing removed values to `disposer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let mut released = Vec::new();
    /// let mut tree = RBTree::with_parts(|a: &String, b: &String| a.cmp(b), |s: String| released.push(s));
    /// tree.insert("pear".to_owned());
    /// tree.insert("apple".to_owned());
    /// tree.delete(&"pear".to_owned());
    /// tree.destroy();
    /// assert_eq!(released, ["pear", "apple"]);
    /// ```
    #[must_use]
    pub fn with_parts(comparator: C, disposer: D) -> Self {
        Self {
            raw: RawRBTree::new(),
            comparator,
            disposer: Some(disposer),
        }
    }

    /// Adds a value to the tree, taking ownership of it.
    ///
    /// Returns whether the value was inserted; on `false` the value has been dropped. Use
    /// [`try_insert`](Self::try_insert) to learn why and get it back.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.try_insert(value).is_ok()
    }

    /// Adds a value to the tree, taking ownership of it only on success.
    ///
    /// # Errors
    ///
    /// - [`Error::Duplicate`] if an equal value is already stored.
    /// - [`Error::AllocationFailure`] if no storage for another node could be obtained.
    /// - [`Error::InconsistentState`] if the tree's length disagrees with its shape.
    ///
    /// The rejected value is returned inside the [`InsertError`], and the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::{Error, RBTree};
    ///
    /// let mut tree = RBTree::new();
    /// assert!(tree.try_insert(8).is_ok());
    /// assert_eq!(tree.try_insert(8).unwrap_err().error(), Error::Duplicate);
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), InsertError<T>> {
        self.raw.insert(value, &self.comparator).inspect_err(|rejected| {
            debug!("insert rejected: {}", rejected.error());
        })
    }

    /// Removes the value equal to `value`, handing the stored one to the disposer.
    ///
    /// Returns whether a value was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert(1);
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        self.try_delete(value).is_ok()
    }

    /// Removes the value equal to `value`, handing the stored one to the disposer exactly once.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the tree has no disposer.
    /// - [`Error::NotFound`] if the tree is empty or holds no equal value.
    ///
    /// The tree is unchanged on error.
    pub fn try_delete(&mut self, value: &T) -> Result<(), Error> {
        let result = self.delete_with_disposer(value);
        if let Err(error) = result {
            debug!("delete rejected: {error}");
        }
        result
    }

    fn delete_with_disposer(&mut self, value: &T) -> Result<(), Error> {
        let disposer = self.disposer.as_mut().ok_or(Error::InvalidArgument)?;
        if self.raw.is_empty() {
            return Err(Error::NotFound);
        }
        let removed = self.raw.delete(value, &self.comparator)?;
        disposer.dispose(removed);
        Ok(())
    }

    /// Releases every value through the disposer, in post-order, and consumes the tree.
    ///
    /// Returns the number of values handed to the disposer; with no disposer configured the
    /// values are dropped and `0` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let tree: RBTree<_> = [10, 20, 5, 15, 30, 1].into_iter().collect();
    /// assert_eq!(tree.destroy(), 6);
    /// ```
    pub fn destroy(mut self) -> usize {
        self.clear()
    }

    /// Releases every value through the disposer, in post-order, leaving the tree empty and
    /// ready for reuse.
    ///
    /// Returns the number of values handed to the disposer.
    pub fn clear(&mut self) -> usize {
        match self.disposer.as_mut() {
            Some(disposer) => self.raw.drain_post_order(|value| disposer.dispose(value)),
            None => {
                self.raw.drain_post_order(drop);
                0
            }
        }
    }
}

impl<T, C: Comparator<T>, D> RBTree<T, C, D> {
    /// Returns `true` if the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let tree: RBTree<_> = ["a", "b"].into_iter().collect();
    /// assert!(tree.contains(&"a"));
    /// assert!(!tree.contains(&"c"));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.raw.find(value, &self.comparator).is_some()
    }

    /// Returns the stored value equal to `value`, if any.
    ///
    /// Useful when the comparator only looks at part of a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let mut tree = RBTree::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// tree.insert((7, 's'));
    /// assert_eq!(tree.get(&(7, '?')), Some(&(7, 's')));
    /// ```
    #[must_use]
    pub fn get(&self, value: &T) -> Option<&T> {
        let id = self.raw.find(value, &self.comparator)?;
        Some(self.raw.value(id))
    }

    /// Checks the tree's structural invariants: ordering, coloring, uniform black-height,
    /// parent links and length.
    ///
    /// # Errors
    ///
    /// [`Error::InconsistentState`] if any invariant is violated. A tree only modified through
    /// this API with a consistent comparator always passes.
    pub fn validate(&self) -> Result<(), Error> {
        self.raw.validate(&self.comparator).map(drop)
    }
}

impl<T, C, D> RBTree<T, C, D> {
    /// Returns the number of values in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of values the tree can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the smallest value.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.end(Direction::Left)
    }

    /// Returns the largest value.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.end(Direction::Right)
    }

    /// Calls `visit` on each value in ascending order, stopping as soon as it returns `false`.
    ///
    /// Returns `true` if every value was visited, including when the tree is empty. Any state
    /// the visitor needs is captured by the closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use aka_tree::RBTree;
    ///
    /// let tree: RBTree<_> = [10, 20, 5, 15, 30, 1].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// let finished = tree.for_each(|&value| {
    ///     if value == 15 {
    ///         return false;
    ///     }
    ///     visited.push(value);
    ///     true
    /// });
    /// assert!(!finished);
    /// assert_eq!(visited, [1, 5, 10]);
    /// ```
    pub fn for_each<F>(&self, visit: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.for_each_in_order(visit)
    }
}

impl<T: Ord> Default for RBTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>, D: Disposer<T>> Extend<T> for RBTree<T, C, D> {
    /// Inserts every value, skipping those that are rejected.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C, D> FromIterator<T> for RBTree<T, C, D>
where
    C: Comparator<T> + Default,
    D: Disposer<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::with_parts(C::default(), D::default());
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug, C, D> fmt::Debug for RBTree<T, C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.for_each(|value| {
            set.entry(value);
            true
        });
        set.finish()
    }
}
