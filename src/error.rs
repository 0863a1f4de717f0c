use core::fmt;

/// The reasons an operation on an [`RBTree`](crate::RBTree) can be rejected.
///
/// Every failure is reported before the tree is modified, so a rejected call always leaves the
/// tree exactly as it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// A callback the operation depends on was not configured, e.g. deleting from a tree built
    /// with [`RBTree::without_disposer`](crate::RBTree::without_disposer).
    InvalidArgument,
    /// The tree already holds a value comparing equal to the one being inserted.
    Duplicate,
    /// No value comparing equal to the argument is stored in the tree.
    NotFound,
    /// Storage for a new node could not be obtained.
    AllocationFailure,
    /// The tree's bookkeeping disagrees with its shape or coloring.
    InconsistentState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Error::InvalidArgument => "a required callback is not configured",
            Error::Duplicate => "an equal value is already present",
            Error::NotFound => "no equal value is present",
            Error::AllocationFailure => "node storage could not be allocated",
            Error::InconsistentState => "tree structure is inconsistent",
        };
        f.write_str(message)
    }
}

impl core::error::Error for Error {}

/// A rejected insertion, handing the value back to the caller.
///
/// Ownership only moves into the tree when an insertion succeeds. This is returned by
/// [`RBTree::try_insert`](crate::RBTree::try_insert).
///
/// # Examples
///
/// ```
/// use aka_tree::{Error, RBTree};
///
/// let mut tree = RBTree::new();
/// tree.try_insert(String::from("kiwi")).unwrap();
///
/// let rejected = tree.try_insert(String::from("kiwi")).unwrap_err();
/// assert_eq!(rejected.error(), Error::Duplicate);
/// assert_eq!(rejected.into_value(), "kiwi");
/// ```
pub struct InsertError<T> {
    error: Error,
    value: T,
}

impl<T> InsertError<T> {
    pub(crate) fn new(error: Error, value: T) -> Self {
        Self { error, value }
    }

    /// Returns why the insertion was rejected.
    #[must_use]
    pub fn error(&self) -> Error {
        self.error
    }

    /// Returns a reference to the value that was not inserted.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Gives the value that was not inserted back to the caller.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

// Manual impl so that `T` does not need to be `Debug` for `unwrap()` on an insert result.
impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError").field("error", &self.error).finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insertion rejected: {}", self.error)
    }
}

impl<T> core::error::Error for InsertError<T> {}

impl<T> From<InsertError<T>> for Error {
    fn from(rejected: InsertError<T>) -> Self {
        rejected.error
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(Error::Duplicate.to_string(), "an equal value is already present");
        assert_eq!(Error::NotFound.to_string(), "no equal value is present");
        assert_eq!(
            InsertError::new(Error::AllocationFailure, 7).to_string(),
            "insertion rejected: node storage could not be allocated"
        );
    }

    #[test]
    fn insert_error_returns_value() {
        let rejected = InsertError::new(Error::Duplicate, [1, 2, 3]);
        assert_eq!(rejected.error(), Error::Duplicate);
        assert_eq!(rejected.value(), &[1, 2, 3]);
        assert_eq!(Error::from(rejected), Error::Duplicate);
    }
}
