use core::fmt;
use core::num::NonZero;

#[cfg(test)]
type Slot = u16;
#[cfg(not(test))]
type Slot = u32;

/// Position of a node in the tree's arena, stored off by one so that zero marks "no link".
///
/// Every node carries three `Option<NodeId>` links, each the width of a `Slot`.
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<Slot>);

impl NodeId {
    /// Largest slot index a `NodeId` can name.
    pub(crate) const MAX: usize = (Slot::MAX - 1) as usize;

    /// Names slot `index`, or `None` once the arena has used up every id.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn checked_new(index: usize) -> Option<Self> {
        if index > Self::MAX {
            return None;
        }
        match NonZero::new((index + 1) as Slot) {
            Some(slot) => Some(Self(slot)),
            None => None,
        }
    }

    #[cfg(test)]
    pub(crate) const fn from_index(index: usize) -> Self {
        match Self::checked_new(index) {
            Some(id) => id,
            None => panic!("`NodeId::from_index()` - no id left for `index`!"),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_index())
    }
}
