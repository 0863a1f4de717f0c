use alloc::vec::Vec;

use super::handle::NodeId;

/// Slot storage for tree nodes. Freed slots are recycled before the backing vector grows, so a
/// `NodeId` stays valid until its slot is taken.
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.min(NodeId::MAX + 1)),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `element`, handing it back instead of aborting when no slot can be found for it.
    pub(crate) fn try_alloc(&mut self, element: T) -> Result<NodeId, T> {
        if let Some(id) = self.free.pop() {
            self.slots[id.to_index()] = Some(element);
            return Ok(id);
        }

        let Some(id) = NodeId::checked_new(self.slots.len()) else {
            return Err(element);
        };
        if self.slots.try_reserve(1).is_err() {
            return Err(element);
        }
        // Room for every slot in the free list, so `take` never allocates.
        if self.free.try_reserve(self.slots.len() + 1 - self.free.len()).is_err() {
            return Err(element);
        }
        self.slots.push(Some(element));
        Ok(id)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.slots[id.to_index()].as_ref().expect("`Arena::get()` - `id` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.to_index()].as_mut().expect("`Arena::get_mut()` - `id` is invalid!")
    }

    /// Returns mutable references to two distinct live slots.
    pub(crate) fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut T, &mut T) {
        let (a, b) = (a.to_index(), b.to_index());
        assert_ne!(a, b, "`Arena::pair_mut()` - ids must be distinct!");
        let (low, high, swapped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(high);
        let low = head[low].as_mut().expect("`Arena::pair_mut()` - `a` is invalid!");
        let high = tail[0].as_mut().expect("`Arena::pair_mut()` - `b` is invalid!");
        if swapped { (high, low) } else { (low, high) }
    }

    pub(crate) fn take(&mut self, id: NodeId) -> T {
        let element = self.slots[id.to_index()].take().expect("`Arena::take()` - `id` is invalid!");
        self.free.push(id);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
