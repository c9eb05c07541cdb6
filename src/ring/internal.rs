use alloc::boxed::Box;
use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use super::{GrowableRingBuffer, MIN_CAPACITY};
use utils::*;

impl<T> GrowableRingBuffer<T> {
    #[inline]
    pub(super) fn slot(&self, index: usize) -> usize {
        wrap_index(index, self.capacity())
    }

    #[inline]
    pub(super) fn buffer_read(&self, index: usize) -> &T {
        &self.xs[self.slot(index)]
    }

    #[inline]
    pub(super) fn buffer_write(&mut self, index: usize, element: T) {
        let slot = self.slot(index);
        self.xs[slot] = element;
    }

    #[inline]
    pub(super) fn push_expecting_space_available(&mut self, element: T) {
        debug_assert!(!self.is_full());
        let head = self.head;
        self.buffer_write(head, element);
        self.head = head + 1;
    }
}

impl<T: Copy + Default> GrowableRingBuffer<T> {
    /// Replaces the full block with one of twice the size.
    pub(super) fn grow(&mut self) {
        let new_capacity = grown_capacity(self.capacity(), MIN_CAPACITY);
        self.grow_to(new_capacity);
    }

    pub(super) fn grow_to(&mut self, new_capacity: usize) {
        let mut block = Vec::with_capacity(new_capacity);
        block.resize(new_capacity, T::default());
        self.move_into(block.into_boxed_slice());
    }

    /// Like `grow_to`, but leaves the buffer untouched when the block cannot
    /// be allocated.
    pub(super) fn try_grow_to(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
        let mut block = Vec::new();
        block.try_reserve_exact(new_capacity)?;
        block.resize(new_capacity, T::default());
        self.move_into(block.into_boxed_slice());
        Ok(())
    }

    /// Copies every retained element into `block` at the slot its logical
    /// index maps to there, then releases the old block.
    ///
    /// The counters keep their values: logical index `i` moves from
    /// `old[i % old_cap]` to `new[i % new_cap]`.
    fn move_into(&mut self, mut block: Box<[T]>) {
        let new_capacity = block.len();
        debug_assert!(new_capacity > self.count(),
                      "grow cap={} new_cap={} count={}",
                      self.capacity(),
                      new_capacity,
                      self.count());

        for index in self.tail..self.head {
            block[wrap_index(index, new_capacity)] = *self.buffer_read(index);
        }

        debug!("growing ring buffer from {} to {} slots ({} retained)",
               self.capacity(),
               new_capacity,
               self.count());
        self.xs = block;
    }
}
