use alloc::boxed::Box;
use alloc::fmt;
use alloc::string::String;
use alloc::vec::Vec;
use std::cmp;

pub use odds::IndexRange as RangeArgument;

use error::AllocError;
use utils::*;

mod internal;
mod iterator_impls;
mod trait_impls;

/// Smallest block allocated when an empty buffer first grows.
pub const MIN_CAPACITY: usize = 8;

/// `GrowableRingBuffer` is a circular queue that doubles its backing block
/// whenever a push would overflow it.
///
/// Elements are addressed by *logical index*: the sequence number the element
/// received when it was pushed. `tail()` is the logical index of the oldest
/// retained element and `head()` the index the next push will receive; both
/// only ever increase. The physical slot of logical index `i` is
/// `i % capacity()`.
///
/// # Capacity
///
/// One slot of the block is always left unused, so at most
/// `capacity() - 1` elements are retained before the next push grows the
/// block.
///
/// [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
pub struct GrowableRingBuffer<T> {
    xs: Box<[T]>,
    head: usize,
    tail: usize,
}

/// Front-to-back iterator over a run of logical indices
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [T],
    head: usize,
    tail: usize,
}

/// A by-value `GrowableRingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T: Copy> {
    inner: GrowableRingBuffer<T>,
}

impl<T> GrowableRingBuffer<T> {
    /// Creates an empty `GrowableRingBuffer` without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let buf: GrowableRingBuffer<u32> = GrowableRingBuffer::new();
    /// assert_eq!(buf.capacity(), 0);
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn new() -> GrowableRingBuffer<T> {
        GrowableRingBuffer {
            xs: Vec::new().into_boxed_slice(),
            head: 0,
            tail: 0,
        }
    }

    /// Logically empties the buffer, keeping the current block.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// buf.push(1);
    /// buf.push(2);
    /// buf.setup();
    /// assert_eq!(buf.count(), 0);
    /// assert_eq!(buf.tail(), 0);
    /// assert_eq!(buf.capacity(), 8);
    /// ```
    #[inline]
    pub fn setup(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// Releases the backing block and resets both counters.
    ///
    /// Calling it on a buffer that owns no block does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// buf.push(1);
    /// buf.clear();
    /// assert_eq!(buf.capacity(), 0);
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// ```
    pub fn clear(&mut self) {
        if self.capacity() > 0 {
            trace!("releasing ring buffer block of {} slots", self.capacity());
            self.xs = Vec::new().into_boxed_slice();
        }
        self.setup();
    }

    /// Returns the number of slots in the backing block.
    ///
    /// This is one more than the number of elements the block can retain.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Returns the number of retained elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// assert_eq!(buf.count(), 0);
    /// buf.push('a');
    /// assert_eq!(buf.count(), 1);
    /// ```
    #[inline]
    pub fn count(&self) -> usize {
        count(self.tail, self.head)
    }

    /// Logical index the next pushed element will receive.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Logical index of the oldest retained element.
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Returns true if no element is retained.
    ///
    /// A buffer without a block is always empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        let capacity = self.capacity();
        capacity == 0 || wrap_index(self.head, capacity) == wrap_index(self.tail, capacity)
    }

    /// Returns true if the next push has to grow the block.
    ///
    /// A buffer without a block is always full.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// assert!(buf.is_full());
    ///
    /// buf.extend(0..7);
    /// assert_eq!(buf.capacity(), 8);
    /// assert!(buf.is_full());
    ///
    /// buf.pop_n(1);
    /// assert!(!buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        let capacity = self.capacity();
        capacity == 0 || wrap_add(self.head, 1, capacity) == wrap_index(self.tail, capacity)
    }

    /// Retrieves the element at logical index `index`.
    ///
    /// Returns `None` unless `tail() <= index < head()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// buf.push(3);
    /// buf.push(4);
    /// buf.push(5);
    /// buf.pop_n(1);
    /// assert_eq!(buf.get(0), None);
    /// assert_eq!(buf.get(1), Some(&4));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if self.tail <= index && index < self.head {
            Some(self.buffer_read(index))
        } else {
            None
        }
    }

    /// Provides a reference to the oldest retained element.
    pub fn front(&self) -> Option<&T> {
        self.get(self.tail)
    }

    /// Provides a reference to the newest retained element.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.get(self.head - 1)
        }
    }

    /// Discards the oldest `n` elements.
    ///
    /// Asking for more elements than are retained empties the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf: GrowableRingBuffer<_> = (0..5).collect();
    /// buf.pop_n(2);
    /// assert_eq!(buf.front(), Some(&2));
    ///
    /// buf.pop_n(100);
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.count(), 0);
    /// ```
    #[inline]
    pub fn pop_n(&mut self, n: usize) {
        if n >= self.count() {
            self.tail = self.head;
        } else {
            self.tail += n;
        }
    }

    /// Returns a front-to-back iterator over the retained elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// buf.push(5);
    /// buf.push(3);
    /// buf.push(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            ring: &self.xs[..],
            head: self.head,
            tail: self.tail,
        }
    }

    /// Returns an iterator over a run of logical indices.
    ///
    /// A missing start bound means `tail()`, a missing end bound `head()`.
    ///
    /// # Panics
    ///
    /// Panics if the start is after the end or if the range reaches outside
    /// `tail()..head()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf: GrowableRingBuffer<_> = (10..20).collect();
    /// buf.pop_n(4);
    ///
    /// let batch: Vec<_> = buf.range(..7).cloned().collect();
    /// assert_eq!(batch, vec![14, 15, 16]);
    ///
    /// let rest: Vec<_> = buf.range(7..).cloned().collect();
    /// assert_eq!(rest, vec![17, 18, 19]);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<T>
        where R: RangeArgument<usize>
    {
        let start = range.start().unwrap_or(self.tail);
        let end = range.end().unwrap_or(self.head);
        assert!(start <= end, "range start {} is after its end {}", start, end);
        assert!(self.tail <= start && end <= self.head,
                "range {}..{} is outside the retained range {}..{}",
                start,
                end,
                self.tail,
                self.head);

        Iter {
            ring: &self.xs[..],
            head: end,
            tail: start,
        }
    }

    /// Returns a pair of slices which contain, in order, the retained
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf: GrowableRingBuffer<_> = (0..7).collect();
    /// buf.pop_n(5);
    /// buf.push(7);
    /// buf.push(8);
    ///
    /// assert_eq!(buf.as_slices(), (&[5, 6, 7][..], &[8][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.is_empty() {
            return (&[], &[]);
        }

        let tail = self.slot(self.tail);
        let head = self.slot(self.head);
        if tail < head {
            (&self.xs[tail..head], &[])
        } else {
            let (front, back) = self.xs.split_at(tail);
            (back, &front[..head])
        }
    }

    /// Renders both counters and every physical slot, in slot order.
    ///
    /// Slots that do not hold a retained element show whatever they held
    /// last, or the default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// buf.push(1u8);
    /// buf.push(2u8);
    /// buf.pop_n(1);
    /// assert_eq!(buf.to_debug_string(),
    ///            "tail: 1, head: 2, slots: [1, 2, 0, 0, 0, 0, 0, 0]");
    /// ```
    pub fn to_debug_string(&self) -> String
        where T: fmt::Debug
    {
        fmt::format(format_args!("tail: {}, head: {}, slots: {:?}",
                                 self.tail,
                                 self.head,
                                 &self.xs[..]))
    }
}

impl<T: Copy + Default> GrowableRingBuffer<T> {
    /// Creates an empty `GrowableRingBuffer` owning a block of at least
    /// `capacity` slots.
    ///
    /// Non-zero requests are rounded up to `MIN_CAPACITY`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::{GrowableRingBuffer, MIN_CAPACITY};
    ///
    /// let buf: GrowableRingBuffer<u64> = GrowableRingBuffer::with_capacity(3);
    /// assert_eq!(buf.capacity(), MIN_CAPACITY);
    ///
    /// let buf: GrowableRingBuffer<u64> = GrowableRingBuffer::with_capacity(100);
    /// assert_eq!(buf.capacity(), 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> GrowableRingBuffer<T> {
        let mut buf = GrowableRingBuffer::new();
        if capacity > 0 {
            buf.grow_to(cmp::max(capacity, MIN_CAPACITY));
        }
        buf
    }

    /// Appends an element, growing the block first if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the new block size overflows `isize::MAX` bytes. Running out
    /// of memory aborts the process, as it does for `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// buf.push('A');
    /// assert_eq!(buf.capacity(), 8);
    ///
    /// for c in "BCDEFG".chars() {
    ///     buf.push(c);
    /// }
    /// assert_eq!(buf.capacity(), 8);
    ///
    /// buf.push('H');
    /// assert_eq!(buf.capacity(), 16);
    /// assert_eq!(buf.count(), 8);
    /// ```
    pub fn push(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        self.push_expecting_space_available(element);
    }

    /// Appends an element like `push`, but reports a failed allocation
    /// instead of aborting.
    ///
    /// Return `Ok(())` if the push succeeds, or `Err(AllocError)` holding
    /// the element if the block could not grow. The buffer is unchanged in
    /// that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// assert!(buf.try_push(1).is_ok());
    /// assert_eq!(buf.front(), Some(&1));
    /// ```
    pub fn try_push(&mut self, element: T) -> Result<(), AllocError<T>> {
        if self.is_full() {
            let new_capacity = grown_capacity(self.capacity(), MIN_CAPACITY);
            if self.try_grow_to(new_capacity).is_err() {
                return Err(AllocError { element: element });
            }
        }
        self.push_expecting_space_available(element);
        Ok(())
    }
}

impl<T: Copy> GrowableRingBuffer<T> {
    /// Removes the oldest element and returns it, or `None` if the buffer
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::GrowableRingBuffer;
    ///
    /// let mut buf = GrowableRingBuffer::new();
    /// buf.push(1);
    /// buf.push(2);
    ///
    /// assert_eq!(buf.pop_front(), Some(1));
    /// assert_eq!(buf.pop_front(), Some(2));
    /// assert_eq!(buf.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let element = *self.buffer_read(self.tail);
        self.tail += 1;
        Some(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::vec::Vec;

    fn contents<T: Copy>(buf: &GrowableRingBuffer<T>) -> Vec<T> {
        (buf.tail()..buf.head()).map(|i| buf[i]).collect()
    }

    #[test]
    fn starts_without_block() {
        let buf: GrowableRingBuffer<u32> = GrowableRingBuffer::new();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.count(), 0);
        assert!(buf.is_empty());
        assert!(buf.is_full());
        assert_eq!(buf.get(0), None);
        assert_eq!(buf.front(), None);
        assert_eq!(buf.back(), None);
    }

    #[test]
    fn frame_backlog_scenario() {
        let mut buf = GrowableRingBuffer::new();

        buf.push('A');
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.count(), 1);
        assert_eq!(buf.get(0), Some(&'A'));

        for c in "BCDEFG".chars() {
            buf.push(c);
        }
        assert_eq!(buf.count(), 7);
        assert_eq!(buf.capacity(), 8);
        assert!(buf.is_full());

        buf.push('H');
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.count(), 8);
        for (i, c) in "ABCDEFGH".chars().enumerate() {
            assert_eq!(buf.get(i), Some(&c));
        }

        buf.pop_n(3);
        assert_eq!(buf.count(), 5);
        assert_eq!(buf.get(buf.tail()), Some(&'D'));

        buf.pop_n(100);
        assert!(buf.is_empty());
        assert_eq!(buf.count(), 0);
        assert_eq!(buf.tail(), buf.head());
    }

    #[test]
    fn fifo_order() {
        let mut buf = GrowableRingBuffer::new();
        for i in 0..100u32 {
            buf.push(i);
        }
        assert_eq!(contents(&buf), (0..100).collect::<Vec<_>>());
        assert_eq!(buf.iter().cloned().collect::<Vec<_>>(),
                   (0..100).collect::<Vec<_>>());
        assert_eq!(buf.iter().rev().next(), Some(&99));
    }

    #[test]
    fn growth_after_wraparound_keeps_logical_indices() {
        let mut buf = GrowableRingBuffer::new();
        buf.extend(0..7usize);
        buf.pop_n(5);
        buf.extend(7..12usize);

        // slots 0..4 now hold 8..11, slots 5..7 hold 5..7
        assert_eq!(buf.capacity(), 8);
        assert!(buf.is_full());
        assert_eq!(buf.as_slices(), (&[5, 6, 7][..], &[8, 9, 10, 11][..]));

        buf.push(12);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.tail(), 5);
        assert_eq!(buf.head(), 13);
        for i in 5..13 {
            assert_eq!(buf.get(i), Some(&i));
        }
        assert_eq!(buf.as_slices(), (&[5, 6, 7, 8, 9, 10, 11, 12][..], &[][..]));
    }

    #[test]
    fn capacity_invariant_against_model() {
        let mut buf = GrowableRingBuffer::new();
        let mut model = VecDeque::new();

        for step in 0..2000u64 {
            buf.push(step);
            model.push_back(step);

            if step % 7 == 0 {
                let n = (step % 5) as usize;
                buf.pop_n(n);
                for _ in 0..n {
                    model.pop_front();
                }
            }
            if step % 311 == 0 {
                assert_eq!(buf.pop_front(), model.pop_front());
            }

            assert!(buf.count() < buf.capacity());
            assert_eq!(buf.count(), model.len());
            assert_eq!(buf.is_empty(), model.is_empty());
            assert_eq!(buf.front(), model.front());
            assert_eq!(buf.back(), model.back());
        }
        assert!(buf.iter().eq(model.iter()));
    }

    #[test]
    fn pop_n_clamps() {
        let mut buf: GrowableRingBuffer<_> = (0..3).collect();
        buf.pop_n(0);
        assert_eq!(buf.count(), 3);
        buf.pop_n(3);
        assert!(buf.is_empty());
        assert_eq!(buf.tail(), 3);

        buf.pop_n(usize::max_value());
        assert_eq!(buf.count(), 0);
        assert_eq!(buf.tail(), buf.head());

        let mut empty: GrowableRingBuffer<u8> = GrowableRingBuffer::new();
        empty.pop_n(5);
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut buf: GrowableRingBuffer<u8> = GrowableRingBuffer::new();
        buf.clear();
        assert_eq!(buf.capacity(), 0);

        buf.push(1);
        buf.push(2);
        buf.clear();
        buf.clear();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.count(), 0);
        assert_eq!(buf.head(), 0);

        buf.push(3);
        assert_eq!(buf.capacity(), MIN_CAPACITY);
        assert_eq!(buf.get(0), Some(&3));
    }

    #[test]
    fn setup_keeps_block() {
        let mut buf: GrowableRingBuffer<_> = (0..10).collect();
        assert_eq!(buf.capacity(), 16);
        buf.setup();
        assert_eq!(buf.capacity(), 16);
        assert!(buf.is_empty());
        assert_eq!(buf.get(0), None);

        buf.push(42);
        assert_eq!(buf.get(0), Some(&42));
    }

    #[test]
    fn range_reads_consumer_batches() {
        let mut buf: GrowableRingBuffer<_> = (0..20).collect();
        buf.pop_n(8);

        let all: Vec<_> = buf.range(..).cloned().collect();
        assert_eq!(all, (8..20).collect::<Vec<_>>());
        let mid: Vec<_> = buf.range(10..12).cloned().collect();
        assert_eq!(mid, vec![10, 11]);
        assert_eq!(buf.range(12..12).count(), 0);
        assert_eq!(buf.range(..15).len(), 7);
    }

    #[test]
    #[should_panic]
    fn range_rejects_consumed_indices() {
        let mut buf: GrowableRingBuffer<_> = (0..5).collect();
        buf.pop_n(2);
        let _ = buf.range(1..3);
    }

    #[test]
    #[should_panic]
    fn index_outside_retained_range() {
        let mut buf: GrowableRingBuffer<_> = (0..5).collect();
        buf.pop_n(2);
        let _first = buf[1];
    }

    #[test]
    fn try_push_grows_like_push() {
        let mut buf = GrowableRingBuffer::new();
        for i in 0..9 {
            assert_eq!(buf.try_push(i), Ok(()));
        }
        assert_eq!(buf.capacity(), 16);
        assert_eq!(contents(&buf), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn debug_string_shows_physical_slots() {
        let mut buf: GrowableRingBuffer<u8> = GrowableRingBuffer::new();
        assert_eq!(buf.to_debug_string(), "tail: 0, head: 0, slots: []");

        buf.extend(1..8);
        buf.pop_n(6);
        buf.push(8);
        buf.push(9);
        assert_eq!(buf.to_debug_string(),
                   "tail: 6, head: 9, slots: [9, 2, 3, 4, 5, 6, 7, 8]");
        assert_eq!(format!("{:?}", buf), "[7, 8, 9]");
    }

    #[test]
    fn with_capacity_rounds_up() {
        let buf: GrowableRingBuffer<u8> = GrowableRingBuffer::with_capacity(0);
        assert_eq!(buf.capacity(), 0);
        let mut buf: GrowableRingBuffer<u8> = GrowableRingBuffer::with_capacity(1);
        assert_eq!(buf.capacity(), MIN_CAPACITY);
        buf.extend(0..7);
        assert_eq!(buf.capacity(), MIN_CAPACITY);
        buf.push(7);
        assert_eq!(buf.capacity(), MIN_CAPACITY * 2);
    }
}
