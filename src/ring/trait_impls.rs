use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::Index;

use super::*;

impl<T: Clone> Clone for GrowableRingBuffer<T> {
    fn clone(&self) -> GrowableRingBuffer<T> {
        GrowableRingBuffer {
            xs: self.xs.clone(),
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Default for GrowableRingBuffer<T> {
    #[inline]
    fn default() -> GrowableRingBuffer<T> {
        GrowableRingBuffer::new()
    }
}

/// Two buffers are equal when they retain equal elements in the same order,
/// whatever their capacities and counters.
impl<T: PartialEq> PartialEq for GrowableRingBuffer<T> {
    fn eq(&self, other: &GrowableRingBuffer<T>) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableRingBuffer<T> {}

impl<T: Hash> Hash for GrowableRingBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count().hash(state);
        let (a, b) = self.as_slices();
        Hash::hash_slice(a, state);
        Hash::hash_slice(b, state);
    }
}

/// Indexing is by logical index, like `get`.
impl<T> Index<usize> for GrowableRingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(element) => element,
            None => {
                panic!("index out of bounds: the retained range is {}..{} but the index is {}",
                       self.tail,
                       self.head,
                       index)
            }
        }
    }
}

impl<T: Copy + Default> iter::FromIterator<T> for GrowableRingBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = GrowableRingBuffer::new();
        for elt in iter {
            buf.push(elt);
        }
        buf
    }
}

impl<T: Copy> IntoIterator for GrowableRingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a GrowableRingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Extend the `GrowableRingBuffer` with an iterator.
///
/// Every element is pushed; the block grows as often as needed.
impl<T: Copy + Default> Extend<T> for GrowableRingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push(elt);
        }
    }
}

impl<'a, T: 'a + Copy + Default> Extend<&'a T> for GrowableRingBuffer<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for elt in iter {
            self.push(*elt);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableRingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::vec::Vec;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn eq_ignores_counters_and_capacity() {
        let mut shifted: GrowableRingBuffer<_> = (0..20).collect();
        shifted.pop_n(17);
        let fresh: GrowableRingBuffer<_> = (17..20).collect();

        assert_eq!(shifted.capacity(), 32);
        assert_eq!(fresh.capacity(), 8);
        assert_eq!(shifted, fresh);
        assert_eq!(hash_of(&shifted), hash_of(&fresh));

        shifted.push(20);
        assert!(shifted != fresh);
    }

    #[test]
    fn clone_is_independent() {
        let mut buf: GrowableRingBuffer<_> = (0..6).collect();
        let cloned = buf.clone();
        buf.pop_n(2);
        buf.push(6);

        assert_eq!(cloned.iter().cloned().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(cloned.tail(), 0);
        assert_eq!(buf.iter().cloned().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn into_iter_drains_front_to_back() {
        let mut buf: GrowableRingBuffer<_> = (0..10).collect();
        buf.pop_n(4);
        let iter = buf.into_iter();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.collect::<Vec<_>>(), vec![4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn extend_by_reference() {
        let mut buf: GrowableRingBuffer<u16> = GrowableRingBuffer::new();
        buf.extend(&[1, 2, 3]);
        buf.extend([4, 5].iter());
        assert_eq!(format!("{:?}", buf), "[1, 2, 3, 4, 5]");

        let mut seen = Vec::new();
        for x in &buf {
            seen.push(*x);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }
}
