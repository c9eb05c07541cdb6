/// Physical slot of a logical index.
#[inline]
pub fn wrap_index(index: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    index % capacity
}

/// Physical slot of `index + addend`, without overflowing the logical counter.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (wrap_index(index, capacity) + addend) % capacity
}

#[inline]
pub fn count(tail: usize, head: usize) -> usize {
    debug_assert!(tail <= head, "tail={} head={}", tail, head);
    head - tail
}

/// Capacity of the block that replaces a full one.
#[inline]
pub fn grown_capacity(capacity: usize, minimum: usize) -> usize {
    match capacity.checked_mul(2) {
        Some(doubled) if doubled > minimum => doubled,
        Some(_) => minimum,
        None => usize::max_value(),
    }
}
