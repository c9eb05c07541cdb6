//! Errors reported by `GrowableRingBuffer`.

#[cfg(feature = "std")]
use std::error::Error;
use std::fmt;

/// Error value indicating the backing block could not grow
///
/// This error is only returned by `GrowableRingBuffer::try_push`; the buffer
/// is left exactly as it was before the call.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct AllocError<T = ()> {
    /// The element that could not be stored.
    pub element: T,
}

const ALLOCERROR: &'static str = "insufficient memory to grow ring buffer";

impl<T> AllocError<T> {
    /// Drops the rejected element, keeping only the error.
    pub fn simplify(self) -> AllocError {
        AllocError { element: () }
    }
}

#[cfg(feature = "std")]
impl<T> Error for AllocError<T> {}

impl<T> fmt::Display for AllocError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ALLOCERROR)
    }
}

impl<T> fmt::Debug for AllocError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "AllocError", ALLOCERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn messages_do_not_need_debug_element() {
        struct Opaque;

        let err = AllocError { element: Opaque };
        assert_eq!(err.to_string(), "insufficient memory to grow ring buffer");
        assert_eq!(format!("{:?}", err),
                   "AllocError: insufficient memory to grow ring buffer");
        assert_eq!(err.simplify(), AllocError { element: () });
    }
}
