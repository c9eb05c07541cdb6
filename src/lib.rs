//! A circular buffer that grows instead of overwriting.
//!
//! `GrowableRingBuffer` retains a time-ordered backlog of small `Copy`
//! records: a fast producer pushes one record per tick, a slower consumer
//! reads what has piled up and then discards the prefix it has handled. When
//! a push would overflow the backing block, the block doubles, so no
//! unconsumed record is ever dropped. Pushes are amortized `O(1)`.
//!
//! Records are addressed by *logical index*, the sequence number a record got
//! when it was pushed. Logical indices never change, including across
//! growth, so a consumer can remember "where it was" with a plain `usize`.
//!
//! # Feature Flags
//! The **growring** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd and implement `std::error::Error` for `AllocError`
//!   - Without it the crate is `no_std` and only needs `alloc`
//!
//! # Logging
//!
//! Growth and block release are reported through the `log` facade
//! (`debug` and `trace` levels). Nothing is printed unless the application
//! installs a logger.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! growring = "0.1"
//! ```
//!
//! To use it from a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! growring = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! One slot of the backing block is always kept free to tell a full buffer
//! from an empty one, so a block of `capacity()` slots retains at most
//! `capacity() - 1` records. The first push allocates `MIN_CAPACITY` slots.
//!
//! [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//! ```
//! use growring::GrowableRingBuffer;
//!
//! #[derive(Clone, Copy, Default, Debug, PartialEq)]
//! struct Frame {
//!     tick: u32,
//!     buttons: u8,
//! }
//!
//! let mut backlog = GrowableRingBuffer::new();
//! for tick in 0..10 {
//!     backlog.push(Frame { tick: tick, buttons: 0 });
//! }
//! assert_eq!(backlog.capacity(), 16);
//!
//! // the consumer handles everything up to tick 6
//! let handled = backlog.range(..6).filter(|f| f.buttons == 0).count();
//! assert_eq!(handled, 6);
//! backlog.pop_n(handled);
//!
//! assert_eq!(backlog.count(), 4);
//! assert_eq!(backlog[backlog.tail()].tick, 6);
//! ```
//!
//! # Consume in batches
//! ```
//! use growring::GrowableRingBuffer;
//!
//! let mut buf: GrowableRingBuffer<_> = (0..5).collect();
//!
//! let batch: Vec<_> = buf.iter().cloned().collect();
//! buf.pop_n(batch.len());
//! assert!(buf.is_empty());
//!
//! // logical indices keep counting
//! buf.push(5);
//! assert_eq!(buf.get(5), Some(&5));
//! assert_eq!(buf.get(0), None);
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;
#[macro_use]
extern crate log;
extern crate odds;
#[cfg(not(any(feature="std", test)))]
extern crate core as std;

mod ring;
mod utils;
pub mod error;

pub use error::AllocError;
pub use ring::{GrowableRingBuffer, IntoIter, Iter, RangeArgument, MIN_CAPACITY};
