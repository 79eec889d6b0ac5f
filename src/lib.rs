#![no_std]

//! `Sequence`: an ordered, cursor-addressable container backed by a manually
//! managed growable buffer.
//!
//! A `Sequence<T>` owns a contiguous buffer of `capacity` slots, of which the
//! first `len` hold items. A cursor designates the *current item*, or sits one
//! past the last item to mean "no current item". Every mutating operation
//! keeps `len <= capacity` and `cursor <= len`.
//!
//! This crate is `no_std` compatible; it needs only `alloc`.
//!
//! # Cursor Interface
//!
//! ```
//! # use cursorseq::Sequence;
//! let mut seq = Sequence::new(2);
//!
//! seq.insert(10);          // [10], current = 10
//! seq.insert(20);          // [20, 10], current = 20
//! seq.advance();           // current = 10
//! seq.advance();           // no current item
//! assert!(!seq.is_item());
//!
//! seq.attach(30);          // no current item: attaches at the back
//! assert_eq!(seq.as_slice(), &[20, 10, 30]);
//! assert_eq!(*seq.current(), 30);
//!
//! seq.start();
//! assert_eq!(seq.remove_current(), 20);
//! assert_eq!(*seq.current(), 10);
//! assert_eq!(seq.size(), 2);
//! ```
//!
//! `insert` places the new item *before* the current one (or at the front),
//! `attach` places it *after* the current one (or at the back). Either way the
//! new item becomes current.
//!
//! # Contract Violations
//!
//! `advance`, `current`, `current_mut` and `remove_current` require a current
//! item and panic without one. Check `is_item()` first, or use the `try_`
//! variants, which return `SequenceError::NoCurrentItem` and leave the
//! sequence untouched:
//!
//! ```
//! # use cursorseq::{Sequence, SequenceError};
//! let mut seq: Sequence<u32> = Sequence::new(4);
//! assert_eq!(
//!     seq.try_advance(),
//!     Err(SequenceError::NoCurrentItem { cursor: 0, len: 0 })
//! );
//! ```
//!
//! # Growth
//!
//! Inserting into a full buffer first grows it to `floor(1.5 * capacity) + 1`
//! slots, so repeated insertion costs amortized O(1) in reallocation. Shifting
//! items to make room is O(n). `resize` can be called directly; requests below
//! the current length (or below 1) are raised rather than rejected.
//!
//! ```
//! # use cursorseq::Sequence;
//! let mut seq = Sequence::new(1);
//! seq.attach('a');
//! seq.attach('b');
//! assert_eq!(seq.capacity(), 2);
//!
//! seq.resize(0);
//! assert_eq!(seq.capacity(), 2);
//! ```
//!
//! # Copies
//!
//! `clone` and `clone_from` produce an independent sequence with its own
//! buffer, the same capacity, the same items and the same cursor position.
//!
//! # Logging
//!
//! Buffer reallocations are reported through the `log` facade at `trace`
//! (every resize) and `debug` (implicit growth) levels.

extern crate alloc;

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::{Sequence, DEFAULT_CAPACITY};
pub use error::{Result, SequenceError};
pub use iter::SequenceIter;
