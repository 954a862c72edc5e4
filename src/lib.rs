//! A minimal, word-packed bitmap with fast forward bit scanning, written in
//! pure Rust. `no_std`, no heap / `alloc`, no `unsafe`.
//!
//! The bitmap is caller-owned storage: a slice of `usize` words plus a logical
//! bit length that the caller passes to every operation. Nothing here
//! allocates or owns memory, which makes the primitive usable anywhere a flat
//! word buffer already exists, from a stack array to an arena slab.
//!
//! # Examples
//! ```
//! use word_bitmap::{capacity_words, find_next_clear, set_bit, zero};
//!
//! const SLOTS: usize = 100;
//! let mut map = [0usize; capacity_words(SLOTS)];
//! zero(&mut map, SLOTS);
//!
//! // claim the two lowest free slots
//! let first = find_next_clear(&map, SLOTS, 0);
//! set_bit(&mut map, first);
//! let second = find_next_clear(&map, SLOTS, 0);
//! assert_eq!((first, second), (0, 1));
//! ```
//!
//! # Use Cases
//!
//! - Free-lists and slot allocators, where one bit tracks one slot and
//!   "lowest free index" must be found quickly
//! - Scheduler ready-queues and quota trackers
//! - Embedded and other allocation-free environments
//!
//! # Features
//!
//! - `#![no_std]` compatible, stack-only, storage stays with the caller
//! - [`capacity_words`] is `const`, so arrays can be sized straight from a
//!   bit count
//! - Word-at-a-time forward scans: [`find_next_set`], [`find_next_clear`]
//! - Bulk initialization: [`fill`], [`zero`]
//! - Single-bit access: [`set_bit`], [`clear_bit`], [`test_bit`]
//! - Length-bounded population count: [`weight`]
//!
//! Bits past the logical length that share the final storage word (the
//! overhead bits) never escape: [`fill`] forces them to zero, scans refuse to
//! report them, and [`weight`] ignores them.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bitmap;

pub use bitmap::{
    WORD_BITS, capacity_words, clear_bit, fill, find_next_clear, find_next_set, set_bit, test_bit,
    weight, zero,
};
