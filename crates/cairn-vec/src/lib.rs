// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous-storage sequence container.
//!
//! [`CairnVec<T>`] is a dynamic array built on `cairn-buffer`'s
//! [`RawBuffer`](cairn_buffer::RawBuffer): one exclusively owned contiguous
//! block, a logical length, and an explicit capacity. The crate owns the
//! whole element-lifecycle algorithm (doubling growth, relocation across
//! reallocations, mid-sequence insertion and removal) while the buffer
//! underneath stays a dumb resource holder.
//!
//! # Core Guarantees
//!
//! - **Amortized O(1) append**: [`push_back`](CairnVec::push_back) doubles
//!   capacity (`max(1, 2 · capacity)`) when the block is full.
//! - **Exact reservation**: [`reserve`](CairnVec::reserve) and
//!   [`resize`](CairnVec::resize) grow to exactly the requested capacity.
//! - **Allocate-before-swap**: a grown block is fully built before the old
//!   one is released, so a fatal allocation failure never leaves the
//!   container in a torn state.
//! - **Value semantics**: `Clone` deep-copies exactly `len()` elements into
//!   storage sized to `len()`; moves are O(1) native Rust moves.
//!
//! Operations that allocate or grow require `T: Default`, because every
//! allocated slot holds a valid value at all times, including the spare
//! slots between `len()` and `capacity()`.
//!
//! # Example: building and reshaping
//!
//! ```rust
//! use cairn_vec::{CairnVec, cairn_vec};
//!
//! let mut vec = cairn_vec![1, 2, 3];
//! assert_eq!(vec.len(), 3);
//!
//! let pos = vec.insert(1, 9);
//! assert_eq!(pos, 1);
//! assert_eq!(vec.as_slice(), &[1, 9, 2, 3]);
//!
//! let next = vec.erase(1);
//! assert_eq!(next, 1);
//! assert_eq!(vec.as_slice(), &[1, 2, 3]);
//! ```
//!
//! # Example: explicit capacity control
//!
//! ```rust
//! use cairn_vec::{CairnVec, ReserveRequest};
//!
//! let mut vec = CairnVec::<u32>::from(ReserveRequest::new(10));
//! assert_eq!(vec.len(), 0);
//! assert_eq!(vec.capacity(), 10);
//!
//! for i in 0..10 {
//!     vec.push_back(i);
//! }
//! // Ten appends fit the reservation without reallocating.
//! assert_eq!(vec.capacity(), 10);
//!
//! // The eleventh triggers the doubling policy.
//! vec.push_back(10);
//! assert_eq!(vec.capacity(), 20);
//! ```
//!
//! # Example: checked access
//!
//! ```rust
//! use cairn_vec::{CairnVec, CairnVecError};
//!
//! let vec = CairnVec::from([1, 2, 3]);
//! assert_eq!(vec.at(0), Ok(&1));
//! assert_eq!(vec.at(5), Err(CairnVecError::OutOfRange { index: 5, len: 3 }));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod cairn_vec;
mod error;
mod macros;
mod reserve;

#[cfg(test)]
mod tests;

pub use cairn_vec::CairnVec;
pub use error::CairnVecError;
pub use reserve::ReserveRequest;
