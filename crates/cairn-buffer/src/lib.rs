// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exclusive ownership of a single contiguous element block.
//!
//! This crate provides [`RawBuffer<T>`], the resource holder underneath
//! `cairn-vec`. A `RawBuffer` owns exactly one heap block sized for a fixed
//! number of elements, keeps every slot initialized to a valid `T` for the
//! block's whole lifetime, and releases the block on drop. It tracks no
//! logical element count and implements no growth: it is a dumb, infallible
//! owner, and the only crate in the workspace that touches raw pointers.
//!
//! # Ownership model
//!
//! A block has exactly one owner at any time. `RawBuffer` is move-only
//! (no `Clone`); ownership changes hands through Rust moves, [`RawBuffer::swap`],
//! or [`RawBuffer::into_raw_parts`]. Deep copies are a caller concern.
//!
//! # Example
//!
//! ```rust
//! use cairn_buffer::RawBuffer;
//!
//! let mut buffer: RawBuffer<u32> = RawBuffer::new(4);
//! assert_eq!(buffer.len(), 4);
//! assert!(buffer.is_allocated());
//!
//! // Every slot is default-initialized.
//! assert_eq!(buffer.as_slice(), &[0, 0, 0, 0]);
//!
//! buffer.as_mut_slice()[2] = 7;
//! assert_eq!(buffer.as_slice(), &[0, 0, 7, 0]);
//!
//! // A zero-length buffer holds no block at all.
//! let empty: RawBuffer<u32> = RawBuffer::empty();
//! assert!(!empty.is_allocated());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod raw_buffer;

#[cfg(test)]
mod tests;

pub use raw_buffer::RawBuffer;
