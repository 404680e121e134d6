// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity reservation request marker.

/// A request for pre-allocated, logically empty capacity.
///
/// Distinguishes "construct with `n` reserved slots" from "construct with
/// `n` elements" at the call site: a `CairnVec` built from a
/// `ReserveRequest` has the requested capacity and a length of zero, while
/// [`CairnVec::with_len`](crate::CairnVec::with_len) builds `n` live
/// default-valued elements.
///
/// # Example
///
/// ```rust
/// use cairn_vec::{CairnVec, ReserveRequest};
///
/// let reserved = CairnVec::<u8>::from(ReserveRequest::new(32));
/// assert_eq!(reserved.len(), 0);
/// assert_eq!(reserved.capacity(), 32);
///
/// let filled = CairnVec::<u8>::with_len(32);
/// assert_eq!(filled.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    /// Creates a request for `capacity` pre-allocated slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
