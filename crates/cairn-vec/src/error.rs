// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for cairn-vec.

use thiserror::Error;

/// Errors that can occur when working with a [`CairnVec`](crate::CairnVec).
///
/// Only checked element access is fallible. Precondition violations
/// (`pop_back` on an empty container, `insert`/`erase` positions past the
/// end) are programming errors and panic instead, and allocation failure
/// aborts; neither is represented here.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CairnVecError {
    /// A checked access used an index at or past the logical length.
    #[error("index out of range: {index} >= {len}")]
    OutOfRange {
        /// The requested element offset.
        index: usize,
        /// The logical length at the time of the access.
        len: usize,
    },
}
