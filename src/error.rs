// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynamicArrayList` and its cursor.
//!
//! These errors represent bounds and cursor-state conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`DynamicArrayList`](crate::DynamicArrayList)
/// and [`Cursor`](crate::Cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index was outside the valid range of the operation.
    ///
    /// `len` is the logical length of the list at the time of the call.
    OutOfBounds { index: usize, len: usize },
    /// [`Cursor::next`](crate::Cursor::next) was called with no elements left.
    EndOfSequence,
    /// [`Cursor::remove`](crate::Cursor::remove) was called without a pending
    /// element returned by `next`.
    IllegalState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::EndOfSequence => f.write_str("no more elements"),
            Self::IllegalState => f.write_str("no element pending removal"),
        }
    }
}

impl CoreError for Error {}
