// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A removal-capable cursor over [`DynamicArrayList`](crate::DynamicArrayList).
//!
//! [`Cursor`] walks the list front to back with explicit `has_next` / `next`
//! calls and can remove the element most recently returned by `next`. The
//! cursor holds the list's unique borrow, so the list cannot be changed
//! behind its back.
//!
//! ```rust
//! use dyn_array_list::DynamicArrayList;
//!
//! let mut v = DynamicArrayList::from([1, 2, 3, 4]);
//! let mut cursor = v.cursor();
//! while cursor.has_next() {
//!     if *cursor.next().unwrap() % 2 == 0 {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(v.to_vec(), [1, 3]);
//! ```

// Crate imports
use crate::{error::Error, list::DynamicArrayList};

/// Cursor returned by [`DynamicArrayList::cursor`].
///
/// States: before the first `next`, positioned after some element, or
/// exhausted. `position` is the index the next call to `next` reads.
pub struct Cursor<'a, E> {
    list: &'a mut DynamicArrayList<E>,
    position: usize,
    last_visited: Option<usize>,
}

impl<E> DynamicArrayList<E> {
    /// Returns a cursor positioned before the first element.
    ///
    /// Restarting iteration means calling `cursor()` again.
    #[inline]
    pub fn cursor(&mut self) -> Cursor<'_, E> {
        Cursor {
            list: self,
            position: 0,
            last_visited: None,
        }
    }
}

impl<E> Cursor<'_, E> {
    /// Returns `true` if `next` would yield an element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    /// Returns the element at the cursor and advances past it.
    ///
    /// Returns [`Error::EndOfSequence`] once every element has been visited.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&E, Error> {
        if !self.has_next() {
            return Err(Error::EndOfSequence);
        }
        let index = self.position;
        self.position += 1;
        self.last_visited = Some(index);
        self.list.get(index)
    }

    /// Removes and returns the element most recently returned by `next`.
    ///
    /// The following `next` yields the element that came after the removed
    /// one. Returns [`Error::IllegalState`] if `next` has not been called yet,
    /// or if the element it returned was already removed.
    pub fn remove(&mut self) -> Result<E, Error> {
        let index = self.last_visited.ok_or(Error::IllegalState)?;
        let out = self.list.remove(index)?;
        self.position -= 1;
        self.last_visited = None;
        Ok(out)
    }

    /// Index that the next call to `next` reads.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of elements `next` can still yield.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.list.len() - self.position
    }
}
