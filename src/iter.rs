// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynamicArrayList`](crate::DynamicArrayList).
//!
//! - `Iter` and `IterMut` borrow the list and yield references in index order.
//! - `IntoIter<E>` yields by value.
//!
//! All three support `DoubleEndedIterator`, `ExactSizeIterator`, and
//! `FusedIterator`. For removal during iteration see [`Cursor`](crate::Cursor).

// Crate imports
use crate::list::DynamicArrayList;

// Alloc imports
use alloc::vec;

// Core imports
use core::{iter::FusedIterator, slice};

/// Borrowing iterator returned by [`DynamicArrayList::iter`].
pub struct Iter<'a, E> {
    pub(crate) inner: slice::Iter<'a, Option<E>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;
    fn next(&mut self) -> Option<&'a E> {
        self.inner.next().and_then(Option::as_ref)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}
impl<E> FusedIterator for Iter<'_, E> {}
impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Mutable borrowing iterator returned by [`DynamicArrayList::iter_mut`].
pub struct IterMut<'a, E> {
    pub(crate) inner: slice::IterMut<'a, Option<E>>,
}

impl<'a, E> Iterator for IterMut<'a, E> {
    type Item = &'a mut E;
    fn next(&mut self) -> Option<&'a mut E> {
        self.inner.next().and_then(Option::as_mut)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for IterMut<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_mut)
    }
}
impl<E> FusedIterator for IterMut<'_, E> {}
impl<E> ExactSizeIterator for IterMut<'_, E> {}

/// Owned iterator returned by `DynamicArrayList::into_iter()`.
///
/// Yields elements by value from front to back.
pub struct IntoIter<E> {
    pub(crate) inner: vec::IntoIter<Option<E>>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;
    fn next(&mut self) -> Option<E> {
        self.inner.next().flatten()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<E> {
        self.inner.next_back().flatten()
    }
}
impl<E> FusedIterator for IntoIter<E> {}
impl<E> ExactSizeIterator for IntoIter<E> {}

impl<'a, E> IntoIterator for &'a DynamicArrayList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, E> IntoIterator for &'a mut DynamicArrayList<E> {
    type Item = &'a mut E;
    type IntoIter = IterMut<'a, E>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<E> IntoIterator for DynamicArrayList<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;
    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.buf.into_vec();
        slots.truncate(self.len);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}
