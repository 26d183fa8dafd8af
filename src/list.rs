// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArrayList` type and its inherent API.
//!
//! `DynamicArrayList<E>` is a growable, index-addressable list. It stores its
//! elements in an owned boxed slice of slots and tracks a logical length.
//! Methods generally mirror `Vec`/slice semantics, except that bounds failures
//! are reported as [`Error::OutOfBounds`] instead of panicking.

mod clear;
mod equals;
mod extend;
mod grow;
mod insert;
mod new;
mod push;
mod remove;
mod search;

// Crate imports
use crate::{
    error::Error,
    growth::GrowthPolicy,
    iter::{Iter, IterMut},
};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A growable, array-backed list.
///
/// `DynamicArrayList<E>` owns a backing buffer of `capacity` slots and tracks a
/// logical length `len ∈ 0..=capacity`:
///
/// - slots `[0, len)` hold the elements in sequence order;
/// - slots `[len, capacity)` are cleared;
/// - when an insertion finds the buffer full, the buffer is reallocated first,
///   according to the list's [`GrowthPolicy`];
/// - removals never shrink the buffer.
///
/// # Absent elements
///
/// Elements that may be absent are modelled with `E = Option<T>`. Equality and
/// search then treat `None` as a regular value: `None == None`, and
/// `None != Some(_)`.
///
/// ```rust
/// use dyn_array_list::DynamicArrayList;
///
/// let mut v: DynamicArrayList<Option<&str>> = DynamicArrayList::new();
/// v.add(Some("a"));
/// v.add(None);
/// assert_eq!(v.index_of(&None), Some(1));
/// ```
///
/// # Errors and panics
///
/// Index-taking methods ([`get`](Self::get), [`insert`](Self::insert),
/// [`remove`](Self::remove), ...) return [`Error::OutOfBounds`] and leave the
/// list unchanged. Only `list[i]` indexing panics, exactly like slices.
///
/// # Examples
///
/// ```rust
/// use dyn_array_list::DynamicArrayList;
///
/// let mut v = DynamicArrayList::new();
/// v.add(1);
/// v.add(2);
/// v.add(3);
/// v.insert(1, 9).unwrap();
/// assert_eq!(v.to_vec(), [1, 9, 2, 3]);
///
/// v.remove(0).unwrap();
/// assert_eq!(v.index_of(&2), Some(1));
/// assert!(!v.remove_item(&99));
/// assert!(v.get(10).is_err());
/// ```
///
/// # Threading
///
/// There is no internal synchronization. Mutation from several threads needs
/// an external lock.
#[derive(Clone)]
pub struct DynamicArrayList<E> {
    pub(crate) buf: Box<[Option<E>]>,
    pub(crate) len: usize,
    pub(crate) growth: GrowthPolicy,
}

impl<E> DynamicArrayList<E> {
    /// Capacity used by [`new`](Self::new) and [`Default`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of appends that will not reallocate.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns the policy used when the backing storage is full.
    #[inline]
    pub const fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// Returns the element at `index`.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&E, Error> {
        let len = self.len;
        self.buf[..len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::OutOfBounds { index, len })
    }

    /// Returns the element at `index` mutably.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut E, Error> {
        let len = self.len;
        self.buf[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::OutOfBounds { index, len })
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: E) -> Result<E, Error> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.get(0).ok()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&E> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    // iterators
    /// Iterates over the elements in index order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            inner: self.buf[..self.len].iter(),
        }
    }

    /// Iterates mutably over the elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, E> {
        let len = self.len;
        IterMut {
            inner: self.buf[..len].iter_mut(),
        }
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<E: fmt::Debug> fmt::Debug for DynamicArrayList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E: PartialEq> PartialEq for DynamicArrayList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<E: Eq> Eq for DynamicArrayList<E> {}

impl<E: Hash> Hash for DynamicArrayList<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}
