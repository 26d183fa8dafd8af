// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynamicArrayList`](crate::DynamicArrayList).
//!
//! `Index<usize>` and `IndexMut<usize>` mirror slice behavior and panic on
//! out-of-bounds. Use [`get`](crate::DynamicArrayList::get) for a fallible lookup.

// Crate imports
use crate::list::DynamicArrayList;

// Core imports
use core::ops::{Index, IndexMut};

impl<E> Index<usize> for DynamicArrayList<E> {
    type Output = E;
    fn index(&self, i: usize) -> &Self::Output {
        match self.get(i) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<E> IndexMut<usize> for DynamicArrayList<E> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match self.get_mut(i) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}
