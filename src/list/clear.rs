// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::DynamicArrayList;

impl<E> DynamicArrayList<E> {
    /// Drops every element and sets `len = 0`. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        for slot in &mut self.buf[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }
}
