// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::DynamicArrayList};

impl<E> DynamicArrayList<E> {
    /// Inserts `value` at `index`, shifting elements to the right.
    ///
    /// `index == len` appends. Returns [`Error::OutOfBounds`] if `index > len`,
    /// leaving the list unchanged. Reallocates first if the list is full.
    pub fn insert(&mut self, index: usize, value: E) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        self.grow_for_one();
        let len = self.len;

        // Shift right: [index..len) -> [index+1..len+1), bringing the cleared slot to `index`.
        self.buf[index..=len].rotate_right(1);
        self.buf[index] = Some(value);

        self.len = len + 1;
        Ok(())
    }
}
