// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::DynamicArrayList};

impl<E> DynamicArrayList<E> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`. The vacated trailing
    /// slot is cleared; capacity is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<E, Error> {
        let len = self.len;
        let out = self.buf[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(Error::OutOfBounds { index, len })?;

        // Shift left: [index+1..len) -> [index..len-1), moving the cleared slot to `len-1`.
        self.buf[index..len].rotate_left(1);

        self.len = len - 1;
        Ok(out)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false`, leaving the list unchanged, if there is none.
    pub fn remove_item(&mut self, value: &E) -> bool
    where
        E: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }
}
