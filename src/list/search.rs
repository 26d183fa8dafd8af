// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::DynamicArrayList;

impl<E: PartialEq> DynamicArrayList<E> {
    /// Returns the index of the first element equal to `value`, or `None`.
    ///
    /// Linear search over `[0, len)` using value equality.
    #[inline]
    pub fn index_of(&self, value: &E) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` if the list contains `value`.
    #[inline]
    pub fn contains(&self, value: &E) -> bool {
        self.index_of(value).is_some()
    }
}
