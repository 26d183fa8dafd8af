// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::DynamicArrayList;

// Core imports
use core::any::Any;

impl<E: PartialEq + 'static> DynamicArrayList<E> {
    /// Compares against a value of unknown type.
    ///
    /// Returns `true` only if `other` is a `DynamicArrayList<E>` of the same
    /// length whose elements are pairwise equal. Capacity and growth policy are
    /// not compared. For statically typed comparisons use `==`.
    pub fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}
