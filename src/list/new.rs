// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{growth::GrowthPolicy, list::DynamicArrayList};

// Alloc imports
use alloc::boxed::Box;

/// Allocates `n` cleared slots.
pub(crate) fn empty_slots<E>(n: usize) -> Box<[Option<E>]> {
    core::iter::repeat_with(|| None).take(n).collect()
}

impl<E> DynamicArrayList<E> {
    /// Constructs an empty list with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty list with exactly `capacity` slots.
    ///
    /// A capacity of `0` is allowed; the first append then reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, GrowthPolicy::default())
    }

    /// Constructs an empty list with the default capacity and the given growth policy.
    #[inline]
    pub fn with_growth_policy(growth: GrowthPolicy) -> Self {
        Self::with_capacity_and_policy(Self::DEFAULT_CAPACITY, growth)
    }

    /// Constructs an empty list with exactly `capacity` slots and the given growth policy.
    pub fn with_capacity_and_policy(capacity: usize, growth: GrowthPolicy) -> Self {
        Self {
            buf: empty_slots(capacity),
            len: 0,
            growth,
        }
    }
}

impl<E> Default for DynamicArrayList<E> {
    fn default() -> Self {
        Self::new()
    }
}
