// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reallocation strategies for the backing storage.

/// How a full [`DynamicArrayList`](crate::DynamicArrayList) picks its next capacity.
///
/// Neither policy ever shrinks the backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrowthPolicy {
    /// Reallocate to exactly `capacity + 1` slots.
    ///
    /// Appends past capacity cost `O(len)` each, which keeps the storage
    /// tight at the expense of speed.
    #[default]
    ByOne,
    /// Reallocate to `2 * capacity` slots (at least one).
    ///
    /// Amortized `O(1)` appends.
    Doubling,
}

impl GrowthPolicy {
    /// Returns the capacity a full list of capacity `current` grows to.
    #[inline]
    pub const fn next_capacity(self, current: usize) -> usize {
        match self {
            Self::ByOne => current.saturating_add(1),
            Self::Doubling => {
                if current == 0 {
                    1
                } else {
                    current.saturating_mul(2)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowthPolicy;

    #[test]
    fn test_by_one_is_default() {
        assert_eq!(GrowthPolicy::default(), GrowthPolicy::ByOne);
    }

    #[test]
    fn test_next_capacity() {
        assert_eq!(GrowthPolicy::ByOne.next_capacity(0), 1);
        assert_eq!(GrowthPolicy::ByOne.next_capacity(10), 11);
        assert_eq!(GrowthPolicy::Doubling.next_capacity(0), 1);
        assert_eq!(GrowthPolicy::Doubling.next_capacity(1), 2);
        assert_eq!(GrowthPolicy::Doubling.next_capacity(10), 20);
    }

    #[test]
    fn test_next_capacity_saturates() {
        assert_eq!(GrowthPolicy::ByOne.next_capacity(usize::MAX), usize::MAX);
        assert_eq!(GrowthPolicy::Doubling.next_capacity(usize::MAX), usize::MAX);
    }
}
