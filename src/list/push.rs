// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::DynamicArrayList;

impl<E> DynamicArrayList<E> {
    /// Appends `value` to the end of the list.
    ///
    /// Reallocates first, following the growth policy, if the list is full.
    /// Always returns `true`.
    #[inline]
    pub fn add(&mut self, value: E) -> bool {
        self.grow_for_one();
        self.buf[self.len] = Some(value);
        self.len += 1;
        true
    }

    /// Removes and returns the last element, if any. Capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<E> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            self.buf[self.len].take()
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::DynamicArrayList;

    #[test]
    fn test_add_then_read_back() {
        let mut v: DynamicArrayList<i32> = DynamicArrayList::with_capacity(1);
        for i in 0..25 {
            assert!(v.add(i));
            assert_eq!(v.get(v.len() - 1), Ok(&i));
        }
        assert_eq!(v.len(), 25);
        for i in 0..25 {
            assert_eq!(v.get(i as usize), Ok(&i));
        }
    }

    #[test]
    fn test_pop() {
        let mut v: DynamicArrayList<i32> = DynamicArrayList::new();
        v.add(10);
        v.add(20);
        assert_eq!(v.pop(), Some(20));
        assert_eq!(v.pop(), Some(10));
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), 10);
    }
}
