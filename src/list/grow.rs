// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::{DynamicArrayList, new::empty_slots};

impl<E> DynamicArrayList<E> {
    /// Ensures room for at least `additional` more elements without reallocating.
    ///
    /// Reallocates to exactly `len + additional` slots when the current
    /// capacity is smaller; otherwise a no-op.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.len.saturating_add(additional);
        if needed > self.capacity() {
            self.reallocate(needed);
        }
    }

    /// Makes room for one more element, following the growth policy.
    #[inline]
    pub(crate) fn grow_for_one(&mut self) {
        if self.len == self.capacity() {
            let new_cap = self.growth.next_capacity(self.capacity());
            self.reallocate(new_cap);
        }
    }

    /// Moves the elements into a fresh buffer of `new_cap` slots.
    ///
    /// Requires `new_cap >= len`.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        log::trace!(
            "growing backing storage from {} to {} slots ({} elements)",
            self.capacity(),
            new_cap,
            self.len
        );

        let len = self.len;
        let mut buf = empty_slots(new_cap);
        for (dst, src) in buf.iter_mut().zip(self.buf[..len].iter_mut()) {
            *dst = src.take();
        }
        self.buf = buf;
    }
}
