// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{growth::GrowthPolicy, list::DynamicArrayList};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl<E> Extend<E> for DynamicArrayList<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, E: Clone + 'a> Extend<&'a E> for DynamicArrayList<E> {
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<E> FromIterator<E> for DynamicArrayList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<E> From<Vec<E>> for DynamicArrayList<E> {
    /// Takes the elements of `v`; the resulting capacity equals their count.
    fn from(v: Vec<E>) -> Self {
        let len = v.len();
        let buf: Box<[Option<E>]> = v.into_iter().map(Some).collect();
        Self {
            buf,
            len,
            growth: GrowthPolicy::default(),
        }
    }
}

impl<E, const M: usize> From<[E; M]> for DynamicArrayList<E> {
    fn from(arr: [E; M]) -> Self {
        Self::from(Vec::from(arr))
    }
}
