// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArrayList`](crate::DynamicArrayList).
//!
//! - **Serialize**: as a sequence of the `len` elements, in index order.
//! - **Deserialize**: from any sequence. The list starts with the default
//!   growth policy and a capacity taken from the sequence's size hint, capped
//!   so that a hostile hint cannot force a huge allocation.
//!
//! Capacity and growth policy are not part of the serialized form.

// Crate imports
use crate::list::DynamicArrayList;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Upper bound on the capacity preallocated from a size hint.
const MAX_PREALLOCATED: usize = 4096;

impl<E: Serialize> Serialize for DynamicArrayList<E> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ListVisitor<E>(PhantomData<E>);

impl<'de, E: Deserialize<'de>> de::Visitor<'de> for ListVisitor<E> {
    type Value = DynamicArrayList<E>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let capacity = a.size_hint().map_or(DynamicArrayList::<E>::DEFAULT_CAPACITY, |n| {
            n.min(MAX_PREALLOCATED)
        });
        let mut out = DynamicArrayList::with_capacity(capacity);
        while let Some(elem) = a.next_element::<E>()? {
            out.add(elem);
        }
        Ok(out)
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for DynamicArrayList<E> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor(PhantomData))
    }
}
