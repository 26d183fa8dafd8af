// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dyn-array-list`
//!
//! A `no_std` + `alloc`, growable, array-backed list **with no `unsafe`**.
//!
//! The core type, [`DynamicArrayList<E>`], owns a boxed buffer of `capacity`
//! slots and tracks a logical length `len ∈ 0..=capacity`. It offers the
//! classic list operations (append, positional insert, get, remove by index
//! or by value, search, clear) plus a [`Cursor`] that can remove the element
//! it just visited.
//!
//! ## High-level semantics
//!
//! - Only indices `< len` are visible. Slots past `len` are cleared (`None`).
//! - Appending to a full list reallocates first. The default
//!   [`GrowthPolicy::ByOne`] grows to exactly `capacity + 1`;
//!   [`GrowthPolicy::Doubling`] trades memory for amortized `O(1)` appends.
//! - Removals and [`clear`](DynamicArrayList::clear) never shrink capacity.
//! - Every index-taking method returns [`Error::OutOfBounds`] instead of
//!   panicking, and leaves the list unchanged on error. Only `list[i]` panics,
//!   like a slice.
//! - Searching misses are not errors: [`index_of`](DynamicArrayList::index_of)
//!   returns `None` and [`remove_item`](DynamicArrayList::remove_item) returns
//!   `false`.
//! - Equality is structural: same length, elements pairwise `==`. Capacity and
//!   growth policy do not take part. Use `E = Option<T>` for elements that may
//!   be absent.
//!
//! Reallocations are reported through the [`log`] facade at `trace` level.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `DynamicArrayList<E>` as a plain
//!     sequence.
//!
//! ## Example
//!
//! ```rust
//! use dyn_array_list::{DynamicArrayList, Error};
//!
//! let mut v = DynamicArrayList::new();
//! v.add(1);
//! v.add(2);
//! v.add(3);
//! v.insert(1, 9)?;
//! assert_eq!(v.to_vec(), [1, 9, 2, 3]);
//!
//! assert_eq!(v.remove(0)?, 1);
//! assert_eq!(v.index_of(&2), Some(1));
//! assert_eq!(v.get(10), Err(Error::OutOfBounds { index: 10, len: 3 }));
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod cursor;
mod error;
mod growth;
mod index;
mod iter;
mod list;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use cursor::Cursor;
pub use error::Error;
pub use growth::GrowthPolicy;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::DynamicArrayList;
