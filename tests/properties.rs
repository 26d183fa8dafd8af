// This file is part of dyn-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests: `DynamicArrayList` against a `Vec` model.

use dyn_array_list::{DynamicArrayList, Error, GrowthPolicy};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Insert(usize, u8),
    Remove(usize),
    RemoveItem(u8),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Add),
        2 => (0..12usize, any::<u8>()).prop_map(|(i, x)| Op::Insert(i, x)),
        2 => (0..12usize).prop_map(Op::Remove),
        2 => (0..8u8).prop_map(Op::RemoveItem),
        1 => Just(Op::Clear),
    ]
}

fn policy_strategy() -> impl Strategy<Value = GrowthPolicy> {
    prop_oneof![Just(GrowthPolicy::ByOne), Just(GrowthPolicy::Doubling)]
}

fn apply(list: &mut DynamicArrayList<u8>, model: &mut Vec<u8>, op: &Op) {
    match *op {
        Op::Add(x) => {
            assert!(list.add(x));
            model.push(x);
        }
        Op::Insert(i, x) => {
            let res = list.insert(i, x);
            if i <= model.len() {
                assert_eq!(res, Ok(()));
                model.insert(i, x);
            } else {
                assert_eq!(
                    res,
                    Err(Error::OutOfBounds {
                        index: i,
                        len: model.len()
                    })
                );
            }
        }
        Op::Remove(i) => {
            let res = list.remove(i);
            if i < model.len() {
                assert_eq!(res, Ok(model.remove(i)));
            } else {
                assert!(res.is_err());
            }
        }
        Op::RemoveItem(x) => {
            let expected = model.iter().position(|&y| y == x);
            assert_eq!(list.remove_item(&x), expected.is_some());
            if let Some(i) = expected {
                model.remove(i);
            }
        }
        Op::Clear => {
            list.clear();
            model.clear();
        }
    }
}

proptest! {
    #[test]
    fn matches_vec_model(
        capacity in 0..6usize,
        policy in policy_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let mut list = DynamicArrayList::with_capacity_and_policy(capacity, policy);
        let mut model = Vec::new();
        for op in &ops {
            let cap_before = list.capacity();
            apply(&mut list, &mut model, op);
            prop_assert!(list.len() <= list.capacity());
            if matches!(op, Op::Remove(_) | Op::RemoveItem(_) | Op::Clear) {
                prop_assert_eq!(list.capacity(), cap_before);
            }
        }
        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(list.is_empty(), model.is_empty());
        prop_assert_eq!(list.to_vec(), model);
    }

    #[test]
    fn appends_read_back_in_order(items in proptest::collection::vec(any::<i64>(), 0..40)) {
        let mut list = DynamicArrayList::with_capacity(0);
        for &x in &items {
            list.add(x);
            prop_assert_eq!(list.get(list.len() - 1), Ok(&x));
        }
        prop_assert_eq!(list.len(), items.len());
        for (i, x) in items.iter().enumerate() {
            prop_assert_eq!(list.get(i), Ok(x));
        }
        prop_assert!(list.get(items.len()).is_err());
    }

    #[test]
    fn insert_shifts_suffix(
        items in proptest::collection::vec(any::<u16>(), 0..20),
        seed in any::<usize>(),
        value in any::<u16>(),
    ) {
        let index = seed % (items.len() + 1);
        let mut list = DynamicArrayList::from(items.clone());
        list.insert(index, value).unwrap();
        prop_assert_eq!(list.get(index), Ok(&value));
        for (i, x) in items[index..].iter().enumerate() {
            prop_assert_eq!(list.get(index + 1 + i), Ok(x));
        }
        prop_assert_eq!(list.len(), items.len() + 1);
    }

    #[test]
    fn remove_pulls_next_element_forward(
        items in proptest::collection::vec(any::<u16>(), 1..20),
        seed in any::<usize>(),
    ) {
        let index = seed % items.len();
        let mut list = DynamicArrayList::from(items.clone());
        prop_assert_eq!(list.remove(index), Ok(items[index]));
        prop_assert_eq!(list.len(), items.len() - 1);
        if index + 1 < items.len() {
            prop_assert_eq!(list.get(index), Ok(&items[index + 1]));
        }
    }

    #[test]
    fn equality_is_structural(
        a in proptest::collection::vec(0..4u8, 0..8),
        b in proptest::collection::vec(0..4u8, 0..8),
        extra in 0..8usize,
    ) {
        let la = DynamicArrayList::from(a.clone());
        let mut lb = DynamicArrayList::with_capacity(extra);
        lb.extend(b.iter().copied());
        prop_assert_eq!(la == lb, a == b);
        prop_assert_eq!(lb == la, a == b);
        prop_assert_eq!(la.equals(&lb), a == b);
        prop_assert!(la == la.clone());
    }

    #[test]
    fn cursor_visits_size_elements(items in proptest::collection::vec(any::<u8>(), 0..20)) {
        let mut list = DynamicArrayList::from(items.clone());
        let mut cursor = list.cursor();
        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(*cursor.next().unwrap());
        }
        prop_assert_eq!(cursor.next(), Err(Error::EndOfSequence));
        prop_assert_eq!(seen, items);
    }

    #[test]
    fn cursor_removal_matches_retain(items in proptest::collection::vec(0..10u8, 0..20)) {
        let mut list = DynamicArrayList::from(items.clone());
        let mut cursor = list.cursor();
        while cursor.has_next() {
            if *cursor.next().unwrap() % 3 == 0 {
                cursor.remove().unwrap();
                prop_assert_eq!(cursor.remove(), Err(Error::IllegalState));
            }
        }
        let mut expected = items;
        expected.retain(|x| x % 3 != 0);
        prop_assert_eq!(list.to_vec(), expected);
    }
}
