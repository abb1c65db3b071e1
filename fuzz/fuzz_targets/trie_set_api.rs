#![no_main]

use libfuzzer_sys::arbitrary::{self, Arbitrary};
use sparse_trie::{visitor::WellFormedChecker, TrieSet};
use std::{
    collections::{hash_map::RandomState, BTreeSet},
    hash::BuildHasher,
    mem,
    ops::Bound,
};

#[derive(Arbitrary, Debug)]
enum Action {
    Clear,
    Contains(Vec<u8>),
    Find(Vec<u8>),
    GetMinimum,
    PopMinimum,
    GetMaximum,
    PopMaximum,
    CheckLen,
    CheckIter,
    Erase(Vec<u8>),
    EraseAt(u8),
    EraseRange { start: Vec<u8>, end: Vec<u8> },
    Insert(Vec<u8>),
    LowerBound(Vec<u8>),
    UpperBound(Vec<u8>),
    Retain(u8),
    Clone,
    Hash,
    IntoIter { take_front: usize, take_back: usize },
}

libfuzzer_sys::fuzz_target!(|actions: Vec<Action>| {
    let mut set = TrieSet::<Vec<u8>>::new();
    let mut oracle = BTreeSet::<Vec<u8>>::new();

    for action in actions {
        match action {
            Action::Clear => {
                set.clear();
                oracle.clear();
            },
            Action::Contains(key) => {
                assert_eq!(set.contains(&key), oracle.contains(&key));
                assert_eq!(set.count(&key), usize::from(oracle.contains(&key)));
            },
            Action::Find(key) => {
                let cursor = set.find(&key);
                assert_eq!(cursor.key(), oracle.get(&key));
            },
            Action::GetMinimum => {
                assert_eq!(set.first().as_ref(), oracle.first());
            },
            Action::PopMinimum => {
                assert_eq!(set.pop_first(), oracle.pop_first());
            },
            Action::GetMaximum => {
                assert_eq!(set.last().as_ref(), oracle.last());
            },
            Action::PopMaximum => {
                assert_eq!(set.pop_last(), oracle.pop_last());
            },
            Action::CheckLen => {
                assert_eq!(set.len(), oracle.len());
                assert_eq!(set.is_empty(), oracle.is_empty());
            },
            Action::CheckIter => {
                assert!(set.iter().rev().eq(oracle.iter().rev().cloned()));

                let mut cursor = set.end();
                for expected in oracle.iter().rev() {
                    cursor.move_prev();
                    assert_eq!(cursor.key(), Some(expected));
                }
                cursor.move_prev();
                assert_eq!(cursor, set.end());
            },
            Action::Erase(key) => {
                assert_eq!(set.erase(&key), usize::from(oracle.remove(&key)));
            },
            Action::EraseAt(index) => {
                let Some(target) = oracle.iter().nth(usize::from(index)).cloned() else {
                    continue;
                };
                let expected_next = oracle
                    .range((Bound::Excluded(&target), Bound::Unbounded))
                    .next()
                    .cloned();
                oracle.remove(&target);

                let position = set.find(&target).position();
                let next = set.erase_at(position);
                assert_eq!(next.key(), expected_next.as_ref());
            },
            Action::EraseRange { start, end } => {
                if start > end {
                    continue;
                }
                let first = set.lower_bound(&start).position();
                let last = set.lower_bound(&end).position();
                let next = set.erase_range(first, last);

                oracle.retain(|key| *key < start || *key >= end);
                assert_eq!(next.key(), oracle.range(end..).next());
            },
            Action::Insert(key) => {
                let (cursor, inserted) = set.insert(key.clone());
                assert_eq!(cursor.key(), Some(&key));
                assert_eq!(inserted, oracle.insert(key));
            },
            Action::LowerBound(key) => {
                assert_eq!(set.lower_bound(&key).key(), oracle.range(&key..).next());
            },
            Action::UpperBound(key) => {
                assert_eq!(
                    set.upper_bound(&key).key(),
                    oracle
                        .range((Bound::Excluded(&key), Bound::Unbounded))
                        .next()
                );
            },
            Action::Retain(modulus) => {
                let modulus = usize::from(modulus.max(1));
                set.retain(|key| key.len() % modulus == 0);
                oracle.retain(|key| key.len() % modulus == 0);
            },
            Action::Clone => {
                let set_copy = set.clone();
                assert!(set_copy.iter().eq(set.iter()));
                set = set_copy;
            },
            Action::Hash => {
                let hash_builder = RandomState::new();
                let set_copy = set.clone();

                let original_hash = hash_builder.hash_one(&set);
                let copy_hash = hash_builder.hash_one(&set_copy);

                assert_eq!(original_hash, copy_hash, "{:?} != {:?}", set, set_copy);
            },
            Action::IntoIter {
                take_front,
                take_back,
            } => {
                let set = mem::take(&mut set);
                let _oracle = mem::take(&mut oracle);

                let original_size = set.len();
                let mut it = set.into_iter();
                let front_count = it.by_ref().take(take_front).count();
                let back_count = it.rev().take(take_back).count();

                assert_eq!(
                    front_count + back_count,
                    original_size.min(take_front.saturating_add(take_back))
                );
            },
        }

        assert!(set.iter().eq(oracle.iter().cloned()));
        let num_keys = WellFormedChecker::check(&set).expect("set should be well-formed");
        assert_eq!(num_keys, oracle.len());
    }
});
