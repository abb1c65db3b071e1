//! Key generators and helpers shared by the unit tests, integration tests and
//! benchmarks.

use std::iter;

use crate::TrieSet;

/// Build a set of `String`s from the given keys, asserting that each key is
/// new.
pub fn insert_all<'a>(keys: impl IntoIterator<Item = &'a str>) -> TrieSet<String> {
    let mut set = TrieSet::new();
    for key in keys {
        let (_, inserted) = set.insert(String::from(key));
        assert!(inserted, "duplicate key [{key:?}] in test input");
    }
    set
}

/// Generate keys where each key is one longer than the previous, and differs
/// from the previous key only in the last two symbols.
///
/// This produces a trie with one long spine and a leaf edge off every node of
/// it, which is the deepest trie possible for a given number of keys.
pub fn generate_keys_skewed(max_len: usize) -> impl Iterator<Item = Vec<u8>> {
    iter::successors(Some(vec![u8::MAX; 1]), move |prev| {
        if prev.len() < max_len {
            let mut key = vec![u8::MIN; prev.len()];
            key.push(u8::MAX);
            Some(key)
        } else {
            None
        }
    })
}

/// Generate every key of length `len` whose symbols are drawn from
/// `value_stops` evenly spaced values, in ascending order.
///
/// This produces a dense, perfectly balanced trie with `value_stops ^ len`
/// keys, all of them leaf edges.
pub fn generate_keys_fixed_length(len: usize, value_stops: u8) -> impl Iterator<Item = Vec<u8>> {
    let step = u8::MAX / value_stops.max(1);
    let last = step * (value_stops.max(1) - 1);

    iter::successors(Some(vec![u8::MIN; len]), move |prev| {
        // Increment the key as a number in base `value_stops`, carrying from
        // the last symbol.
        let mut next = prev.clone();
        for digit in next.iter_mut().rev() {
            if *digit < last {
                *digit += step;
                return Some(next);
            }
            *digit = u8::MIN;
        }
        None
    })
}

/// Generate every word over `alphabet` with a length from 1 to `max_len`,
/// shortest words first.
///
/// Every word is a prefix of the words one symbol longer, so the generated
/// trie mixes terminal nodes and leaf edges at every level.
pub fn generate_words(alphabet: &[char], max_len: usize) -> impl Iterator<Item = String> + '_ {
    (1..=max_len).flat_map(move |len| {
        let total = alphabet.len().pow(len as u32);
        (0..total).map(move |mut index| {
            let mut word = vec![alphabet[0]; len];
            for slot in word.iter_mut().rev() {
                *slot = alphabet[index % alphabet.len()];
                index /= alphabet.len();
            }
            word.into_iter().collect()
        })
    })
}
