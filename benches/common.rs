use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use sparse_trie::{tests_common, TrieSet};

pub const SEED: u64 = 69420;

const ALPHABET: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const MAX_WORD_LEN: usize = 6;

/// Every word over a small alphabet, in a fixed random order.
pub fn shuffled_words() -> Vec<String> {
    let mut words: Vec<_> = tests_common::generate_words(&ALPHABET, MAX_WORD_LEN).collect();
    words.shuffle(&mut StdRng::seed_from_u64(SEED));
    words
}

pub fn words_tree() -> TrieSet<String> {
    tests_common::generate_words(&ALPHABET, MAX_WORD_LEN).collect()
}

pub fn skewed_tree() -> TrieSet<Vec<u8>> {
    tests_common::generate_keys_skewed(u8::MAX as usize).collect()
}

pub fn fixed_length_tree() -> TrieSet<Vec<u8>> {
    tests_common::generate_keys_fixed_length(4, 16).collect()
}
