mod common;

#[test]
#[cfg(not(miri))]
fn test_memory_usage() {
    use common::{get_profiler, test_heap};
    use sparse_trie::{tests_common, TrieSet};

    const ALPHABET: [char; 4] = ['a', 'c', 'g', 't'];
    const MAX_WORD_LEN: usize = 5;

    let words: Vec<_> = tests_common::generate_words(&ALPHABET, MAX_WORD_LEN).collect();

    let prof = get_profiler(file!());

    let baseline = test_heap(&prof, |stats| stats.curr_blocks);

    {
        let mut set: TrieSet<String> = words.iter().cloned().collect();
        assert_eq!(set.len(), words.len());

        // every other word goes, which collapses terminal nodes back to leaf
        // edges all over the trie
        for word in words.iter().step_by(2) {
            assert_eq!(set.erase(word), 1);
        }
        assert_eq!(set.len(), words.len() - words.len().div_ceil(2));

        let copy = set.clone();
        set.clear();
        assert!(set.is_empty());

        assert_eq!(copy.into_iter().count(), words.len() - words.len().div_ceil(2));
    }

    test_heap(&prof, |stats| {
        dhat::assert_eq!(stats.curr_blocks, baseline);

        let mean_blocks_per_key = (stats.max_blocks as f64) / (words.len() as f64);
        let mean_bytes_per_key = (stats.max_bytes as f64) / (words.len() as f64);

        eprintln!(
            "Inserting {} words, this comes to [{} mean blocks per key] and [{} mean bytes per \
             key].",
            words.len(),
            mean_blocks_per_key,
            mean_bytes_per_key
        )
    });
}
