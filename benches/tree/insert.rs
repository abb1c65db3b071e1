use criterion::{criterion_group, BatchSize, Criterion, Throughput};
use sparse_trie::{tests_common, TrieSet};

use crate::common::shuffled_words;

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    let words = shuffled_words();
    let mut sorted = words.clone();
    sorted.sort();

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("words/random", |b| {
        b.iter_batched(
            || words.clone(),
            |words| words.into_iter().collect::<TrieSet<_>>(),
            BatchSize::LargeInput,
        )
    });
    group.bench_function("words/sorted", |b| {
        b.iter_batched(
            || sorted.clone(),
            |words| words.into_iter().collect::<TrieSet<_>>(),
            BatchSize::LargeInput,
        )
    });

    let skewed: Vec<_> = tests_common::generate_keys_skewed(u8::MAX as usize).collect();
    group.throughput(Throughput::Elements(skewed.len() as u64));
    group.bench_function("skewed", |b| {
        b.iter_batched(
            || skewed.clone(),
            |keys| keys.into_iter().collect::<TrieSet<_>>(),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(bench_insert_group, bench);
