use criterion::{criterion_group, BatchSize, Criterion};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::common::{shuffled_words, words_tree, SEED};

fn bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let tree = words_tree();
    let keys: Vec<_> = shuffled_words()
        .choose_multiple(&mut rng, 5_000)
        .cloned()
        .collect();

    let mut group = c.benchmark_group("erase");
    group.bench_function("present", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for key in &keys {
                    std::hint::black_box(tree.erase(key));
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("front", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for _ in 0..keys.len() {
                    std::hint::black_box(tree.pop_first());
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("rear", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for _ in 0..keys.len() {
                    std::hint::black_box(tree.pop_last());
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(bench_erase_group, bench);
