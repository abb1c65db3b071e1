use criterion::{criterion_group, Criterion};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

use crate::common::{shuffled_words, words_tree, SEED};

fn bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let tree = words_tree();

    let present: Vec<_> = shuffled_words()
        .choose_multiple(&mut rng, 5_000)
        .cloned()
        .collect();
    // mostly absent, and sometimes ending inside a stored word
    let random: Vec<String> = (0..5_000)
        .map(|_| {
            let len = rng.random_range(1..=8);
            (0..len)
                .map(|_| char::from(rng.random_range(b'a'..=b'j')))
                .collect()
        })
        .collect();

    let mut group = c.benchmark_group("find");
    group.bench_function("present", |b| {
        b.iter(|| {
            for key in &present {
                std::hint::black_box(tree.find(key));
            }
        });
    });
    group.bench_function("random", |b| {
        b.iter(|| {
            for key in &random {
                std::hint::black_box(tree.find(key));
            }
        });
    });
    group.bench_function("contains/random", |b| {
        b.iter(|| {
            for key in &random {
                std::hint::black_box(tree.contains(key));
            }
        });
    });
    group.bench_function("lower_bound/random", |b| {
        b.iter(|| {
            for key in &random {
                std::hint::black_box(tree.lower_bound(key));
            }
        });
    });
}

criterion_group!(bench_find_group, bench);
