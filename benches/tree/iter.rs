use criterion::{criterion_group, Criterion};

use crate::common::{skewed_tree, words_tree};

fn bench(c: &mut Criterion) {
    let tree = words_tree();

    let mut group = c.benchmark_group("iter/tree");

    group.bench_function("words/forward", |b| {
        b.iter(|| {
            tree.iter().for_each(|k| {
                std::hint::black_box(k);
            });
        });
    });

    group.bench_function("words/rev", |b| {
        b.iter(|| {
            tree.iter().rev().for_each(|k| {
                std::hint::black_box(k);
            });
        });
    });

    group.bench_function("words/cursor", |b| {
        b.iter(|| {
            let mut cursor = tree.begin();
            while !cursor.is_end() {
                std::hint::black_box(cursor.key());
                cursor.move_next();
            }
        });
    });

    let skewed = skewed_tree();
    group.bench_function("skewed/forward", |b| {
        b.iter(|| {
            skewed.iter().for_each(|k| {
                std::hint::black_box(k);
            });
        });
    });
}

criterion_group!(bench_iter_group, bench);
