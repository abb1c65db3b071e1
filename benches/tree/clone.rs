use criterion::{criterion_group, Criterion};

use crate::common::{fixed_length_tree, skewed_tree, words_tree};

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    let skewed_tree = skewed_tree();
    let fixed_length_tree = fixed_length_tree();
    let words_tree = words_tree();

    group.bench_function("skewed", |b| b.iter(|| skewed_tree.clone()));
    group.bench_function("fixed_length", |b| b.iter(|| fixed_length_tree.clone()));
    group.bench_function("words", |b| b.iter(|| words_tree.clone()));
}

criterion_group!(bench_clone_group, bench);
