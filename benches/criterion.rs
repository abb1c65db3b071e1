use criterion::criterion_main;

mod common;
mod tree;

criterion_main!(
    tree::clone::bench_clone_group,
    tree::erase::bench_erase_group,
    tree::find::bench_find_group,
    tree::insert::bench_insert_group,
    tree::iter::bench_iter_group,
);
