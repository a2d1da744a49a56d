use ballast::{SearchOrder, WeightedTree};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn filled_tree(n: u32) -> WeightedTree<u32> {
    let mut tree = WeightedTree::new();
    for i in 0..n {
        tree.add(i);
    }
    tree
}

fn insertion(c: &mut Criterion) {
    c.bench_function("add 1000", |b| {
        b.iter(|| filled_tree(black_box(1000)))
    });
}

fn searching(c: &mut Criterion) {
    let tree = filled_tree(1000);
    c.bench_function("search in-order", |b| {
        b.iter(|| tree.search(&black_box(999), SearchOrder::InOrder))
    });
    c.bench_function("search pre-order", |b| {
        b.iter(|| tree.search(&black_box(999), SearchOrder::PreOrder))
    });
    c.bench_function("search post-order", |b| {
        b.iter(|| tree.search(&black_box(999), SearchOrder::PostOrder))
    });
}

fn removal(c: &mut Criterion) {
    c.bench_function("remove 100 of 1000", |b| {
        b.iter_batched(
            || filled_tree(1000),
            |mut tree| {
                for i in 0..100 {
                    tree.remove(&black_box(i), SearchOrder::InOrder);
                }
                tree
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, insertion, searching, removal);
criterion_main!(benches);
