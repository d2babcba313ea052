use prefix_tree::PrefixTree;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{distr::Alphanumeric, rng, Rng};

fn random_words(population: usize, size: usize) -> Vec<String> {
    (0..population)
        .map(|_| {
            rng()
                .sample_iter(&Alphanumeric)
                .take(rng().random_range(1..=size))
                .map(char::from)
                .collect()
        })
        .collect()
}

fn make_tree(words: &[String]) -> PrefixTree {
    PrefixTree::from_strings(words)
}

fn tree_insert(c: &mut Criterion) {
    let words = random_words(10000, 16);
    c.bench_function("tree insert", |b| b.iter(|| make_tree(&words)));
}

fn tree_contains(c: &mut Criterion) {
    let words = random_words(10000, 16);
    let tree = make_tree(&words);
    c.bench_function("tree contains", |b| {
        b.iter(|| words.iter().filter(|w| tree.contains(w)).count())
    });
    c.bench_function("tree contains (random)", |b| {
        b.iter_batched(
            || random_words(1, 16).remove(0),
            |w| tree.contains(&w),
            BatchSize::SmallInput,
        )
    });
}

fn complete(c: &mut Criterion) {
    static POPULATION_SIZE: usize = 10000;

    let mut group = c.benchmark_group("complete");
    for size in [1usize, 2, 3, 4].iter() {
        let words = random_words(POPULATION_SIZE, 16);
        let tree = make_tree(&words);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("eager complete", size),
            size,
            |b, &size| {
                b.iter_batched(
                    || random_words(1, size).remove(0),
                    |prefix| tree.complete(&prefix),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("lazy completions", size),
            size,
            |b, &size| {
                b.iter_batched(
                    || random_words(1, size).remove(0),
                    |prefix| tree.completions(&prefix).count(),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn iterate(c: &mut Criterion) {
    static POPULATION_SIZE: usize = 1000;

    let mut group = c.benchmark_group("iterate");
    for size in [16usize, 64, 256].iter() {
        let tree = make_tree(&random_words(POPULATION_SIZE, *size));
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_with_input(BenchmarkId::new("strings", size), size, |b, _| {
            b.iter(|| tree.strings())
        });
        group.bench_with_input(BenchmarkId::new("iter", size), size, |b, _| {
            b.iter(|| tree.iter().for_each(|_x| ()))
        });
    }
    group.finish();
}

criterion_group!(benches, tree_insert, tree_contains, complete, iterate);
criterion_main!(benches);
