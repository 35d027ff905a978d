use criterion::{black_box, criterion_group, criterion_main, Criterion};

use algokit::sorting::{heap_sort::heap_sort, merge_sort::merge_sort, quick_sort::quick_sort};

fn scrambled(n: usize) -> Vec<u64> {
    let mut x = 0x9e37_79b9_7f4a_7c15u64;
    (0..n)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x
        })
        .collect()
}

fn bench_sorts(c: &mut Criterion) {
    let input = scrambled(10_000);

    c.bench_function("merge_sort 10k", |b| {
        b.iter(|| merge_sort(black_box(&input)))
    });
    c.bench_function("quick_sort 10k", |b| {
        b.iter(|| {
            let mut v = input.clone();
            quick_sort(black_box(&mut v));
            v
        })
    });
    c.bench_function("heap_sort 10k", |b| {
        b.iter(|| {
            let mut v = input.clone();
            heap_sort(black_box(&mut v));
            v
        })
    });
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
