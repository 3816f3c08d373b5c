use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polyhash::{PolynomialHash, RollingHash, SimplePolynomialHash};

fn sample_text(len: usize) -> String {
    "lorem ipsum dolor sit amet, consectetur adipiscing elit "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn rehash_every_window<H: RollingHash>(hasher: &H, chars: &[char], window: usize) {
    for w in chars.windows(window) {
        let s: String = w.iter().collect();
        black_box(hasher.hash(&s));
    }
}

fn bench_modular(c: &mut Criterion) {
    let hasher = PolynomialHash::new(257, 1_000_000_007u64).unwrap();
    let text = sample_text(10_000);
    let chars: Vec<char> = text.chars().collect();
    let mut group = c.benchmark_group("modular");

    for window in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("rehash", window), &window, |b, &w| {
            b.iter(|| rehash_every_window(&hasher, &chars, w))
        });
        group.bench_with_input(BenchmarkId::new("rolling", window), &window, |b, &w| {
            b.iter(|| {
                for item in hasher.windows(&text, w).unwrap() {
                    black_box(item);
                }
            })
        });
    }
    group.finish();
}

fn bench_simple(c: &mut Criterion) {
    let hasher = SimplePolynomialHash::default();
    let text = sample_text(10_000);
    let chars: Vec<char> = text.chars().collect();
    let mut group = c.benchmark_group("simple");

    // short windows keep the values exact
    let window = 8;
    group.bench_function("rehash", |b| {
        b.iter(|| rehash_every_window(&hasher, &chars, window))
    });
    group.bench_function("rolling", |b| {
        b.iter(|| {
            for item in hasher.windows(&text, window).unwrap() {
                black_box(item);
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_modular, bench_simple);
criterion_main!(benches);
