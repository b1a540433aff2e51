//! Criterion benchmarks for Rabin–Karp over a three-letter alphabet, where
//! the small default modulus produces frequent collisions.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use drills::gen::{random_abc_string, ReplayToken};
use drills::strings::rabin_karp::{search, search_with, HashCfg};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("rabin_karp");
    for &n in &[1_000usize, 100_000] {
        let text = random_abc_string(n, ReplayToken { seed: 9, index: 0 });
        let pattern = text[n / 2..n / 2 + 6].to_string();
        group.bench_with_input(BenchmarkId::new("default_cfg", n), &n, |b, _| {
            b.iter(|| search(&pattern, &text).count())
        });
        let wide = HashCfg {
            base: 257,
            modulus: 1_000_000_007,
        };
        group.bench_with_input(BenchmarkId::new("wide_modulus", n), &n, |b, _| {
            b.iter(|| search_with(&pattern, &text, wide).count())
        });
        group.bench_with_input(BenchmarkId::new("std_match_indices", n), &n, |b, _| {
            b.iter(|| text.match_indices(pattern.as_str()).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
