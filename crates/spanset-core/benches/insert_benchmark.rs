// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use spanset_core::interval::ClosedInterval;
use spanset_core::set::IntervalSet;
use std::hint::black_box;

type IntegerType = i64;

/// Disjoint intervals in ascending order, separated by a gap of one.
fn disjoint_ascending(count: usize) -> Vec<ClosedInterval<IntegerType>> {
    (0..count as IntegerType)
        .map(|i| {
            let lower = i * 3;
            ClosedInterval::new(lower, lower + 1)
        })
        .collect()
}

/// Random short intervals scattered over a domain proportional to `count`,
/// producing a mix of merges and standalone insertions.
fn random_scattered(count: usize, seed: u64) -> Vec<ClosedInterval<IntegerType>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let span = (count as IntegerType) * 4;
    (0..count)
        .map(|_| {
            let lower = rng.random_range(0..span);
            let upper = lower + rng.random_range(0..8);
            ClosedInterval::new(lower, upper)
        })
        .collect()
}

fn insert_all(intervals: &[ClosedInterval<IntegerType>]) -> IntervalSet<IntegerType> {
    let mut set = IntervalSet::with_capacity(intervals.len());
    for &interval in intervals {
        set.insert(black_box(interval));
    }
    set
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_set_insert");

    for &count in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));

        let ascending = disjoint_ascending(count);
        group.bench_with_input(
            BenchmarkId::new("disjoint_ascending", count),
            &ascending,
            |b, intervals| b.iter(|| insert_all(intervals)),
        );

        let mut descending = disjoint_ascending(count);
        descending.reverse();
        group.bench_with_input(
            BenchmarkId::new("disjoint_descending", count),
            &descending,
            |b, intervals| b.iter(|| insert_all(intervals)),
        );

        let scattered = random_scattered(count, 42);
        group.bench_with_input(
            BenchmarkId::new("random_scattered", count),
            &scattered,
            |b, intervals| b.iter(|| insert_all(intervals)),
        );
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_set_contains");

    for &count in &[100usize, 1_000, 10_000] {
        let set = insert_all(&disjoint_ascending(count));
        let domain = (count as IntegerType) * 3;
        let mut rng = StdRng::seed_from_u64(7);
        let queries: Vec<IntegerType> = (0..1_000).map(|_| rng.random_range(0..domain)).collect();

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("random_queries", count),
            &queries,
            |b, queries| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for &value in queries {
                        if set.contains(black_box(value)) {
                            hits += 1;
                        }
                    }
                    hits
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains);
criterion_main!(benches);
