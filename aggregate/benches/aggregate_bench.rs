use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tally_aggregate::{cumulative_series, location_breakdown, overall_tally};
use tally_ledger::Vote;
use tally_types::{Timestamp, VoteId};

const LOCATIONS: &[&str] = &[
    "Delhi", "Lima", "Tokyo", "London", "Karimnagar", "Lagos", "Berlin", "Sydney",
];

fn make_votes(n: usize) -> Vec<Vote> {
    (0..n)
        .map(|i| Vote {
            id: VoteId::new(i as u64),
            voter: None,
            is_real: i % 3 != 0,
            location: LOCATIONS[i % LOCATIONS.len()].to_string(),
            timestamp: Timestamp::new(i as u64 * 3600),
        })
        .collect()
}

fn bench_overall_tally(c: &mut Criterion) {
    let mut group = c.benchmark_group("overall_tally");
    for size in [10, 1_000, 100_000] {
        let votes = make_votes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(overall_tally(black_box(&votes))));
        });
    }
    group.finish();
}

fn bench_location_breakdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("location_breakdown");
    for size in [10, 1_000, 100_000] {
        let votes = make_votes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(location_breakdown(black_box(&votes))));
        });
    }
    group.finish();
}

fn bench_cumulative_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("cumulative_series");
    for size in [10, 1_000, 100_000] {
        let votes = make_votes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(cumulative_series(black_box(&votes))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_overall_tally,
    bench_location_breakdown,
    bench_cumulative_series
);
criterion_main!(benches);
