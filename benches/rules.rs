use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use in_between::cards::Rank;
use in_between::deck::UsedRanks;
use in_between::rules::{calc_probability, get_decision};

fn half_deck() -> UsedRanks {
    let mut used = UsedRanks::new();
    for r in Rank::ALL {
        used.record(r).unwrap();
        used.record(r).unwrap();
    }
    used
}

fn bench_probability(c: &mut Criterion) {
    let fresh = UsedRanks::new();
    let half = half_deck();
    let mut g = c.benchmark_group("calc_probability");
    g.bench_with_input(BenchmarkId::new("fresh", "2-Q"), &fresh, |b, used| {
        b.iter(|| calc_probability(black_box(Rank::Two), black_box(Rank::Queen), used))
    });
    g.bench_with_input(BenchmarkId::new("half_seen", "A-K"), &half, |b, used| {
        b.iter(|| calc_probability(black_box(Rank::Ace), black_box(Rank::King), used))
    });
    g.finish();
}

fn bench_decision(c: &mut Criterion) {
    let half = half_deck();
    c.bench_function("get_decision", |b| {
        b.iter(|| get_decision(black_box(Rank::Three), black_box(Rank::Jack), &half, black_box(120)))
    });
}

criterion_group!(benches, bench_probability, bench_decision);
criterion_main!(benches);
