//! Benchmarks for tree building and session play.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use limit_holdem::players::{CallingStation, UniformRandom};
use limit_holdem::tree::{TreeBuilder, TreeConfig};
use limit_holdem::{Session, TableConfig};

fn bench_tree_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_builder");

    for (rounds, nps) in [(2, 2), (3, 3), (4, 3)] {
        let config = TreeConfig::new(rounds, nps);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("r{rounds}_nps{nps}")),
            &config,
            |b, &config| {
                b.iter(|| {
                    let built = TreeBuilder::new(black_box(config)).unwrap().build();
                    black_box(built.payoffs)
                });
            },
        );
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("session_100_hands", |b| {
        b.iter(|| {
            let config = TableConfig::default().with_seed(black_box(7));
            let mut session =
                Session::new(config, Box::new(UniformRandom), Box::new(CallingStation));
            black_box(session.play_hands(100).unwrap())
        });
    });
}

criterion_group!(benches, bench_tree_builder, bench_session);
criterion_main!(benches);
