//! Benchmark for full matches
//!
//! Plays seeded matches to completion with random legal choices, measuring
//! the turn manager, movement and capture together.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use yut_engine::core::{GameRng, MatchConfig};
use yut_engine::throw::{StickThrower, ThrowGenerator};
use yut_engine::turn::{PieceChoice, TurnManager, TurnStep};

fn play_match(config: MatchConfig) -> usize {
    let seed = config.seed;
    let mut manager = TurnManager::new(config).expect("valid config");
    let mut thrower = StickThrower::new(seed);
    let mut rng = GameRng::new(seed.wrapping_add(1));
    let mut throws = 0;

    while !manager.is_over() {
        throws += 1;
        let step = manager.throw(thrower.throw()).expect("throw accepted");
        if let TurnStep::ChoiceRequired { team, can_activate_new } = step {
            let movable = manager.movable_pieces(team);
            let pick = rng.gen_range_usize(0..movable.len() + usize::from(can_activate_new));
            let choice = movable
                .get(pick)
                .map_or(PieceChoice::NewPiece, |piece| PieceChoice::Existing(*piece));
            manager.choose(choice).expect("legal choice");
        }
        manager.drain_events();
    }
    throws
}

fn bench_full_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_match");

    for team_count in [2, 3, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(team_count),
            &team_count,
            |b, &team_count| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed += 1;
                    let config = MatchConfig::new()
                        .with_team_count(team_count)
                        .with_seed(seed);
                    black_box(play_match(config))
                });
            },
        );
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut manager = TurnManager::new(MatchConfig::default()).expect("valid config");
    let mut thrower = StickThrower::new(7);
    for _ in 0..6 {
        if let Ok(TurnStep::ChoiceRequired { .. }) = manager.throw(thrower.throw()) {
            let _ = manager.choose(PieceChoice::NewPiece);
        }
    }

    c.bench_function("snapshot_encode", |b| {
        b.iter(|| {
            let bytes = manager.snapshot().to_bytes().expect("encode");
            black_box(bytes.len())
        });
    });
}

criterion_group!(benches, bench_full_match, bench_snapshot);
criterion_main!(benches);
