use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rps_plus::{GameRng, GameState, Move, MoveValidator, Referee, RoundEngine, RoundOutcome};

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_all_pairs", |b| {
        b.iter(|| {
            for user in Move::ALL {
                for bot in Move::ALL {
                    black_box(RoundEngine::resolve(black_box(user), black_box(bot)));
                }
            }
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_padded", |b| {
        b.iter(|| MoveValidator::validate(black_box(Some("  SCISSORS ")), black_box(false)))
    });
}

fn bench_game(c: &mut Criterion) {
    let engine = RoundEngine::default();
    c.bench_function("apply_full_game", |b| {
        b.iter(|| {
            let mut state = GameState::default();
            for _ in 0..3 {
                engine.apply_outcome(&mut state, RoundOutcome::User, Some(Move::Rock), Some(Move::Scissors), true);
            }
            black_box(state)
        })
    });

    let referee = Referee::new(RoundEngine::default());
    let mut rng = GameRng::new(42);
    c.bench_function("referee_full_game", |b| {
        b.iter(|| {
            let mut state = GameState::default();
            for raw in ["rock", "paper", "bomb"] {
                let _ = black_box(referee.play_round(&mut state, raw, &mut rng));
            }
            state
        })
    });
}

criterion_group!(benches, bench_resolve, bench_validate, bench_game);
criterion_main!(benches);
