//! End-to-end round tests.
//!
//! These drive the validator and engine the way a caller would: validate,
//! draw, resolve, apply.

mod common;

use rps_plus::{
    GameRng, GameState, Move, MoveError, MoveValidator, RoundEngine, RoundOutcome, RulesConfig,
};

/// Play one round the way a service would, returning the outcome used.
fn play(engine: &RoundEngine, state: &mut GameState, raw: Option<&str>, rng: &mut GameRng) -> RoundOutcome {
    match MoveValidator::validate(raw, state.user_bomb_used) {
        Ok(user_move) => {
            let bot_move = engine.generate_bot_move(state.bot_bomb_used, rng);
            let outcome = RoundEngine::resolve(user_move, bot_move);
            engine.apply_outcome(state, outcome, Some(user_move), Some(bot_move), true);
            outcome
        }
        Err(_) => {
            engine.apply_outcome(state, RoundOutcome::Draw, None, None, false);
            RoundOutcome::Draw
        }
    }
}

#[test]
fn test_scenario_user_wins_first_round() {
    common::init_logging();
    let engine = RoundEngine::default();
    let mut state = GameState::default();

    engine.apply_outcome(
        &mut state,
        RoundOutcome::User,
        Some(Move::Rock),
        Some(Move::Scissors),
        true,
    );

    assert_eq!(state.round, 2);
    assert_eq!(state.user_score, 1);
    assert_eq!(state.bot_score, 0);
    assert!(!state.game_over);
}

#[test]
fn test_scenario_last_round_ends_game() {
    common::init_logging();
    let engine = RoundEngine::default();

    for (user, bot) in [(Move::Paper, Move::Rock), (Move::Rock, Move::Paper), (Move::Rock, Move::Rock)] {
        let mut state = GameState::default();
        state.round = 3;

        let outcome = RoundEngine::resolve(user, bot);
        engine.apply_outcome(&mut state, outcome, Some(user), Some(bot), true);

        assert_eq!(state.round, 3);
        assert!(state.game_over);
    }
}

#[test]
fn test_scenario_invalid_first_move() {
    common::init_logging();
    let engine = RoundEngine::default();
    let mut state = GameState::default();

    let err = MoveValidator::validate(Some("spock"), state.user_bomb_used).unwrap_err();
    assert_eq!(err, MoveError::InvalidMove);

    engine.apply_outcome(&mut state, RoundOutcome::Draw, None, None, false);

    assert_eq!(state.round, 2);
    assert_eq!(state.user_score, 0);
    assert_eq!(state.bot_score, 0);
    assert!(!state.game_over);
}

#[test]
fn test_full_game_finishes_after_three_rounds() {
    common::init_logging();
    let engine = RoundEngine::default();
    let mut state = GameState::default();
    let mut rng = GameRng::new(2024);

    let mut decided = 0;
    for raw in ["rock", "paper", "scissors"] {
        assert!(!state.game_over);
        if play(&engine, &mut state, Some(raw), &mut rng) != RoundOutcome::Draw {
            decided += 1;
        }
    }

    assert!(state.game_over);
    assert_eq!(state.round, 3);
    assert_eq!(state.user_score + state.bot_score, decided);
    assert!(state.winner().is_some());
}

#[test]
fn test_user_bomb_is_single_use() {
    common::init_logging();
    let engine = RoundEngine::default();
    let mut state = GameState::default();
    let mut rng = GameRng::new(11);

    let first = play(&engine, &mut state, Some("BOMB"), &mut rng);
    assert!(state.user_bomb_used);
    assert_ne!(first, RoundOutcome::Bot);

    assert_eq!(
        MoveValidator::validate(Some("bomb"), state.user_bomb_used),
        Err(MoveError::BombAlreadyUsed)
    );

    let scores_before = (state.user_score, state.bot_score);
    play(&engine, &mut state, Some("bomb"), &mut rng);
    assert_eq!((state.user_score, state.bot_score), scores_before);
    assert_eq!(state.round, 3);
}

#[test]
fn test_all_invalid_game_still_ends() {
    common::init_logging();
    let engine = RoundEngine::default();
    let mut state = GameState::default();
    let mut rng = GameRng::new(0);

    play(&engine, &mut state, None, &mut rng);
    play(&engine, &mut state, Some(""), &mut rng);
    play(&engine, &mut state, Some("lizard"), &mut rng);

    assert!(state.game_over);
    assert_eq!(state.round, 3);
    assert_eq!(state.winner(), Some(RoundOutcome::Draw));
}

#[test]
fn test_seeded_games_replay_identically() {
    common::init_logging();
    let engine = RoundEngine::default();

    let run = |seed| {
        let mut state = GameState::default();
        let mut rng = GameRng::new(seed);
        let outcomes: Vec<_> = ["rock", "bomb", "paper"]
            .iter()
            .map(|raw| play(&engine, &mut state, Some(raw), &mut rng))
            .collect();
        (outcomes, state)
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn test_longer_game() {
    common::init_logging();
    let engine = RoundEngine::new(RulesConfig::new().with_max_rounds(5).unwrap());
    let mut state = GameState::new(engine.config().max_rounds);
    let mut rng = GameRng::new(5);

    for expected_round in 1..=5 {
        assert_eq!(state.round, expected_round);
        play(&engine, &mut state, Some("rock"), &mut rng);
    }

    assert!(state.game_over);
    assert_eq!(state.round, 5);
}
