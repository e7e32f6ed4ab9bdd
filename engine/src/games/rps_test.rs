use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn round(player: Move) -> Round {
    Round { player, ai: Move::Rock, outcome: Outcome::decide(player, Move::Rock) }
}

#[test]
fn counter_beats_the_countered_move() {
    for m in Move::ALL {
        assert!(m.counter().beats(m));
        assert!(!m.beats(m));
    }
}

#[test]
fn outcome_from_player_side() {
    assert_eq!(Outcome::decide(Move::Rock, Move::Scissors), Outcome::Win);
    assert_eq!(Outcome::decide(Move::Rock, Move::Paper), Outcome::Lose);
    assert_eq!(Outcome::decide(Move::Paper, Move::Paper), Outcome::Draw);
}

#[test]
fn predict_picks_most_frequent() {
    let recent = [round(Move::Scissors), round(Move::Rock), round(Move::Scissors)];
    assert_eq!(predict(&recent), Move::Scissors);
}

#[test]
fn predict_ties_go_to_later_move() {
    let recent = [round(Move::Rock), round(Move::Paper), round(Move::Scissors)];
    assert_eq!(predict(&recent), Move::Scissors);
    let recent = [round(Move::Rock), round(Move::Paper)];
    assert_eq!(predict(&recent), Move::Paper);
}

#[test]
fn ai_counters_habit_after_warmup() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = RpsMatch::new();
    for _ in 0..WARMUP_ROUNDS {
        game.play(Move::Rock, &mut rng);
    }
    for _ in 0..10 {
        assert_eq!(game.ai_move(&mut rng), Move::Paper);
        let r = game.play(Move::Rock, &mut rng);
        assert_eq!(r.outcome, Outcome::Lose);
    }
}

#[test]
fn ai_only_looks_at_last_three_rounds() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut game = RpsMatch::new();
    for m in [Move::Rock, Move::Rock, Move::Rock, Move::Paper, Move::Paper, Move::Paper] {
        game.play(m, &mut rng);
    }
    assert_eq!(game.ai_move(&mut rng), Move::Scissors);
}

#[test]
fn scores_and_rounds_track_history() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut game = RpsMatch::new();
    for m in [Move::Rock, Move::Paper, Move::Scissors, Move::Rock, Move::Rock] {
        game.play(m, &mut rng);
    }
    let wins = game.history().iter().filter(|r| r.outcome == Outcome::Win).count();
    let losses = game.history().iter().filter(|r| r.outcome == Outcome::Lose).count();
    assert_eq!(game.player_score() as usize, wins);
    assert_eq!(game.ai_score() as usize, losses);
    assert_eq!(game.round_number(), 6);
    assert!(game.last_round().is_some());
}

#[test]
fn reset_clears_match() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut game = RpsMatch::new();
    game.play(Move::Rock, &mut rng);
    game.reset();
    assert!(game.history().is_empty());
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.player_score() + game.ai_score(), 0);
}
