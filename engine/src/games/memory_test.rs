use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn repeat_all(game: &mut MemoryGame, rng: &mut StdRng) -> PressOutcome {
    game.finish_playback();
    let seq = game.sequence().to_vec();
    let mut last = PressOutcome::Correct;
    for pad in seq {
        last = game.press(pad, rng).expect("press");
    }
    last
}

#[test]
fn starts_with_one_step_in_playback() {
    let mut rng = StdRng::seed_from_u64(1);
    let game = MemoryGame::new(&mut rng);
    assert_eq!(game.sequence().len(), 1);
    assert_eq!(game.phase(), MemoryPhase::Showing);
    assert_eq!(game.rounds_completed(), 0);
}

#[test]
fn input_is_locked_during_playback() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut game = MemoryGame::new(&mut rng);
    assert_eq!(game.press(0, &mut rng), Err(MemoryError::StillShowing));
}

#[test]
fn full_repetition_appends_exactly_one_step() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut game = MemoryGame::new(&mut rng);
    for round in 1..=8 {
        let before = game.sequence().to_vec();
        assert_eq!(repeat_all(&mut game, &mut rng), PressOutcome::RoundComplete);
        let after = game.sequence();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], before.as_slice());
        assert!(after[before.len()] < PAD_COUNT);
        assert_eq!(game.phase(), MemoryPhase::Showing);
        assert_eq!(game.rounds_completed(), round);
    }
}

#[test]
fn any_wrong_press_ends_the_run() {
    for wrong_at in 0..5 {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = MemoryGame::new(&mut rng);
        for _ in 0..4 {
            repeat_all(&mut game, &mut rng);
        }
        game.finish_playback();
        let seq = game.sequence().to_vec();
        assert_eq!(seq.len(), 5);
        for &pad in &seq[..wrong_at] {
            assert_eq!(game.press(pad, &mut rng), Ok(PressOutcome::Correct));
        }
        let expected = seq[wrong_at];
        let wrong = (expected + 1) % PAD_COUNT;
        assert_eq!(game.press(wrong, &mut rng), Ok(PressOutcome::Mistake { expected }));
        assert_eq!(game.phase(), MemoryPhase::Over);
        assert_eq!(game.press(expected, &mut rng), Err(MemoryError::RunOver));
        assert_eq!(game.rounds_completed(), 4);
    }
}

#[test]
fn unknown_pad_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut game = MemoryGame::new(&mut rng);
    game.finish_playback();
    assert_eq!(game.press(PAD_COUNT, &mut rng), Err(MemoryError::NoSuchPad(PAD_COUNT)));
    assert_eq!(game.phase(), MemoryPhase::Input);
}

#[test]
fn finish_playback_is_idempotent_during_input() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut game = MemoryGame::new(&mut rng);
    for _ in 0..2 {
        repeat_all(&mut game, &mut rng);
    }
    game.finish_playback();
    let first = game.sequence()[0];
    game.press(first, &mut rng).expect("press");
    game.finish_playback();
    assert_eq!(game.cursor(), 1);
}
