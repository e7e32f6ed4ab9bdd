use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

fn answer_current(state: &mut QuizState, right: bool) {
    let question = state.session.as_ref().and_then(QuizSession::current).unwrap();
    let choice = if right { question.correct } else { (question.correct + 1) % question.options.len() };
    state.select(choice);
}

#[test]
fn starts_in_intro() {
    let state = QuizState::default();
    assert_eq!(state.phase, QuizPhase::Intro);
    assert!(state.session.is_none());
    assert!(state.review().is_empty());
}

#[test]
fn start_enters_running_with_a_question() {
    let mut rng = rng();
    let mut state = QuizState::default();
    state.start(&mut rng);
    assert_eq!(state.phase, QuizPhase::Running);
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.length(), DEFAULT_QUIZ_LENGTH);
    assert!(session.current().is_some());
}

#[test]
fn submit_without_selection_is_ignored() {
    let mut rng = rng();
    let mut state = QuizState::default();
    state.start(&mut rng);
    assert_eq!(state.submit(&mut rng, 0), None);
    assert_eq!(state.session.as_ref().unwrap().position(), 0);
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut rng = rng();
    let mut state = QuizState::default();
    state.start(&mut rng);
    state.select(99);
    assert_eq!(state.session.as_ref().unwrap().selected(), None);
}

#[test]
fn finishing_returns_result_once_and_completes() {
    let mut rng = rng();
    let mut state = QuizState::default();
    state.start_with_length(3, &mut rng);

    answer_current(&mut state, true);
    assert_eq!(state.submit(&mut rng, 1), None);
    answer_current(&mut state, false);
    assert_eq!(state.submit(&mut rng, 2), None);
    answer_current(&mut state, true);
    let result = state.submit(&mut rng, 1_700_000_000_000).unwrap();

    assert_eq!(state.phase, QuizPhase::Completed);
    assert_eq!(result.score, 2);
    assert_eq!(result.total, 3);
    assert_eq!(result.completed_at_ms, 1_700_000_000_000);
    assert_eq!(state.result.as_ref(), Some(&result));

    // Further input after completion does nothing.
    state.select(0);
    assert_eq!(state.submit(&mut rng, 3), None);
    assert_eq!(state.tick(&mut rng, 3), None);
}

#[test]
fn review_lists_answers_with_texts() {
    let mut rng = rng();
    let mut state = QuizState::default();
    state.start_with_length(2, &mut rng);
    answer_current(&mut state, true);
    state.submit(&mut rng, 0);
    answer_current(&mut state, false);
    state.submit(&mut rng, 0);

    let review = state.review();
    assert_eq!(review.len(), 2);
    assert!(review[0].correct);
    assert_eq!(review[0].chosen_text(), Some(review[0].answer_text()));
    assert!(!review[1].correct);
    assert_ne!(review[1].chosen_text(), Some(review[1].answer_text()));
}

#[test]
fn countdown_expiry_can_finish_the_run() {
    let mut rng = rng();
    let mut state = QuizState::default();
    state.start_with_length(1, &mut rng);
    let limit = state.session.as_ref().unwrap().countdown().total();

    let mut finished = None;
    for _ in 0..limit {
        finished = state.tick(&mut rng, 42);
    }
    let result = finished.unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.total, 1);
    assert_eq!(state.phase, QuizPhase::Completed);
}

#[test]
fn reset_returns_to_intro() {
    let mut rng = rng();
    let mut state = QuizState::default();
    state.start(&mut rng);
    state.reset();
    assert_eq!(state.phase, QuizPhase::Intro);
    assert!(state.session.is_none());
    assert!(state.result.is_none());
}
