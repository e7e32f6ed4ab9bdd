//! IQ test page state: intro, running session, completed result.
//!
//! DESIGN
//! ======
//! Wraps an `engine::session::QuizSession` with the page phase and the
//! finished `TestResult`. Misuse reported by the engine (submitting with
//! nothing selected, clicking after the run ended) is logged and ignored so
//! a double click never panics the UI. Methods that can finish the run return
//! the new result exactly once so the page can persist it.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use engine::question::{IqQuestion, find_question};
use engine::result::TestResult;
use engine::session::{Advance, DEFAULT_QUIZ_LENGTH, QuizSession};
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Intro,
    Running,
    Completed,
}

/// One row of the post-test answer review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItem {
    pub question: &'static IqQuestion,
    pub chosen: Option<usize>,
    pub correct: bool,
}

impl ReviewItem {
    /// Text of the option the player picked, if any.
    pub fn chosen_text(&self) -> Option<&'static str> {
        self.chosen.and_then(|i| self.question.options.get(i).copied())
    }

    pub fn answer_text(&self) -> &'static str {
        self.question.options.get(self.question.correct).copied().unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct QuizState {
    pub phase: QuizPhase,
    pub session: Option<QuizSession>,
    pub result: Option<TestResult>,
    pub error: Option<String>,
}

impl QuizState {
    /// Begin a fresh run of [`DEFAULT_QUIZ_LENGTH`] questions.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.start_with_length(DEFAULT_QUIZ_LENGTH, rng);
    }

    pub fn start_with_length<R: Rng + ?Sized>(&mut self, length: usize, rng: &mut R) {
        match QuizSession::start(length, rng) {
            Ok(session) => {
                *self = Self { phase: QuizPhase::Running, session: Some(session), result: None, error: None };
            }
            Err(e) => {
                log::error!("could not start quiz: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Highlight an answer for the current question.
    pub fn select(&mut self, choice: usize) {
        let Some(session) = self.running_mut() else {
            return;
        };
        if let Err(e) = session.select(choice) {
            log::warn!("answer rejected: {e}");
        }
    }

    /// Submit the highlighted answer. Returns the result if this finished the run.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R, now_ms: i64) -> Option<TestResult> {
        let session = self.running_mut()?;
        match session.submit(rng) {
            Ok(Advance::Next) => None,
            Ok(Advance::Finished) => self.finish(now_ms),
            Err(e) => {
                log::warn!("submit rejected: {e}");
                None
            }
        }
    }

    /// One second of countdown. Returns the result if expiry finished the run.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, now_ms: i64) -> Option<TestResult> {
        let session = self.running_mut()?;
        match session.tick(rng)? {
            Advance::Next => None,
            Advance::Finished => self.finish(now_ms),
        }
    }

    /// Back to the intro screen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Answers of the current or finished run, joined with their questions.
    pub fn review(&self) -> Vec<ReviewItem> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        session
            .answers()
            .iter()
            .filter_map(|a| {
                Some(ReviewItem { question: find_question(a.question_id)?, chosen: a.choice, correct: a.correct })
            })
            .collect()
    }

    fn running_mut(&mut self) -> Option<&mut QuizSession> {
        if self.phase != QuizPhase::Running {
            return None;
        }
        self.session.as_mut()
    }

    fn finish(&mut self, now_ms: i64) -> Option<TestResult> {
        let result = self.session.as_ref()?.summary(now_ms);
        log::info!("quiz finished: {}/{} iq={}", result.score, result.total, result.iq_estimate);
        self.phase = QuizPhase::Completed;
        self.result = Some(result.clone());
        Some(result)
    }
}
