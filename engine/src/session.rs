//! Quiz run state machine.
//!
//! DESIGN
//! ======
//! A session draws one question at a time through adaptive selection, so the
//! difficulty of question `n + 1` depends on accuracy over the first `n`.
//! Each question runs its own countdown; the UI forwards one [`tick`] per
//! second and the session records an expired question with whatever choice
//! was highlighted at the time (possibly none).
//!
//! Invariants:
//! - the selected choice is always within the current question's options;
//! - `correct()` never decreases during a run.
//!
//! [`tick`]: QuizSession::tick

use rand::Rng;

use crate::adaptive::{running_accuracy, select_adaptive};
use crate::countdown::Countdown;
use crate::question::{Category, IqQuestion};
use crate::result::{CategoryScore, TestResult};
use crate::scoring::{estimate_iq, percentage};

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Questions per run unless the caller asks otherwise.
pub const DEFAULT_QUIZ_LENGTH: usize = 10;

/// Errors from misusing a [`QuizSession`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("question bank has no unused questions")]
    BankExhausted,
    #[error("answer {index} is out of range for {options} options")]
    AnswerOutOfRange { index: usize, options: usize },
    #[error("no answer selected")]
    NothingSelected,
    #[error("quiz is already finished")]
    Finished,
}

/// Outcome of moving past a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Another question is now current.
    Next,
    /// The run is over; call [`QuizSession::summary`].
    Finished,
}

/// One answered (or timed-out) question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: &'static str,
    pub category: Category,
    pub choice: Option<usize>,
    pub correct: bool,
    pub elapsed_secs: u32,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    length: usize,
    current: Option<&'static IqQuestion>,
    selected: Option<usize>,
    countdown: Countdown,
    answers: Vec<AnswerRecord>,
    correct: usize,
}

impl QuizSession {
    /// Start a run of up to `length` questions.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::BankExhausted`] if no question can be drawn.
    pub fn start<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, SessionError> {
        let mut session = Self {
            length: length.max(1),
            current: None,
            selected: None,
            countdown: Countdown::new(0),
            answers: Vec::new(),
            correct: 0,
        };
        match session.draw_next(rng) {
            Advance::Next => Ok(session),
            Advance::Finished => Err(SessionError::BankExhausted),
        }
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static IqQuestion> {
        self.current
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Whether the current question is the final one of the run.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.answers.len() + 1 >= self.length
    }

    /// Progress through the run as a percentage, counting the current question.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        let shown = (self.answers.len() + 1).min(self.length);
        shown as f64 / self.length as f64 * 100.0
    }

    /// Highlight `choice` on the current question.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] after the run is over and
    /// [`SessionError::AnswerOutOfRange`] for an invalid option index.
    pub fn select(&mut self, choice: usize) -> Result<(), SessionError> {
        let question = self.current.ok_or(SessionError::Finished)?;
        if choice >= question.options.len() {
            return Err(SessionError::AnswerOutOfRange { index: choice, options: question.options.len() });
        }
        self.selected = Some(choice);
        Ok(())
    }

    /// Lock in the highlighted choice and move on.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] after the run is over and
    /// [`SessionError::NothingSelected`] when no choice is highlighted.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Advance, SessionError> {
        let question = self.current.ok_or(SessionError::Finished)?;
        let choice = self.selected.ok_or(SessionError::NothingSelected)?;
        self.record(question, Some(choice));
        Ok(self.draw_next(rng))
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some` when the tick expired the question and the session moved
    /// on, `None` otherwise (including when the run is already over).
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Advance> {
        let question = self.current?;
        if !self.countdown.tick() {
            return None;
        }
        self.record(question, self.selected);
        Some(self.draw_next(rng))
    }

    /// Summarize the answers recorded so far.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn summary(&self, completed_at_ms: i64) -> TestResult {
        let total = self.answers.len();
        let time_spent: u32 = self.answers.iter().map(|a| a.elapsed_secs).sum();
        let average = if total == 0 { 0.0 } else { f64::from(time_spent) / total as f64 };
        let categories: Vec<Category> = self.answers.iter().map(|a| a.category).collect();

        let breakdown = Category::ALL
            .iter()
            .filter_map(|&category| {
                let (correct, total) = self
                    .answers
                    .iter()
                    .filter(|a| a.category == category)
                    .fold((0_u32, 0_u32), |(c, t), a| (c + u32::from(a.correct), t + 1));
                (total > 0).then_some(CategoryScore { category, correct, total })
            })
            .collect();

        TestResult {
            score: self.correct as u32,
            total: total as u32,
            percentage: percentage(self.correct, total),
            iq_estimate: estimate_iq(self.correct, total, average, &categories),
            completed_at_ms,
            time_spent_secs: time_spent,
            categories,
            breakdown,
        }
    }

    fn record(&mut self, question: &'static IqQuestion, choice: Option<usize>) {
        let correct = choice.is_some_and(|c| question.is_correct(c));
        if correct {
            self.correct += 1;
        }
        self.answers.push(AnswerRecord {
            question_id: question.id,
            category: question.category,
            choice,
            correct,
            elapsed_secs: self.countdown.elapsed(),
        });
    }

    fn draw_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Advance {
        self.selected = None;
        self.current = None;
        if self.answers.len() >= self.length {
            return Advance::Finished;
        }

        let used: Vec<&str> = self.answers.iter().map(|a| a.question_id).collect();
        let accuracy = running_accuracy(self.correct, self.answers.len());
        let Some(next) = select_adaptive(accuracy, &used, 1, rng).into_iter().next() else {
            return Advance::Finished;
        };

        self.countdown.reset(next.difficulty.time_limit_secs());
        self.current = Some(next);
        Advance::Next
    }
}
