//! Timed arithmetic round.
//!
//! Problems get larger as the score climbs. A wrong answer costs the streak
//! but not the score; the round ends when its countdown runs out.

use rand::Rng;

use crate::countdown::Countdown;

#[cfg(test)]
#[path = "speed_math_test.rs"]
mod speed_math_test;

pub const ROUND_SECS: u32 = 60;
/// Correct answers needed to move up one level.
pub const POINTS_PER_LEVEL: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeedMathError {
    #[error("round is over")]
    RoundOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "−",
            Self::Mul => "×",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Problem {
    lhs: u32,
    rhs: u32,
    op: Operator,
}

impl Problem {
    /// Build a problem. Subtraction operands are swapped when needed so the
    /// answer is never negative.
    #[must_use]
    pub fn new(lhs: u32, op: Operator, rhs: u32) -> Self {
        let (lhs, rhs) = if op == Operator::Sub && rhs > lhs { (rhs, lhs) } else { (lhs, rhs) };
        Self { lhs, rhs, op }
    }

    #[must_use]
    pub fn lhs(&self) -> u32 {
        self.lhs
    }

    #[must_use]
    pub fn rhs(&self) -> u32 {
        self.rhs
    }

    #[must_use]
    pub fn op(&self) -> Operator {
        self.op
    }

    /// Generate a problem for `level` (1-based).
    pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        let level = level.max(1);
        let op = if level == 1 {
            [Operator::Add, Operator::Sub][rng.random_range(0..2)]
        } else {
            [Operator::Add, Operator::Sub, Operator::Mul][rng.random_range(0..3)]
        };
        match op {
            Operator::Add | Operator::Sub => {
                let max = 10 * level;
                Self::new(rng.random_range(1..=max), op, rng.random_range(1..=max))
            }
            Operator::Mul => {
                let max = (3 + level).min(12);
                Self::new(rng.random_range(2..=max), op, rng.random_range(2..=max))
            }
        }
    }

    #[must_use]
    pub fn answer(&self) -> u32 {
        match self.op {
            Operator::Add => self.lhs + self.rhs,
            Operator::Sub => self.lhs - self.rhs,
            Operator::Mul => self.lhs * self.rhs,
        }
    }

    /// Display form, e.g. `7 × 8`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} {} {}", self.lhs, self.op.symbol(), self.rhs)
    }
}

/// Parse a typed answer, ignoring surrounding whitespace.
#[must_use]
pub fn parse_answer(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[derive(Clone, Debug)]
pub struct SpeedMath {
    problem: Problem,
    score: u32,
    streak: u32,
    best_streak: u32,
    attempts: u32,
    countdown: Countdown,
}

impl SpeedMath {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            problem: Problem::generate(1, rng),
            score: 0,
            streak: 0,
            best_streak: 0,
            attempts: 0,
            countdown: Countdown::new(ROUND_SECS),
        }
    }

    #[must_use]
    pub fn problem(&self) -> Problem {
        self.problem
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        1 + self.score / POINTS_PER_LEVEL
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.countdown.is_expired()
    }

    /// Check `answer` against the current problem and move to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`SpeedMathError::RoundOver`] once time has run out.
    pub fn submit<R: Rng + ?Sized>(&mut self, answer: u32, rng: &mut R) -> Result<bool, SpeedMathError> {
        if self.is_over() {
            return Err(SpeedMathError::RoundOver);
        }
        self.attempts += 1;
        let correct = answer == self.problem.answer();
        if correct {
            self.score += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
        self.problem = Problem::generate(self.level(), rng);
        Ok(correct)
    }

    /// One second elapsed. Returns `true` on the tick that ends the round.
    pub fn tick(&mut self) -> bool {
        self.countdown.tick()
    }
}
