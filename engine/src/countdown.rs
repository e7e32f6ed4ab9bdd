//! One-second countdown shared by the quiz and speed-math rounds.
//!
//! The UI owns the actual interval; this type only counts ticks so the
//! expiry rules stay testable without a browser.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

/// Seconds remaining on a timer driven by external one-second ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self { total: secs, remaining: secs }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Seconds consumed so far.
    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.total - self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the remaining time is in the warning zone (10 s or less).
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.remaining <= 10
    }

    /// Consume one second. Returns `true` exactly on the tick that expires it.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Restart with a new length.
    pub fn reset(&mut self, secs: u32) {
        *self = Self::new(secs);
    }
}

/// Format seconds as `m:ss`.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
