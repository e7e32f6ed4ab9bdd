//! Presentation-side interpretation of a [`TestResult`].
//!
//! Bands, population ranking, pace labels and the strengths copy shown on the
//! results page. Thresholds are fixed display constants.

use time::OffsetDateTime;
use time::macros::format_description;

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

/// Descriptive band for an IQ estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IqBand {
    Genius,
    VerySuperior,
    Superior,
    HighAverage,
    Average,
    LowAverage,
    BelowAverage,
}

impl IqBand {
    #[must_use]
    pub fn classify(score: u32) -> Self {
        match score {
            140.. => Self::Genius,
            130..=139 => Self::VerySuperior,
            120..=129 => Self::Superior,
            110..=119 => Self::HighAverage,
            90..=109 => Self::Average,
            80..=89 => Self::LowAverage,
            _ => Self::BelowAverage,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Genius => "Genius",
            Self::VerySuperior => "Very Superior",
            Self::Superior => "Superior",
            Self::HighAverage => "High Average",
            Self::Average => "Average",
            Self::LowAverage => "Low Average",
            Self::BelowAverage => "Below Average",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Genius => "Exceptional intellectual ability",
            Self::VerySuperior => "Outstanding cognitive performance",
            Self::Superior => "Above average intelligence",
            Self::HighAverage => "Good cognitive abilities",
            Self::Average => "Normal range of intelligence",
            Self::LowAverage => "Below average performance",
            Self::BelowAverage => "Consider retaking the test",
        }
    }

    /// CSS modifier used to tint the band badge.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Genius => "genius",
            Self::VerySuperior => "very-superior",
            Self::Superior => "superior",
            Self::HighAverage => "high-average",
            Self::Average => "average",
            Self::LowAverage => "low-average",
            Self::BelowAverage => "below-average",
        }
    }
}

/// Rough standing against the general population.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ranking {
    /// "Top N%" figure.
    pub top_percent: u32,
    /// Percentile shown in the badge.
    pub percentile: u32,
}

impl Ranking {
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        let (top_percent, percentile) = match score {
            130.. => (2, 98),
            115..=129 => (15, 85),
            100..=114 => (50, 50),
            _ => (85, 15),
        };
        Self { top_percent, percentile }
    }

    /// Percentile with its English ordinal suffix, e.g. `98th`.
    #[must_use]
    pub fn percentile_label(self) -> String {
        format!("{}th", self.percentile)
    }
}

/// Label for the average answer pace.
#[must_use]
pub fn pace_label(average_secs: f64) -> &'static str {
    if average_secs < 30.0 {
        "Quick thinker!"
    } else if average_secs < 60.0 {
        "Good pace"
    } else {
        "Thoughtful approach"
    }
}

/// Strength bullets for the insights card.
#[must_use]
pub fn strengths(score: u32) -> &'static [&'static str] {
    match score {
        120.. => &[
            "Exceptional pattern recognition",
            "Strong analytical reasoning",
            "Advanced problem-solving skills",
        ],
        100..=119 => &["Good logical thinking", "Solid reasoning abilities", "Effective cognitive processing"],
        _ => &[
            "Room for cognitive development",
            "Potential for improvement",
            "Practice can enhance abilities",
        ],
    }
}

pub const NEXT_STEPS: &[&str] = &[
    "Challenge yourself with strategic games",
    "Practice pattern recognition exercises",
    "Engage in logic puzzles regularly",
    "Consider cognitive training programs",
];

/// Format seconds as `Xm Ys`.
#[must_use]
pub fn format_duration(secs: u32) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Format an epoch-millisecond timestamp as a UTC date, or `None` if out of range.
#[must_use]
pub fn format_completed_at(ms: i64) -> Option<String> {
    let at = OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).ok()?;
    let fmt = format_description!("[month repr:long] [day padding:none], [year] at [hour]:[minute] UTC");
    at.format(&fmt).ok()
}
