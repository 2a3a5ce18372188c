use serde::Serialize;

/// Registry code of the social-orientation trait. It is the only trait with
/// reverse-keyed items and it is excluded from strengths and growth areas.
pub const SOCIAL_ORIENTATION: &str = "IN";

/// Neutral score used when a trait has no usable items for a person.
pub const NEUTRAL_SCORE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trait {
    pub code: &'static str,
    pub name: &'static str,
    pub questions: Vec<&'static str>,
}

/// Strategy that produced a trait score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Calibrated,
    Mean,
    Neutral,
}

impl ScoreSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreSource::Calibrated => "calibrated",
            ScoreSource::Mean => "mean",
            ScoreSource::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitScore {
    pub code: &'static str,
    pub value: f64,
    pub source: ScoreSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 0.70 {
            ScoreBand::High
        } else if score >= 0.50 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Rounds to two decimals, halves away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
