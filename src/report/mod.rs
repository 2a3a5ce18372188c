pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::traits::{SOCIAL_ORIENTATION, ScoreBand};
use crate::pipeline::stage1_score::PersonScores;
use crate::registry::TraitQuestionMap;

const HIGHLIGHT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitHighlight {
    pub code: String,
    pub name: String,
    pub score: f64,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub overall_score: f64,
    pub strengths: Vec<TraitHighlight>,
    pub growth_opportunities: Vec<TraitHighlight>,
}

impl ProfileSummary {
    /// Strengths are the three highest scores and growth opportunities the
    /// three lowest scores not already listed as strengths. Social orientation is
    /// excluded from both.
    pub fn build(person: &PersonScores, registry: &TraitQuestionMap) -> Self {
        let overall_score = if person.scores.is_empty() {
            0.0
        } else {
            person.scores.iter().map(|s| s.value).sum::<f64>() / person.scores.len() as f64
        };

        let mut ranked: Vec<(&'static str, f64)> = person
            .scores
            .iter()
            .filter(|s| s.code != SOCIAL_ORIENTATION)
            .map(|s| (s.code, s.value))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });

        let top: Vec<(&'static str, f64)> = ranked.iter().take(HIGHLIGHT_COUNT).copied().collect();

        let mut ascending = ranked.clone();
        ascending.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        let bottom: Vec<(&'static str, f64)> = ascending
            .iter()
            .filter(|(code, _)| !top.iter().any(|(t, _)| t == code))
            .take(HIGHLIGHT_COUNT)
            .copied()
            .collect();

        let highlight = |(code, score): (&'static str, f64)| TraitHighlight {
            code: code.to_string(),
            name: registry.name_for_code(code).unwrap_or(code).to_string(),
            score,
            band: ScoreBand::of(score),
        };

        Self {
            overall_score,
            strengths: top.into_iter().map(highlight).collect(),
            growth_opportunities: bottom.into_iter().map(highlight).collect(),
        }
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_percent(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
