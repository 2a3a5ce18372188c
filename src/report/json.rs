use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::archetype::{ClassificationResult, CorrelationTable};
use crate::model::traits::ScoreSource;
use crate::pipeline::stage1_score::ScoringStats;
use crate::report::ProfileSummary;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub responses: String,
    pub calibration: Option<String>,
    pub catalog: String,
    pub n_persons: usize,
    pub n_questions: usize,
    pub calibrated_items: usize,
    pub calibrated_persons: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonSummary {
    pub person_id: String,
    pub trait_scores: BTreeMap<String, f64>,
    pub trait_sources: BTreeMap<String, ScoreSource>,
    pub classification: ClassificationResult,
    pub profile: ProfileSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub scoring: ScoringStats,
    pub archetype_counts: BTreeMap<String, usize>,
    pub persons: Vec<PersonSummary>,
}

#[derive(Debug, Clone, Serialize)]
struct CorrelationJson<'a> {
    traits: &'a [String],
    archetypes: BTreeMap<String, Vec<f64>>,
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

/// Person id to trait code to score.
pub fn render_score_map_json(
    scores: &BTreeMap<String, BTreeMap<String, f64>>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(scores)
}

pub fn render_correlations_json(table: &CorrelationTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CorrelationJson {
        traits: &table.traits,
        archetypes: table.as_map(),
    })
}
