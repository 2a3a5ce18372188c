use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::input::{RawResponse, ResponseRow, ResponseTable};
use crate::model::calibration::Calibration;
use crate::model::logit::{logit_to_unit, response_logit, weighted_mean};
use crate::model::traits::{NEUTRAL_SCORE, SOCIAL_ORIENTATION, ScoreSource, Trait, TraitScore, clip01};
use crate::registry::TraitQuestionMap;

/// Phrases marking introversion items of the social-orientation trait.
/// These items are reverse-keyed.
const INTROVERSION_PHRASES: &[&str] = &["drain my energy", "observant", "active listener", "reflect"];

/// Phrases marking high-agency extroversion items; weighted 1.5.
const HIGH_AGENCY_PHRASES: &[&str] = &["pitch ideas", "jump into conversations"];

const HIGH_AGENCY_WEIGHT: f64 = 1.5;

/// Below this spread across all scores the run is flagged as low-variation.
const MIN_SCORE_STD_DEV: f64 = 0.01;

/// Strategies tried, in order, for every (person, trait) until one yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Calibrated,
    ArithmeticMean,
    Neutral,
}

pub const STRATEGY_ORDER: [Strategy; 3] = [
    Strategy::Calibrated,
    Strategy::ArithmeticMean,
    Strategy::Neutral,
];

impl Strategy {
    pub fn source(self) -> ScoreSource {
        match self {
            Strategy::Calibrated => ScoreSource::Calibrated,
            Strategy::ArithmeticMean => ScoreSource::Mean,
            Strategy::Neutral => ScoreSource::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKeying {
    Reverse,
    HighAgency,
    Standard,
}

impl SocialKeying {
    pub fn of(question: &str) -> Self {
        let q = question.to_lowercase();
        if INTROVERSION_PHRASES.iter().any(|p| q.contains(p)) {
            SocialKeying::Reverse
        } else if HIGH_AGENCY_PHRASES.iter().any(|p| q.contains(p)) {
            SocialKeying::HighAgency
        } else {
            SocialKeying::Standard
        }
    }

    /// Keyed value and weight for a raw numeric response.
    pub fn apply(self, value: f64) -> (f64, f64) {
        match self {
            SocialKeying::Reverse => (1.0 - value, 1.0),
            SocialKeying::HighAgency => (value, HIGH_AGENCY_WEIGHT),
            SocialKeying::Standard => (value, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonScores {
    pub person_id: String,
    pub scores: Vec<TraitScore>,
}

impl PersonScores {
    pub fn get(&self, code: &str) -> Option<f64> {
        self.scores.iter().find(|s| s.code == code).map(|s| s.value)
    }

    pub fn as_map(&self) -> BTreeMap<String, f64> {
        self.scores
            .iter()
            .map(|s| (s.code.to_string(), s.value))
            .collect()
    }

    pub fn count_by_source(&self, source: ScoreSource) -> usize {
        self.scores.iter().filter(|s| s.source == source).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoringStats {
    pub persons: usize,
    pub traits_per_person: usize,
    pub total_scores: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub calibrated: usize,
    pub mean_fallback: usize,
    pub neutral: usize,
}

impl ScoringStats {
    pub fn from_persons(persons: &[PersonScores]) -> Self {
        let values: Vec<f64> = persons
            .iter()
            .flat_map(|p| p.scores.iter().map(|s| s.value))
            .collect();
        let mut stats = ScoringStats {
            persons: persons.len(),
            traits_per_person: persons.first().map(|p| p.scores.len()).unwrap_or(0),
            total_scores: values.len(),
            ..Default::default()
        };
        for p in persons {
            stats.calibrated += p.count_by_source(ScoreSource::Calibrated);
            stats.mean_fallback += p.count_by_source(ScoreSource::Mean);
            stats.neutral += p.count_by_source(ScoreSource::Neutral);
        }
        if values.is_empty() {
            return stats;
        }
        let n = values.len() as f64;
        stats.min = values.iter().copied().fold(f64::INFINITY, f64::min);
        stats.max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        stats.mean = values.iter().sum::<f64>() / n;
        if values.len() > 1 {
            let ss: f64 = values.iter().map(|v| (v - stats.mean).powi(2)).sum();
            stats.std_dev = (ss / (n - 1.0)).sqrt();
        }
        stats
    }
}

/// How the columns of a responses table line up with the registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionCoverage {
    pub mapped: usize,
    /// Columns that measure no registry trait.
    pub unmapped: Vec<String>,
    /// Traits none of whose questions is a column.
    pub uncovered_traits: Vec<&'static str>,
}

/// Converts responses into per-person trait scores in [0,1].
///
/// Each (person, trait) walks [`STRATEGY_ORDER`]: the calibrated path when
/// the person has an ability estimate, the arithmetic mean of answered items
/// otherwise or when no item is usable, and finally the neutral score.
/// Calibration failure is item-local, never person-global.
#[derive(Debug, Clone, Copy)]
pub struct TraitScoringEngine<'a> {
    registry: &'a TraitQuestionMap,
}

impl<'a> TraitScoringEngine<'a> {
    pub fn new(registry: &'a TraitQuestionMap) -> Self {
        Self { registry }
    }

    /// Person id to trait code to score.
    pub fn score(
        &self,
        table: &ResponseTable,
        calibration: &Calibration,
    ) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.score_detailed(table, calibration)
            .into_iter()
            .map(|p| {
                let map = p.as_map();
                (p.person_id, map)
            })
            .collect()
    }

    pub fn coverage(&self, table: &ResponseTable) -> QuestionCoverage {
        let mapping = self.registry.question_mapping();
        let mut coverage = QuestionCoverage::default();
        for q in table.questions() {
            if mapping.contains_key(q.as_str()) {
                coverage.mapped += 1;
            } else {
                coverage.unmapped.push(q.clone());
            }
        }
        let columns: HashSet<&str> = table.questions().iter().map(|q| q.as_str()).collect();
        for t in self.registry.traits() {
            let present = self
                .registry
                .questions_for_trait(t.code)
                .iter()
                .any(|q| columns.contains(q));
            if !present {
                coverage.uncovered_traits.push(t.code);
            }
        }
        coverage
    }

    pub fn score_detailed(
        &self,
        table: &ResponseTable,
        calibration: &Calibration,
    ) -> Vec<PersonScores> {
        log_coverage(&self.coverage(table));
        tracing::info!(
            persons = table.len(),
            traits = self.registry.traits().len(),
            calibrated = !calibration.is_empty(),
            "scoring traits"
        );
        let persons: Vec<PersonScores> = table
            .rows()
            .iter()
            .map(|row| self.score_person(table, row, calibration))
            .collect();
        log_scoring_summary(&persons);
        persons
    }

    pub fn score_person(
        &self,
        table: &ResponseTable,
        row: &ResponseRow,
        calibration: &Calibration,
    ) -> PersonScores {
        let ability = calibration.ability(&row.person_id);
        if ability.is_none() && !calibration.is_empty() {
            tracing::debug!(
                person = %row.person_id,
                "no ability estimate; using arithmetic means"
            );
        }

        let mut scores = Vec::with_capacity(self.registry.traits().len());
        for t in self.registry.traits() {
            let mut chosen = None;
            for strategy in STRATEGY_ORDER {
                let value = match strategy {
                    Strategy::Calibrated => ability.and_then(|a| {
                        let v = self.calibrated_score(table, row, t, calibration, a);
                        if v.is_none() {
                            tracing::warn!(
                                person = %row.person_id,
                                trait_code = t.code,
                                "no calibrated items for trait; falling back to mean"
                            );
                        }
                        v
                    }),
                    Strategy::ArithmeticMean => self.mean_score(table, row, t),
                    Strategy::Neutral => {
                        tracing::warn!(
                            person = %row.person_id,
                            trait_code = t.code,
                            "no answered items for trait; using neutral score"
                        );
                        Some(NEUTRAL_SCORE)
                    }
                };
                if let Some(v) = value {
                    chosen = Some(TraitScore {
                        code: t.code,
                        value: clip01(v),
                        source: strategy.source(),
                    });
                    break;
                }
            }
            scores.push(chosen.unwrap_or(TraitScore {
                code: t.code,
                value: NEUTRAL_SCORE,
                source: ScoreSource::Neutral,
            }));
        }

        PersonScores {
            person_id: row.person_id.clone(),
            scores,
        }
    }

    fn numeric_response(
        &self,
        table: &ResponseTable,
        row: &ResponseRow,
        question: &str,
    ) -> Option<f64> {
        match table.response(row, question)? {
            RawResponse::Missing => None,
            RawResponse::Numeric(v) if v.is_finite() && (0.0..=1.0).contains(v) => Some(*v),
            RawResponse::Numeric(_) => None,
            RawResponse::Label(label) => self.registry.likert_to_numeric(label),
        }
    }

    /// Weighted item-ability estimate mapped back to [0,1]; `None` when no
    /// item of the trait was answered.
    pub fn calibrated_score(
        &self,
        table: &ResponseTable,
        row: &ResponseRow,
        t: &Trait,
        calibration: &Calibration,
        person_ability: f64,
    ) -> Option<f64> {
        let mut abilities = Vec::with_capacity(t.questions.len());
        let mut weights = Vec::with_capacity(t.questions.len());

        for question in &t.questions {
            let Some(p) = self.numeric_response(table, row, question) else {
                continue;
            };
            match calibration.difficulty(question) {
                Some(difficulty) => {
                    abilities.push(response_logit(p) + difficulty);
                    weights.push(difficulty.abs() + 1.0);
                }
                None => {
                    abilities.push(person_ability);
                    weights.push(1.0);
                }
            }
        }

        weighted_mean(&abilities, &weights).map(logit_to_unit)
    }

    /// Arithmetic mean of answered items. Social orientation applies its
    /// keyword keying and weights.
    pub fn mean_score(&self, table: &ResponseTable, row: &ResponseRow, t: &Trait) -> Option<f64> {
        let mut values = Vec::with_capacity(t.questions.len());
        let mut weights = Vec::with_capacity(t.questions.len());

        for question in &t.questions {
            let Some(v) = self.numeric_response(table, row, question) else {
                continue;
            };
            if t.code == SOCIAL_ORIENTATION {
                let (keyed, weight) = SocialKeying::of(question).apply(v);
                values.push(keyed);
                weights.push(weight);
            } else {
                values.push(v);
                weights.push(1.0);
            }
        }

        weighted_mean(&values, &weights)
    }
}

fn log_coverage(coverage: &QuestionCoverage) {
    tracing::info!(
        mapped = coverage.mapped,
        unmapped = coverage.unmapped.len(),
        "matched response columns to trait questions"
    );
    for q in &coverage.unmapped {
        tracing::debug!(question = %q, "column measures no trait; ignored");
    }
    if !coverage.uncovered_traits.is_empty() {
        tracing::warn!(
            traits = %coverage.uncovered_traits.join(","),
            "traits without any question column; they will score neutral"
        );
    }
}

fn log_scoring_summary(persons: &[PersonScores]) {
    if persons.is_empty() {
        tracing::warn!("no profiles generated");
        return;
    }
    let stats = ScoringStats::from_persons(persons);
    tracing::info!(
        persons = stats.persons,
        traits_per_person = stats.traits_per_person,
        total_scores = stats.total_scores,
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        std_dev = stats.std_dev,
        calibrated = stats.calibrated,
        mean_fallback = stats.mean_fallback,
        neutral = stats.neutral,
        "trait scoring completed"
    );
    if stats.std_dev <= MIN_SCORE_STD_DEV {
        tracing::warn!(
            std_dev = stats.std_dev,
            "trait scores show little variation"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_score.rs"]
mod tests;
