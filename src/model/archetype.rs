use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub description: String,
    /// Full trait names, most defining first.
    pub key_traits: Vec<String>,
    pub color: String,
}

impl Archetype {
    pub fn key_trait_position(&self, trait_name: &str) -> Option<usize> {
        self.key_traits.iter().position(|t| t == trait_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitCategory {
    Social,
    Cognitive,
    Resilience,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFocus {
    pub primary: TraitCategory,
    pub secondary: TraitCategory,
}

pub const UNKNOWN_ARCHETYPE: &str = "Unknown";
pub const UNKNOWN_DESCRIPTION: &str = "Unable to determine archetype";
pub const UNKNOWN_COLOR: &str = "#666666";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub archetype_name: String,
    pub archetype_description: String,
    pub archetype_color: String,
    pub archetype_score: f64,
    pub confidence: f64,
    pub key_traits: Vec<String>,
    pub all_scores: BTreeMap<String, f64>,
}

impl ClassificationResult {
    pub fn unknown() -> Self {
        Self {
            archetype_name: UNKNOWN_ARCHETYPE.to_string(),
            archetype_description: UNKNOWN_DESCRIPTION.to_string(),
            archetype_color: UNKNOWN_COLOR.to_string(),
            archetype_score: 0.0,
            confidence: 0.0,
            key_traits: Vec::new(),
            all_scores: BTreeMap::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.archetype_name == UNKNOWN_ARCHETYPE && self.key_traits.is_empty()
    }
}

/// Archetype name to per-trait correlations, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationTable {
    pub traits: Vec<String>,
    pub rows: Vec<(String, Vec<f64>)>,
}

impl CorrelationTable {
    pub fn as_map(&self) -> BTreeMap<String, Vec<f64>> {
        self.rows.iter().cloned().collect()
    }
}
