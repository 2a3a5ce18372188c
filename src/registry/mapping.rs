use std::collections::BTreeMap;

use crate::model::traits::clip01;

/// Missing-value markers accepted in response cells.
const MISSING_MARKERS: &[&str] = &["", "na", "n/a", "nan", "null", "none"];

/// Alternate spellings of trait names seen in reports and exports.
const NAME_VARIANTS: &[(&str, &str)] = &[
    ("Risk-Taking", "Risk Taking"),
    ("Decision-Making", "Decision Making"),
    ("Problem-Solving", "Problem Solving"),
    ("Resilience & Grit", "Resilience and Grit"),
    ("Drive & Ambition", "Drive and Ambition"),
    ("Relationship Building", "Relationship-Building"),
    ("Social Orientation*", "Social Orientation"),
];

pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

pub fn is_missing(raw: &str) -> bool {
    let norm = normalize_label(raw);
    MISSING_MARKERS.contains(&norm.as_str())
}

/// Converts a Likert label or a numeric string to a value in [0,1].
/// Returns `None` for missing cells and for anything unparseable.
pub fn likert_to_numeric(raw: &str, scale: &BTreeMap<&'static str, f64>) -> Option<f64> {
    if is_missing(raw) {
        return None;
    }
    let norm = normalize_label(raw);
    if let Some(value) = scale.get(norm.as_str()) {
        return Some(*value);
    }
    match norm.parse::<f64>() {
        Ok(v) if v.is_finite() && (0.0..=1.0).contains(&v) => Some(clip01(v)),
        _ => None,
    }
}

/// Maps a display variant of a trait name onto its canonical registry name.
pub fn canonical_trait_name(name: &str) -> &str {
    let trimmed = name.trim();
    for (variant, canonical) in NAME_VARIANTS {
        if *variant == trimmed {
            return *canonical;
        }
    }
    trimmed
}
