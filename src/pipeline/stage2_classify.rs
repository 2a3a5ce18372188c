use std::collections::BTreeMap;

use crate::model::archetype::{Archetype, ClassificationResult, CorrelationTable};
use crate::model::traits::round2;
use crate::registry::TraitQuestionMap;
use crate::registry::catalog::{ArchetypeCatalog, trait_category};
use crate::registry::mapping::canonical_trait_name;

const KEY_TRAIT_BASE: f64 = 0.85;
const KEY_TRAIT_LEAD_BONUS: f64 = 0.05;
const KEY_TRAIT_POSITION_STEP: f64 = 0.01;
const PRIMARY_BASE: f64 = 0.55;
const SECONDARY_BASE: f64 = 0.40;
const BACKGROUND_BASE: f64 = 0.20;
const FOCUS_MODULUS: u32 = 11;
const BACKGROUND_MODULUS: u32 = 15;

/// Matches trait profiles against an archetype catalog.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeClassifier<'a> {
    catalog: &'a ArchetypeCatalog,
    registry: &'a TraitQuestionMap,
}

impl<'a> ArchetypeClassifier<'a> {
    pub fn new(catalog: &'a ArchetypeCatalog, registry: &'a TraitQuestionMap) -> Self {
        Self { catalog, registry }
    }

    /// Average score over the archetype's key traits that are present in
    /// `trait_scores`; `None` when none of them is.
    pub fn key_trait_average(
        &self,
        archetype: &Archetype,
        trait_scores: &BTreeMap<String, f64>,
    ) -> Option<f64> {
        let mut sum = 0.0;
        let mut n = 0usize;
        for name in &archetype.key_traits {
            let code = self.registry.code_for_name(name).unwrap_or(name.as_str());
            if let Some(v) = trait_scores.get(code) {
                sum += v;
                n += 1;
            }
        }
        if n == 0 { None } else { Some(sum / n as f64) }
    }

    /// Best-matching archetype. Ties keep the first archetype in catalog
    /// order; archetypes with no measured key trait score 0.0.
    pub fn detect(&self, trait_scores: &BTreeMap<String, f64>) -> ClassificationResult {
        let mut all_scores = BTreeMap::new();
        let mut best: Option<(&Archetype, f64)> = None;
        let mut any_measured = false;

        for archetype in self.catalog.archetypes() {
            let avg = match self.key_trait_average(archetype, trait_scores) {
                Some(avg) => {
                    any_measured = true;
                    avg
                }
                None => 0.0,
            };
            all_scores.insert(archetype.name.clone(), avg);
            match best {
                Some((_, best_score)) if avg <= best_score => {}
                _ => best = Some((archetype, avg)),
            }
        }

        let Some((archetype, score)) = best.filter(|_| any_measured) else {
            tracing::warn!("no measurable key traits; archetype unknown");
            return ClassificationResult::unknown();
        };

        let result = ClassificationResult {
            archetype_name: archetype.name.clone(),
            archetype_description: archetype.description.clone(),
            archetype_color: archetype.color.clone(),
            archetype_score: score,
            confidence: score.min(1.0),
            key_traits: archetype.key_traits.clone(),
            all_scores,
        };
        tracing::debug!(
            archetype = %result.archetype_name,
            score = result.archetype_score,
            "archetype detected"
        );
        result
    }

    /// Static reference correlation between a trait (full name) and an
    /// archetype. Independent of any person's data. Key traits match on the
    /// exact name; categories accept the display variants.
    pub fn correlation(&self, trait_name: &str, archetype: &Archetype) -> f64 {
        let name = canonical_trait_name(trait_name);
        if Some(name) == self.registry.social_orientation_name() {
            return 0.0;
        }

        if let Some(pos) = archetype.key_trait_position(trait_name) {
            let bonus = (KEY_TRAIT_LEAD_BONUS - pos as f64 * KEY_TRAIT_POSITION_STEP).max(0.0);
            return round2(KEY_TRAIT_BASE + bonus);
        }

        let seed = char_sum(trait_name, &archetype.name);
        let category = trait_category(name);
        let focus = self.catalog.focus(&archetype.name);
        let (base, modulus) = match focus {
            Some(f) if category == f.primary => (PRIMARY_BASE, FOCUS_MODULUS),
            Some(f) if category == f.secondary => (SECONDARY_BASE, FOCUS_MODULUS),
            _ => (BACKGROUND_BASE, BACKGROUND_MODULUS),
        };
        round2(base + (seed % modulus) as f64 * 0.01)
    }

    /// Cross product of catalog order and display trait order.
    pub fn correlation_table(&self) -> CorrelationTable {
        let traits = self.registry.display_order();
        let rows = self
            .catalog
            .archetypes()
            .map(|archetype| {
                let values = traits
                    .iter()
                    .map(|t| self.correlation(t, archetype))
                    .collect::<Vec<_>>();
                (archetype.name.clone(), values)
            })
            .collect::<Vec<_>>();

        for (name, values) in &rows {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            tracing::debug!(
                archetype = %name,
                traits = values.len(),
                min,
                max,
                "correlation row"
            );
        }

        CorrelationTable {
            traits: traits.iter().map(|t| t.to_string()).collect(),
            rows,
        }
    }
}

/// Sum of the Unicode scalar values of `trait_name` followed by
/// `archetype_name`. Kept exact so correlation tables are reproducible.
pub fn char_sum(trait_name: &str, archetype_name: &str) -> u32 {
    trait_name
        .chars()
        .chain(archetype_name.chars())
        .map(|c| c as u32)
        .sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_classify.rs"]
mod tests;
