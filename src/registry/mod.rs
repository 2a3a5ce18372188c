pub mod catalog;
pub mod defs;
pub mod loader;
pub mod mapping;

use std::collections::BTreeMap;

use crate::model::traits::{SOCIAL_ORIENTATION, Trait};
use crate::registry::defs::{TraitDef, builtin_traits, display_order, likert_scale};
use crate::registry::mapping::canonical_trait_name;

/// Trait registry: codes, full names, and the questions measuring each trait.
/// Built once and shared read-only by the scoring engine and classifier.
#[derive(Debug, Clone)]
pub struct TraitQuestionMap {
    traits: Vec<Trait>,
    display_order: Vec<&'static str>,
    likert: BTreeMap<&'static str, f64>,
}

impl TraitQuestionMap {
    pub fn builtin() -> Self {
        Self::from_defs(builtin_traits(), display_order())
    }

    pub fn from_defs(defs: &[TraitDef], display: &[&'static str]) -> Self {
        let traits = defs
            .iter()
            .map(|def| Trait {
                code: def.code,
                name: def.name,
                questions: def.questions.to_vec(),
            })
            .collect::<Vec<_>>();
        let mut display_order = display.to_vec();
        for t in &traits {
            if !display_order.contains(&t.name) {
                display_order.push(t.name);
            }
        }
        let likert = likert_scale().iter().map(|p| (p.label, p.value)).collect();
        Self {
            traits,
            display_order,
            likert,
        }
    }

    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    pub fn trait_codes(&self) -> Vec<&'static str> {
        self.traits.iter().map(|t| t.code).collect()
    }

    pub fn questions_for_trait(&self, code: &str) -> &[&'static str] {
        self.get(code).map(|t| t.questions.as_slice()).unwrap_or(&[])
    }

    pub fn get(&self, code: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.code == code)
    }

    /// Question text to trait code.
    pub fn question_mapping(&self) -> BTreeMap<&'static str, &'static str> {
        let mut map = BTreeMap::new();
        for t in &self.traits {
            for q in &t.questions {
                map.insert(*q, t.code);
            }
        }
        map
    }

    /// Normalized Likert label to numeric value.
    pub fn likert_mapping(&self) -> &BTreeMap<&'static str, f64> {
        &self.likert
    }

    pub fn likert_to_numeric(&self, raw: &str) -> Option<f64> {
        mapping::likert_to_numeric(raw, &self.likert)
    }

    pub fn name_for_code(&self, code: &str) -> Option<&'static str> {
        self.get(code).map(|t| t.name)
    }

    /// Resolves a full trait name, or one of its display variants, to a code.
    pub fn code_for_name(&self, name: &str) -> Option<&'static str> {
        let canonical = canonical_trait_name(name);
        self.traits
            .iter()
            .find(|t| t.name == canonical)
            .map(|t| t.code)
    }

    pub fn social_orientation_name(&self) -> Option<&'static str> {
        self.name_for_code(SOCIAL_ORIENTATION)
    }

    /// Full trait names in heatmap column order, social orientation first.
    pub fn display_order(&self) -> &[&'static str] {
        &self.display_order
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/registry/tests.rs"]
mod tests;
