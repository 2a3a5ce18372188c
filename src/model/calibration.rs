use std::collections::HashMap;

use serde::Deserialize;

/// Item difficulties and person abilities on the logit scale, as produced by
/// an external Rasch calibration. Either table may be empty or partial.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Calibration {
    #[serde(default, alias = "itemDifficulty", alias = "item_difficulties")]
    pub item_difficulty: HashMap<String, f64>,
    #[serde(default, alias = "personAbility", alias = "person_abilities")]
    pub person_ability: HashMap<String, f64>,
}

impl Calibration {
    #[cfg(test)]
    pub fn new(
        item_difficulty: HashMap<String, f64>,
        person_ability: HashMap<String, f64>,
    ) -> Self {
        Self {
            item_difficulty,
            person_ability,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_difficulty.is_empty() && self.person_ability.is_empty()
    }

    pub fn ability(&self, person_id: &str) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        self.person_ability
            .get(person_id)
            .copied()
            .filter(|v| v.is_finite())
    }

    pub fn difficulty(&self, question: &str) -> Option<f64> {
        self.item_difficulty
            .get(question)
            .copied()
            .filter(|v| v.is_finite())
    }
}
