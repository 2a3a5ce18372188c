use std::collections::BTreeSet;

use crate::model::archetype::{Archetype, CategoryFocus, TraitCategory};
use crate::registry::TraitQuestionMap;
use crate::registry::mapping::canonical_trait_name;

pub const MIN_KEY_TRAITS: usize = 3;
pub const MAX_KEY_TRAITS: usize = 5;

#[derive(Debug, Clone, Copy)]
struct ArchetypeDef {
    name: &'static str,
    description: &'static str,
    key_traits: &'static [&'static str],
    color: &'static str,
    focus: CategoryFocus,
}

const BUILTIN_ARCHETYPES: &[ArchetypeDef] = &[
    ArchetypeDef {
        name: "Strategic Innovation",
        description: "This archetype is characterized by Risk Taking, Innovation Orientation, Critical Thinking, and Decision Making. It emphasizes calculated and strategic innovative efforts.",
        key_traits: &[
            "Risk Taking",
            "Innovation Orientation",
            "Critical Thinking",
            "Decision Making",
        ],
        color: "#667eea",
        focus: CategoryFocus {
            primary: TraitCategory::Cognitive,
            secondary: TraitCategory::Resilience,
        },
    },
    ArchetypeDef {
        name: "Resilient Leadership",
        description: "This archetype combines Resilience and Grit, Team Building, Servant Leadership, Adaptability, and Risk Taking. It highlights the importance of leading with empathy while building cohesive teams that can thrive amidst challenges.",
        key_traits: &[
            "Resilience and Grit",
            "Team Building",
            "Servant Leadership",
            "Adaptability",
            "Risk Taking",
        ],
        color: "#764ba2",
        focus: CategoryFocus {
            primary: TraitCategory::Social,
            secondary: TraitCategory::Resilience,
        },
    },
    ArchetypeDef {
        name: "Collaborative Responsibility",
        description: "This archetype includes Servant Leadership, Team Building, and Accountability. It focuses on the growth and well-being of a team, emphasizing ownership of actions for building trust and a successful business.",
        key_traits: &["Servant Leadership", "Team Building", "Accountability"],
        color: "#f093fb",
        focus: CategoryFocus {
            primary: TraitCategory::Social,
            secondary: TraitCategory::Resilience,
        },
    },
    ArchetypeDef {
        name: "Ambitious Drive",
        description: "This archetype is defined by Drive and Ambition, Resilience and Grit, and Problem Solving. These traits are essential for staying motivated and persevering through business challenges.",
        key_traits: &["Drive and Ambition", "Resilience and Grit", "Problem Solving"],
        color: "#4facfe",
        focus: CategoryFocus {
            primary: TraitCategory::Resilience,
            secondary: TraitCategory::Cognitive,
        },
    },
    ArchetypeDef {
        name: "Adaptive Intelligence",
        description: "This archetype is characterized by Critical Thinking, Problem Solving, Emotional Intelligence, and Adaptability. It emphasizes the ability to navigate complex situations with both analytical and emotional intelligence.",
        key_traits: &[
            "Critical Thinking",
            "Problem Solving",
            "Emotional Intelligence",
            "Adaptability",
        ],
        color: "#43e97b",
        focus: CategoryFocus {
            primary: TraitCategory::Cognitive,
            secondary: TraitCategory::Social,
        },
    },
];

const TRAIT_CATEGORIES: &[(&str, TraitCategory)] = &[
    ("Social Orientation", TraitCategory::Social),
    ("Relationship-Building", TraitCategory::Social),
    ("Team Building", TraitCategory::Social),
    ("Servant Leadership", TraitCategory::Social),
    ("Negotiation", TraitCategory::Social),
    ("Conflict Resolution", TraitCategory::Social),
    ("Emotional Intelligence", TraitCategory::Social),
    ("Decision Making", TraitCategory::Cognitive),
    ("Problem Solving", TraitCategory::Cognitive),
    ("Critical Thinking", TraitCategory::Cognitive),
    ("Innovation Orientation", TraitCategory::Cognitive),
    ("Resilience and Grit", TraitCategory::Resilience),
    ("Drive and Ambition", TraitCategory::Resilience),
    ("Risk Taking", TraitCategory::Resilience),
    ("Approach to Failure", TraitCategory::Resilience),
    ("Adaptability", TraitCategory::Resilience),
    ("Accountability", TraitCategory::Resilience),
];

/// Semantic category of a trait; unlisted traits are `General`.
pub fn trait_category(trait_name: &str) -> TraitCategory {
    let name = canonical_trait_name(trait_name);
    TRAIT_CATEGORIES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .unwrap_or(TraitCategory::General)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate archetype name: {0}")]
    DuplicateName(String),
    #[error("archetype {name} has {count} key traits (expected 3 to 5)")]
    KeyTraitCount { name: String, count: usize },
    #[error("archetype {archetype} references unknown trait {trait_name}")]
    UnknownTrait {
        archetype: String,
        trait_name: String,
    },
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub archetype: Archetype,
    pub focus: Option<CategoryFocus>,
}

/// Ordered, immutable archetype catalog. Catalog order is the tie-break
/// order of classification.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    entries: Vec<CatalogEntry>,
}

impl ArchetypeCatalog {
    pub fn builtin() -> Self {
        let entries = BUILTIN_ARCHETYPES
            .iter()
            .map(|def| CatalogEntry {
                archetype: Archetype {
                    name: def.name.to_string(),
                    description: def.description.to_string(),
                    key_traits: def.key_traits.iter().map(|t| t.to_string()).collect(),
                    color: def.color.to_string(),
                },
                focus: Some(def.focus),
            })
            .collect();
        Self { entries }
    }

    /// Builds a catalog from custom entries. Key-trait names are
    /// canonicalized and checked against the registry.
    pub fn from_entries(
        entries: Vec<CatalogEntry>,
        registry: &TraitQuestionMap,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = BTreeSet::new();
        let mut out = Vec::with_capacity(entries.len());
        for mut entry in entries {
            let name = entry.archetype.name.clone();
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateName(name));
            }
            let count = entry.archetype.key_traits.len();
            if !(MIN_KEY_TRAITS..=MAX_KEY_TRAITS).contains(&count) {
                return Err(CatalogError::KeyTraitCount { name, count });
            }
            for key in entry.archetype.key_traits.iter_mut() {
                let canonical = canonical_trait_name(key).to_string();
                if registry.code_for_name(&canonical).is_none() {
                    return Err(CatalogError::UnknownTrait {
                        archetype: name,
                        trait_name: key.clone(),
                    });
                }
                *key = canonical;
            }
            out.push(entry);
        }
        Ok(Self { entries: out })
    }

    pub fn archetypes(&self) -> impl Iterator<Item = &Archetype> {
        self.entries.iter().map(|e| &e.archetype)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Archetype> {
        self.archetypes().find(|a| a.name == name)
    }

    pub fn focus(&self, archetype_name: &str) -> Option<CategoryFocus> {
        self.entries
            .iter()
            .find(|e| e.archetype.name == archetype_name)
            .and_then(|e| e.focus)
    }
}
