use super::catalog::{ArchetypeCatalog, CatalogEntry, CatalogError, trait_category};
use super::loader::parse_catalog_str;
use super::mapping::{canonical_trait_name, is_missing};
use super::*;
use crate::input::InputError;
use crate::model::archetype::{Archetype, TraitCategory};

fn entry(name: &str, key_traits: &[&str]) -> CatalogEntry {
    CatalogEntry {
        archetype: Archetype {
            name: name.to_string(),
            description: format!("{name} description"),
            key_traits: key_traits.iter().map(|t| t.to_string()).collect(),
            color: "#000000".to_string(),
        },
        focus: None,
    }
}

#[test]
fn test_builtin_trait_codes_in_order() {
    let registry = TraitQuestionMap::builtin();
    assert_eq!(
        registry.trait_codes(),
        vec![
            "IN", "DM", "RB", "N", "CT", "PS", "A", "EI", "C", "TB", "SL", "AD", "F", "RG", "IO",
            "DA", "RT"
        ]
    );
    for t in registry.traits() {
        assert!(!t.questions.is_empty(), "{} has no questions", t.code);
    }
    assert_eq!(registry.questions_for_trait("IN").len(), 7);
    assert!(registry.questions_for_trait("XX").is_empty());
}

#[test]
fn test_question_mapping_covers_every_question() {
    let registry = TraitQuestionMap::builtin();
    let mapping = registry.question_mapping();
    let total: usize = registry.traits().iter().map(|t| t.questions.len()).sum();
    assert_eq!(mapping.len(), total);
    for q in registry.questions_for_trait("RT") {
        assert_eq!(mapping.get(q), Some(&"RT"));
    }
}

#[test]
fn test_display_order_starts_with_social_orientation() {
    let registry = TraitQuestionMap::builtin();
    let order = registry.display_order();
    assert_eq!(order.len(), 17);
    assert_eq!(order[0], "Social Orientation");
    for t in registry.traits() {
        assert!(order.contains(&t.name));
    }
}

#[test]
fn test_likert_labels() {
    let registry = TraitQuestionMap::builtin();
    assert_eq!(registry.likert_to_numeric("Strongly Disagree"), Some(0.0));
    assert_eq!(registry.likert_to_numeric("disagree"), Some(0.25));
    assert_eq!(registry.likert_to_numeric("  Neutral "), Some(0.5));
    assert_eq!(registry.likert_to_numeric("Neither agree nor disagree"), Some(0.5));
    assert_eq!(registry.likert_to_numeric("Agree"), Some(0.75));
    assert_eq!(registry.likert_to_numeric("STRONGLY   AGREE"), Some(1.0));
    assert_eq!(registry.likert_mapping().get("agree"), Some(&0.75));
}

#[test]
fn test_likert_numeric_and_missing() {
    let registry = TraitQuestionMap::builtin();
    assert_eq!(registry.likert_to_numeric("0.3"), Some(0.3));
    assert_eq!(registry.likert_to_numeric("1"), Some(1.0));
    assert_eq!(registry.likert_to_numeric("1.5"), None);
    assert_eq!(registry.likert_to_numeric("-0.1"), None);
    assert_eq!(registry.likert_to_numeric("sometimes"), None);
    assert_eq!(registry.likert_to_numeric("NA"), None);
    assert_eq!(registry.likert_mapping().len(), 6);
    assert!(is_missing(""));
    assert!(is_missing("n/a"));
    assert!(!is_missing("agree"));
}

#[test]
fn test_name_variants() {
    assert_eq!(canonical_trait_name("Risk-Taking"), "Risk Taking");
    assert_eq!(canonical_trait_name("Resilience & Grit"), "Resilience and Grit");
    assert_eq!(canonical_trait_name("Relationship Building"), "Relationship-Building");
    assert_eq!(canonical_trait_name("Social Orientation*"), "Social Orientation");
    assert_eq!(canonical_trait_name(" Adaptability "), "Adaptability");

    let registry = TraitQuestionMap::builtin();
    assert_eq!(registry.code_for_name("Drive & Ambition"), Some("DA"));
    assert_eq!(registry.code_for_name("Decision Making"), Some("DM"));
    assert_eq!(registry.code_for_name("Charisma"), None);
    assert_eq!(registry.social_orientation_name(), Some("Social Orientation"));
}

#[test]
fn test_trait_categories() {
    assert_eq!(trait_category("Team Building"), TraitCategory::Social);
    assert_eq!(trait_category("Critical Thinking"), TraitCategory::Cognitive);
    assert_eq!(trait_category("Risk-Taking"), TraitCategory::Resilience);
    assert_eq!(trait_category("Charisma"), TraitCategory::General);
}

#[test]
fn test_builtin_catalog() {
    let catalog = ArchetypeCatalog::builtin();
    let names: Vec<&str> = catalog.archetypes().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Strategic Innovation",
            "Resilient Leadership",
            "Collaborative Responsibility",
            "Ambitious Drive",
            "Adaptive Intelligence"
        ]
    );
    let registry = TraitQuestionMap::builtin();
    for a in catalog.archetypes() {
        assert!((3..=5).contains(&a.key_traits.len()));
        for t in &a.key_traits {
            assert!(registry.code_for_name(t).is_some(), "{t}");
        }
        assert!(catalog.focus(&a.name).is_some());
    }
    assert_eq!(
        catalog.get("Ambitious Drive").map(|a| a.color.as_str()),
        Some("#4facfe")
    );
}

#[test]
fn test_catalog_validation() {
    let registry = TraitQuestionMap::builtin();
    assert_eq!(
        ArchetypeCatalog::from_entries(Vec::new(), &registry).unwrap_err(),
        CatalogError::Empty
    );

    let dup = vec![
        entry("A", &["Risk Taking", "Adaptability", "Accountability"]),
        entry("A", &["Risk Taking", "Adaptability", "Accountability"]),
    ];
    assert_eq!(
        ArchetypeCatalog::from_entries(dup, &registry).unwrap_err(),
        CatalogError::DuplicateName("A".to_string())
    );

    let short = vec![entry("B", &["Risk Taking", "Adaptability"])];
    assert!(matches!(
        ArchetypeCatalog::from_entries(short, &registry).unwrap_err(),
        CatalogError::KeyTraitCount { count: 2, .. }
    ));

    let unknown = vec![entry("C", &["Risk Taking", "Adaptability", "Charisma"])];
    assert!(matches!(
        ArchetypeCatalog::from_entries(unknown, &registry).unwrap_err(),
        CatalogError::UnknownTrait { .. }
    ));
}

#[test]
fn test_catalog_canonicalizes_variants() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::from_entries(
        vec![entry("Bold", &["Risk-Taking", "Drive & Ambition", "Adaptability"])],
        &registry,
    )
    .unwrap();
    let bold = catalog.get("Bold").unwrap();
    assert_eq!(
        bold.key_traits,
        vec!["Risk Taking", "Drive and Ambition", "Adaptability"]
    );
    assert!(catalog.focus("Bold").is_none());
}

#[test]
fn test_parse_catalog_json() {
    let registry = TraitQuestionMap::builtin();
    let json = r##"{
        "archetypes": [
            {
                "name": "Builder",
                "description": "Builds teams",
                "key_traits": ["Team Building", "Servant Leadership", "Accountability"],
                "color": "#123456",
                "focus": {"primary": "Social", "secondary": "Resilience"}
            },
            {
                "name": "Thinker",
                "description": "Thinks",
                "key_traits": ["Critical Thinking", "Problem-Solving", "Decision Making"],
                "color": "#654321"
            }
        ]
    }"##;
    let catalog = parse_catalog_str(json, &registry).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.focus("Builder").map(|f| f.primary),
        Some(TraitCategory::Social)
    );
    assert!(catalog.focus("Thinker").is_none());
    assert_eq!(catalog.get("Thinker").unwrap().key_traits[1], "Problem Solving");
}

#[test]
fn test_parse_catalog_json_rejects_bad_entries() {
    let registry = TraitQuestionMap::builtin();
    let err = parse_catalog_str(r#"{"archetypes": []}"#, &registry).unwrap_err();
    assert!(matches!(err, InputError::Catalog(CatalogError::Empty)));
    let err = parse_catalog_str("{not json", &registry).unwrap_err();
    assert!(matches!(err, InputError::Json(_)));
}
