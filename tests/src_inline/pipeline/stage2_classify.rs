use super::*;
use crate::registry::catalog::CatalogEntry;

fn profile(pairs: &[(&str, f64)], rest: f64, registry: &TraitQuestionMap) -> BTreeMap<String, f64> {
    registry
        .trait_codes()
        .into_iter()
        .map(|code| {
            let v = pairs
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, v)| *v)
                .unwrap_or(rest);
            (code.to_string(), v)
        })
        .collect()
}

fn custom_entry(name: &str, key_traits: &[&str]) -> CatalogEntry {
    CatalogEntry {
        archetype: Archetype {
            name: name.to_string(),
            description: String::new(),
            key_traits: key_traits.iter().map(|t| t.to_string()).collect(),
            color: "#111111".to_string(),
        },
        focus: None,
    }
}

#[test]
fn test_detect_strategic_innovation() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let scores = profile(
        &[("RT", 0.9), ("IO", 0.85), ("CT", 0.8), ("DM", 0.75)],
        0.5,
        &registry,
    );
    let result = classifier.detect(&scores);
    assert_eq!(result.archetype_name, "Strategic Innovation");
    assert!((result.archetype_score - 0.825).abs() < 1e-9);
    assert!((result.confidence - 0.825).abs() < 1e-9);
    assert_eq!(result.archetype_color, "#667eea");
    assert_eq!(result.key_traits.len(), 4);
    assert_eq!(result.all_scores.len(), 5);
    assert!((result.all_scores["Resilient Leadership"] - 0.58).abs() < 1e-9);
}

#[test]
fn test_detect_empty_profile_is_unknown() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let result = classifier.detect(&BTreeMap::new());
    assert!(result.is_unknown());
    assert_eq!(result, ClassificationResult::unknown());
    assert_eq!(result.archetype_description, "Unable to determine archetype");
    assert_eq!(result.archetype_color, "#666666");
    assert_eq!(result.archetype_score, 0.0);
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn test_detect_tie_keeps_catalog_order() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let result = classifier.detect(&profile(&[], 0.6, &registry));
    assert_eq!(result.archetype_name, "Strategic Innovation");
    assert!((result.archetype_score - 0.6).abs() < 1e-9);
}

#[test]
fn test_detect_partial_profile() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let mut scores = BTreeMap::new();
    scores.insert("SL".to_string(), 0.7);
    scores.insert("A".to_string(), 0.9);
    let result = classifier.detect(&scores);
    assert_eq!(result.archetype_name, "Collaborative Responsibility");
    assert!((result.archetype_score - 0.8).abs() < 1e-9);
    // archetypes without any measured key trait still appear with 0.0
    assert_eq!(result.all_scores["Strategic Innovation"], 0.0);
    assert!((result.all_scores["Resilient Leadership"] - 0.7).abs() < 1e-9);
}

#[test]
fn test_unmeasured_archetype_wins_only_on_zero_tie() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::from_entries(
        vec![
            custom_entry("Unmeasured", &["Negotiation", "Conflict Resolution", "Accountability"]),
            custom_entry("Measured", &["Risk Taking", "Adaptability", "Decision Making"]),
        ],
        &registry,
    )
    .unwrap();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);

    let mut scores = BTreeMap::new();
    scores.insert("RT".to_string(), 0.1);
    assert_eq!(classifier.detect(&scores).archetype_name, "Measured");

    scores.insert("RT".to_string(), 0.0);
    let result = classifier.detect(&scores);
    assert_eq!(result.archetype_name, "Unmeasured");
    assert_eq!(result.archetype_score, 0.0);
    assert!(!result.is_unknown());
}

#[test]
fn test_detect_all_zero_profile_keeps_catalog_order() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let mut scores = BTreeMap::new();
    scores.insert("RT".to_string(), 0.0);
    let result = classifier.detect(&scores);
    assert_eq!(result.archetype_name, "Strategic Innovation");
    assert_eq!(result.archetype_score, 0.0);
    assert_eq!(result.confidence, 0.0);
    assert!(!result.is_unknown());
    assert_eq!(result.all_scores.len(), 5);
}

#[test]
fn test_key_trait_average_uses_variant_names() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let archetype = Archetype {
        name: "Variant".to_string(),
        description: String::new(),
        key_traits: vec!["Risk-Taking".to_string(), "Drive & Ambition".to_string()],
        color: String::new(),
    };
    let mut scores = BTreeMap::new();
    scores.insert("RT".to_string(), 0.4);
    scores.insert("DA".to_string(), 0.8);
    let avg = classifier.key_trait_average(&archetype, &scores).unwrap();
    assert!((avg - 0.6).abs() < 1e-9);
    assert_eq!(classifier.key_trait_average(&archetype, &BTreeMap::new()), None);
}

#[test]
fn test_social_orientation_correlation_is_zero() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    for archetype in catalog.archetypes() {
        assert_eq!(classifier.correlation("Social Orientation", archetype), 0.0);
        assert_eq!(classifier.correlation("Social Orientation*", archetype), 0.0);
    }
}

#[test]
fn test_key_trait_correlation_by_position() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);

    let leadership = catalog.get("Resilient Leadership").unwrap();
    assert_eq!(classifier.correlation("Resilience and Grit", leadership), 0.90);
    assert_eq!(classifier.correlation("Team Building", leadership), 0.89);
    assert_eq!(classifier.correlation("Risk Taking", leadership), 0.86);

    let wide = Archetype {
        name: "Wide".to_string(),
        description: String::new(),
        key_traits: [
            "Negotiation",
            "Accountability",
            "Adaptability",
            "Team Building",
            "Risk Taking",
            "Decision Making",
        ]
        .iter()
        .map(|t| t.to_string())
        .collect(),
        color: String::new(),
    };
    assert_eq!(classifier.correlation("Decision Making", &wide), 0.85);
}

#[test]
fn test_non_key_correlation_by_category() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let strategic = catalog.get("Strategic Innovation").unwrap();
    let ambitious = catalog.get("Ambitious Drive").unwrap();

    assert_eq!(char_sum("Problem Solving", "Strategic Innovation"), 3518);
    // cognitive trait, cognitive primary focus
    assert_eq!(classifier.correlation("Problem Solving", strategic), 0.64);
    // social trait, no focus match
    assert_eq!(classifier.correlation("Negotiation", strategic), 0.20);
    assert_eq!(classifier.correlation("Team Building", strategic), 0.29);
    // cognitive trait, cognitive secondary focus
    assert_eq!(classifier.correlation("Critical Thinking", ambitious), 0.44);
}

#[test]
fn test_variant_name_is_not_a_key_trait() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let leadership = catalog.get("Resilient Leadership").unwrap();
    // resilience category, secondary focus, hashed on the variant spelling
    assert_eq!(char_sum("Risk-Taking", "Resilient Leadership"), 3060);
    assert_eq!(classifier.correlation("Risk-Taking", leadership), 0.42);
}

#[test]
fn test_correlation_without_focus_uses_background_band() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::from_entries(
        vec![custom_entry("Plain", &["Risk Taking", "Adaptability", "Accountability"])],
        &registry,
    )
    .unwrap();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let plain = catalog.get("Plain").unwrap();
    for name in registry.display_order().iter().skip(1) {
        let v = classifier.correlation(name, plain);
        if plain.key_trait_position(name).is_none() {
            assert!((0.20..=0.34).contains(&v), "{name} -> {v}");
        }
    }
}

#[test]
fn test_correlation_table_shape_and_range() {
    let registry = TraitQuestionMap::builtin();
    let catalog = ArchetypeCatalog::builtin();
    let classifier = ArchetypeClassifier::new(&catalog, &registry);
    let table = classifier.correlation_table();
    assert_eq!(table.traits.len(), 17);
    assert_eq!(table.traits[0], "Social Orientation");
    assert_eq!(table.rows.len(), 5);
    assert_eq!(table.rows[0].0, "Strategic Innovation");
    for (_, values) in &table.rows {
        assert_eq!(values.len(), 17);
        assert_eq!(values[0], 0.0);
        for v in values {
            assert!((0.0..=1.0).contains(v));
            assert_eq!(*v, round2(*v));
        }
    }
    assert_eq!(table, classifier.correlation_table());
    assert_eq!(table.as_map().len(), 5);
}
