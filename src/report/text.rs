use crate::model::traits::ScoreSource;
use crate::report::json::{PersonSummary, SummaryData};
use crate::report::{TraitHighlight, format_f64_6, format_percent};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Trait Profile & Archetype Report\n");
    out.push_str("================================\n\n");

    out.push_str("1. Run overview\n");
    out.push_str(&format!("Persons scored: {}\n", data.input.n_persons));
    out.push_str(&format!(
        "Calibration: {}\n",
        calibration_statement(
            data.input.calibrated_items,
            data.input.calibrated_persons
        )
    ));
    out.push_str(&format!(
        "Score sources: calibrated {}, mean {}, neutral {}\n",
        data.scoring.calibrated, data.scoring.mean_fallback, data.scoring.neutral
    ));
    out.push_str(&format!(
        "Score range: {} to {} (mean {}, sd {})\n",
        format_f64_6(data.scoring.min),
        format_f64_6(data.scoring.max),
        format_f64_6(data.scoring.mean),
        format_f64_6(data.scoring.std_dev)
    ));
    if !data.archetype_counts.is_empty() {
        let counts = data
            .archetype_counts
            .iter()
            .map(|(name, n)| format!("{name} ({n})"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("Archetypes: {}\n", counts));
    }
    out.push('\n');

    for (idx, person) in data.persons.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 2, person.person_id));
        render_person(&mut out, person);
        out.push('\n');
    }

    out
}

fn render_person(out: &mut String, person: &PersonSummary) {
    let c = &person.classification;
    if c.is_unknown() {
        out.push_str(&format!("Archetype: {} ({})\n", c.archetype_name, c.archetype_description));
    } else {
        out.push_str(&format!("Archetype: {}\n", c.archetype_name));
        out.push_str(&format!(
            "Alignment: {} (confidence {})\n",
            format_percent(c.archetype_score),
            format_f64_6(c.confidence)
        ));
    }
    if !c.key_traits.is_empty() {
        out.push_str(&format!("Key traits: {}\n", c.key_traits.join(", ")));
    }
    out.push_str(&format!(
        "Overall score: {}\n",
        format_percent(person.profile.overall_score)
    ));
    out.push_str(&format!(
        "Strengths: {}\n",
        highlights(&person.profile.strengths)
    ));
    out.push_str(&format!(
        "Growth opportunities: {}\n",
        highlights(&person.profile.growth_opportunities)
    ));
    let neutral = person
        .trait_sources
        .iter()
        .filter(|(_, s)| **s == ScoreSource::Neutral)
        .map(|(code, _)| code.as_str())
        .collect::<Vec<_>>();
    if !neutral.is_empty() {
        out.push_str(&format!(
            "Unanswered traits (neutral 0.5): {}\n",
            neutral.join(", ")
        ));
    }
}

fn highlights(items: &[TraitHighlight]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(|h| format!("{} {} [{}]", h.name, format_percent(h.score), h.band.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn calibration_statement(items: usize, persons: usize) -> String {
    if items == 0 && persons == 0 {
        "none (arithmetic means)".to_string()
    } else {
        format!("{} item difficulties, {} person abilities", items, persons)
    }
}
