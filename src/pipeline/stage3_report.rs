use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::archetype::{ClassificationResult, CorrelationTable};
use crate::pipeline::stage1_score::{PersonScores, ScoringStats};
use crate::registry::TraitQuestionMap;
use crate::registry::catalog::ArchetypeCatalog;
use crate::report::json::{
    InputMeta, PersonSummary, SummaryData, ToolMeta, render_correlations_json,
    render_score_map_json, render_summary_json,
};
use crate::report::text::render_report_text;
use crate::report::{ProfileSummary, format_f64_6};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("report input mismatch: {0}")]
    Mismatch(String),
}

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub persons: &'a [PersonScores],
    pub classifications: &'a [ClassificationResult],
    pub correlations: &'a CorrelationTable,
    pub registry: &'a TraitQuestionMap,
    pub catalog: &'a ArchetypeCatalog,
    pub input: InputMeta,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage3Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    if input.persons.len() != input.classifications.len() {
        return Err(ReportError::Mismatch(format!(
            "{} scored persons but {} classifications",
            input.persons.len(),
            input.classifications.len()
        )));
    }
    fs::create_dir_all(out_dir)?;

    write_trait_scores_tsv(input, &out_dir.join("trait_scores.tsv"))?;
    write_archetypes_tsv(input, &out_dir.join("archetypes.tsv"))?;

    let summary = build_summary(input);
    write_text(&out_dir.join("summary.json"), &render_summary_json(&summary)?)?;
    write_text(&out_dir.join("report.txt"), &render_report_text(&summary))?;
    write_correlations(input.correlations, out_dir)?;

    tracing::info!(
        out = %out_dir.display(),
        persons = input.persons.len(),
        "reports written"
    );
    Ok(())
}

pub fn write_correlations(table: &CorrelationTable, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;
    write_text(
        &out_dir.join("correlations.json"),
        &render_correlations_json(table)?,
    )?;
    Ok(())
}

pub fn write_score_map(
    scores: &BTreeMap<String, BTreeMap<String, f64>>,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;
    write_text(&out_dir.join("trait_scores.json"), &render_score_map_json(scores)?)?;
    Ok(())
}

fn write_trait_scores_tsv(input: &Stage3Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let codes = input.registry.trait_codes();

    let mut header = vec!["person_id".to_string()];
    header.extend(codes.iter().map(|c| c.to_string()));
    header.extend(codes.iter().map(|c| format!("{c}_source")));
    header.push("overall".to_string());
    writeln!(w, "{}", header.join("\t"))?;

    for person in input.persons {
        let mut row = vec![person.person_id.clone()];
        for code in &codes {
            row.push(
                person
                    .get(code)
                    .map(format_f64_6)
                    .unwrap_or_default(),
            );
        }
        for code in &codes {
            let source = person
                .scores
                .iter()
                .find(|s| s.code == *code)
                .map(|s| s.source.as_str())
                .unwrap_or("");
            row.push(source.to_string());
        }
        let profile = ProfileSummary::build(person, input.registry);
        row.push(format_f64_6(profile.overall_score));
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn write_archetypes_tsv(input: &Stage3Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let names: Vec<&str> = input.catalog.archetypes().map(|a| a.name.as_str()).collect();

    let mut header = vec![
        "person_id".to_string(),
        "archetype".to_string(),
        "archetype_score".to_string(),
        "confidence".to_string(),
    ];
    header.extend(names.iter().map(|n| format!("score_{}", column_slug(n))));
    writeln!(w, "{}", header.join("\t"))?;

    for (person, result) in input.persons.iter().zip(input.classifications) {
        let mut row = vec![
            person.person_id.clone(),
            result.archetype_name.clone(),
            format_f64_6(result.archetype_score),
            format_f64_6(result.confidence),
        ];
        for name in &names {
            row.push(
                result
                    .all_scores
                    .get(*name)
                    .copied()
                    .map(format_f64_6)
                    .unwrap_or_default(),
            );
        }
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn build_summary(input: &Stage3Input<'_>) -> SummaryData {
    let mut archetype_counts: BTreeMap<String, usize> = BTreeMap::new();
    for c in input.classifications {
        *archetype_counts.entry(c.archetype_name.clone()).or_default() += 1;
    }

    let persons = input
        .persons
        .iter()
        .zip(input.classifications)
        .map(|(person, classification)| PersonSummary {
            person_id: person.person_id.clone(),
            trait_scores: person.as_map(),
            trait_sources: person
                .scores
                .iter()
                .map(|s| (s.code.to_string(), s.source))
                .collect(),
            classification: classification.clone(),
            profile: ProfileSummary::build(person, input.registry),
        })
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: input.input.clone(),
        scoring: ScoringStats::from_persons(input.persons),
        archetype_counts,
        persons,
    }
}

fn column_slug(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
