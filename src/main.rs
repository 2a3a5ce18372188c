mod input;
mod model;
mod pipeline;
mod registry;
mod report;
mod tracing;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::input::{InputError, load_calibration, load_responses};
use crate::model::archetype::ClassificationResult;
use crate::model::calibration::Calibration;
use crate::pipeline::stage1_score::TraitScoringEngine;
use crate::pipeline::stage2_classify::ArchetypeClassifier;
use crate::pipeline::stage3_report::{
    ReportError, Stage3Input, write_correlations, write_reports, write_score_map,
};
use crate::registry::TraitQuestionMap;
use crate::registry::catalog::ArchetypeCatalog;
use crate::registry::loader::load_catalog;
use crate::report::json::InputMeta;

#[derive(Debug, Parser)]
#[command(name = "kira-archetypes", version, about = "Calibrated trait scoring and archetype classification")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score responses and classify every person
    Run(RunArgs),
    /// Score responses only and write the person/trait score map
    Score(ScoreArgs),
    /// Write the person-independent trait/archetype correlation table
    Correlations(CorrelationArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Responses TSV (optionally .gz), one row per person
    #[arg(long)]
    input: PathBuf,
    /// Output directory
    #[arg(long)]
    out: PathBuf,
    /// Calibration snapshot JSON with item difficulties and person abilities
    #[arg(long)]
    calibration: Option<PathBuf>,
    /// Archetype catalog JSON replacing the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Only report this person
    #[arg(long)]
    person: Option<String>,
}

#[derive(Debug, Clone, Args)]
struct ScoreArgs {
    /// Responses TSV (optionally .gz), one row per person
    #[arg(long)]
    input: PathBuf,
    /// Output directory
    #[arg(long)]
    out: PathBuf,
    /// Calibration snapshot JSON with item difficulties and person abilities
    #[arg(long)]
    calibration: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct CorrelationArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,
    /// Archetype catalog JSON replacing the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Logging(#[from] crate::tracing::InitError),
    #[error("person {0} not found in responses")]
    UnknownPerson(String),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    crate::tracing::init_tracing(&cli.log_level)?;
    let registry = TraitQuestionMap::builtin();
    match cli.command {
        Command::Run(args) => run_scoring(&args, &registry),
        Command::Score(args) => run_score_only(&args, &registry),
        Command::Correlations(args) => run_correlations(&args, &registry),
    }
}

fn resolve_catalog(
    path: Option<&Path>,
    registry: &TraitQuestionMap,
) -> Result<(ArchetypeCatalog, String), InputError> {
    match path {
        Some(path) => Ok((load_catalog(path, registry)?, path.display().to_string())),
        None => Ok((ArchetypeCatalog::builtin(), "builtin".to_string())),
    }
}

fn resolve_calibration(path: Option<&Path>) -> Result<Calibration, InputError> {
    match path {
        Some(path) => load_calibration(path),
        None => {
            ::tracing::info!("no calibration snapshot given; scoring by arithmetic means");
            Ok(Calibration::default())
        }
    }
}

fn run_score_only(args: &ScoreArgs, registry: &TraitQuestionMap) -> Result<(), AppError> {
    let table = load_responses(&args.input)?;
    let calibration = resolve_calibration(args.calibration.as_deref())?;
    let scores = TraitScoringEngine::new(registry).score(&table, &calibration);
    write_score_map(&scores, &args.out)?;
    ::tracing::info!(
        out = %args.out.display(),
        persons = scores.len(),
        "trait scores written"
    );
    Ok(())
}

fn run_scoring(args: &RunArgs, registry: &TraitQuestionMap) -> Result<(), AppError> {
    let (catalog, catalog_label) = resolve_catalog(args.catalog.as_deref(), registry)?;
    let table = load_responses(&args.input)?;
    let calibration = resolve_calibration(args.calibration.as_deref())?;

    if let Some(person) = &args.person
        && table.row(person).is_none()
    {
        return Err(AppError::UnknownPerson(person.clone()));
    }

    let engine = TraitScoringEngine::new(registry);
    let mut persons = engine.score_detailed(&table, &calibration);
    if let Some(person) = &args.person {
        persons.retain(|p| &p.person_id == person);
    }

    let classifier = ArchetypeClassifier::new(&catalog, registry);
    let classifications: Vec<ClassificationResult> = persons
        .iter()
        .map(|p| {
            let result = classifier.detect(&p.as_map());
            ::tracing::info!(
                person = %p.person_id,
                archetype = %result.archetype_name,
                confidence = result.confidence,
                "classified"
            );
            result
        })
        .collect();
    let correlations = classifier.correlation_table();

    let input = Stage3Input {
        persons: &persons,
        classifications: &classifications,
        correlations: &correlations,
        registry,
        catalog: &catalog,
        input: InputMeta {
            responses: args.input.display().to_string(),
            calibration: args.calibration.as_ref().map(|p| p.display().to_string()),
            catalog: catalog_label,
            n_persons: persons.len(),
            n_questions: table.questions().len(),
            calibrated_items: calibration.item_difficulty.len(),
            calibrated_persons: calibration.person_ability.len(),
        },
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out)?;
    Ok(())
}

fn run_correlations(args: &CorrelationArgs, registry: &TraitQuestionMap) -> Result<(), AppError> {
    let (catalog, _) = resolve_catalog(args.catalog.as_deref(), registry)?;
    let classifier = ArchetypeClassifier::new(&catalog, registry);
    let table = classifier.correlation_table();
    write_correlations(&table, &args.out)?;
    ::tracing::info!(
        out = %args.out.display(),
        archetypes = table.rows.len(),
        traits = table.traits.len(),
        "correlation table written"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
