use std::path::Path;

use serde::Deserialize;

use crate::input::InputError;
use crate::input::open_maybe_gz;
use crate::model::archetype::{Archetype, CategoryFocus};
use crate::registry::TraitQuestionMap;
use crate::registry::catalog::{ArchetypeCatalog, CatalogEntry};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    archetypes: Vec<CatalogFileEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogFileEntry {
    #[serde(flatten)]
    archetype: Archetype,
    #[serde(default)]
    focus: Option<CategoryFocus>,
}

/// Loads an archetype catalog override from JSON.
pub fn load_catalog(
    path: &Path,
    registry: &TraitQuestionMap,
) -> Result<ArchetypeCatalog, InputError> {
    let reader = open_maybe_gz(path)?;
    let file: CatalogFile = serde_json::from_reader(reader)?;
    parse_entries(file, registry)
}

#[cfg(test)]
pub fn parse_catalog_str(
    json: &str,
    registry: &TraitQuestionMap,
) -> Result<ArchetypeCatalog, InputError> {
    let file: CatalogFile = serde_json::from_str(json)?;
    parse_entries(file, registry)
}

fn parse_entries(
    file: CatalogFile,
    registry: &TraitQuestionMap,
) -> Result<ArchetypeCatalog, InputError> {
    let entries = file
        .archetypes
        .into_iter()
        .map(|e| CatalogEntry {
            archetype: e.archetype,
            focus: e.focus,
        })
        .collect();
    let catalog = ArchetypeCatalog::from_entries(entries, registry)?;
    tracing::info!(
        archetypes = catalog.len(),
        "loaded archetype catalog override"
    );
    Ok(catalog)
}
