//! `schema-diff` command implementation.

use crate::diff::generate_diff;
use crate::resource::Resource;
use crate::schema;
use anyhow::{Context, Result};
use log::info;

/// Execute the schema-diff command
///
/// Loads and validates both schemas, then prints the structural diff
/// report. Identical schemas print an explicit "no differences" line.
pub fn execute_diff(source: &Resource, target: &Resource) -> Result<()> {
    info!(
        "Diffing schemas: {} -> {}",
        source.location(),
        target.location()
    );

    let source_document = source
        .load()
        .with_context(|| format!("Failed to load source schema from {}", source.location()))?;
    let target_document = target
        .load()
        .with_context(|| format!("Failed to load target schema from {}", target.location()))?;

    schema::validate(&source_document)?;
    schema::validate(&target_document)?;

    let report = generate_diff(&source_document, &target_document);

    if report.is_empty() {
        println!("No differences found.");
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
