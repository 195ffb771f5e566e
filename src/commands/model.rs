//! `generate-model` command implementation.

use crate::model::{generate_model, BaseClass};
use crate::resource::Resource;
use crate::schema;
use anyhow::{Context, Result};
use log::info;

/// Execute the generate-model command
pub fn execute_generate_model(resource: &Resource, base_class: BaseClass) -> Result<()> {
    info!("Generating models from {}", resource.location());

    let document = resource
        .load()
        .with_context(|| format!("Failed to load schema resource from {}", resource.location()))?;

    let parsed = schema::validate(&document)?;

    let source = generate_model(&parsed, base_class)?;
    println!("{source}");

    Ok(())
}
