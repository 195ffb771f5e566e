//! `generate-data` command implementation.

use crate::datagen::generate_data;
use crate::resource::Resource;
use crate::schema;
use anyhow::{Context, Result};
use log::info;
use serde_json::Value;

/// Execute the generate-data command
///
/// A single value is printed bare; more than one prints a JSON list.
pub fn execute_generate_data(resource: &Resource, count: usize) -> Result<()> {
    info!(
        "Generating {} sample value(s) from {}",
        count,
        resource.location()
    );

    let document = resource
        .load()
        .with_context(|| format!("Failed to load schema resource from {}", resource.location()))?;

    let parsed = schema::validate(&document)?;

    let mut values = generate_data(&parsed, count)?;

    if values.len() == 1 {
        println!("{}", serde_json::to_string_pretty(&values.remove(0))?);
    } else {
        println!("{}", serde_json::to_string_pretty(&Value::Array(values))?);
    }

    Ok(())
}
