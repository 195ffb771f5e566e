//! `validate-schema` command implementation.

use crate::resource::Resource;
use crate::schema;
use anyhow::{Context, Result};
use log::info;

/// Execute the validate-schema command
///
/// Loads the resource, validates it as an Avro schema, and prints a
/// confirmation followed by the schema content. Any failure propagates
/// and terminates the process with a non-zero exit.
pub fn execute_validate(resource: &Resource) -> Result<()> {
    info!("Validating schema from {}", resource.location());

    let document = resource
        .load()
        .with_context(|| format!("Failed to load schema resource from {}", resource.location()))?;

    schema::validate(&document)?;

    println!("Valid schema!!");
    println!();
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
