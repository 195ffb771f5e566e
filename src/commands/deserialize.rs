//! `deserialize` command implementation.

use crate::codec::{self, SerializationType};
use crate::resource::Resource;
use crate::schema;
use anyhow::{Context, Result};
use log::info;

/// Execute the deserialize command
///
/// `event` is hex text for the binary encoding and raw JSON text for
/// Avro-JSON; the decoded value is printed as JSON.
pub fn execute_deserialize(
    event: &str,
    resource: &Resource,
    serialization_type: SerializationType,
) -> Result<()> {
    info!("Deserializing event against {}", resource.location());

    let document = resource
        .load()
        .with_context(|| format!("Failed to load schema resource from {}", resource.location()))?;

    let parsed = schema::validate(&document)?;

    let decoded = codec::deserialize(event, &parsed, serialization_type)?;
    println!("{decoded}");

    Ok(())
}
