//! `serialize` command implementation.

use crate::codec::{self, SerializationType};
use crate::resource::Resource;
use crate::schema;
use anyhow::{Context, Result};
use log::info;

/// Execute the serialize command
///
/// `data` is a JSON literal matching the schema; the encoded result is
/// printed as hex (binary) or JSON text (Avro-JSON).
pub fn execute_serialize(
    data: &str,
    resource: &Resource,
    serialization_type: SerializationType,
) -> Result<()> {
    info!("Serializing datum against {}", resource.location());

    let document = resource
        .load()
        .with_context(|| format!("Failed to load schema resource from {}", resource.location()))?;

    let parsed = schema::validate(&document)?;

    let datum: serde_json::Value =
        serde_json::from_str(data).context("DATA must be a JSON literal")?;

    let encoded = codec::serialize(&datum, &parsed, serialization_type)?;
    println!("{encoded}");

    Ok(())
}
