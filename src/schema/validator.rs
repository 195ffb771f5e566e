//! Structural validation of schema documents.
//!
//! Parsing is delegated to the `apache-avro` crate; this module only
//! wraps its rejection into an error that carries the offending document.

use crate::utils::error::SchemaError;
use apache_avro::Schema;
use serde_json::Value;

/// Validate a JSON document as a structurally valid Avro schema.
///
/// Returns the parsed [`Schema`] so callers can feed it straight into
/// the codec or the generators without re-parsing. Pure function, no
/// side effects.
///
/// # Errors
/// * `SchemaError::InvalidSchema` - the Avro parser rejected the document
pub fn validate(document: &Value) -> Result<Schema, SchemaError> {
    Schema::parse(document).map_err(|source| SchemaError::InvalidSchema {
        schema: document.to_string(),
        source,
    })
}
