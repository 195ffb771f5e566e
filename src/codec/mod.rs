//! Serialization seam over the `apache-avro` codec.
//!
//! Sample records come in as JSON literals, get resolved against the
//! schema, and go out either as the compact Avro binary encoding
//! (rendered as lowercase hex) or as Avro's JSON encoding.

use crate::utils::error::CodecError;
use apache_avro::types::Value as AvroValue;
use apache_avro::{from_avro_datum, to_avro_datum, Schema};
use clap::ValueEnum;
use serde_json::Value as JsonValue;
use std::io::Cursor;

/// Wire encodings supported for sample records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SerializationType {
    /// Compact Avro binary encoding
    Avro,
    /// Avro's JSON-based encoding
    AvroJson,
}

/// Encode a JSON datum against a schema.
///
/// Binary output is rendered as lowercase hex so it survives a terminal;
/// Avro-JSON output is the schema-resolved value as JSON text.
///
/// # Errors
/// * `CodecError::Avro` - the datum does not match the schema
pub fn serialize(
    data: &JsonValue,
    schema: &Schema,
    serialization_type: SerializationType,
) -> Result<String, CodecError> {
    let value = AvroValue::from(data.clone());

    match serialization_type {
        SerializationType::Avro => {
            // Resolve first: JSON maps and numbers must be coerced into the
            // schema's record/int/enum shapes before the writer validates.
            let resolved = value.resolve(schema)?;
            let encoded = to_avro_datum(schema, resolved)?;
            Ok(to_hex(&encoded))
        }
        SerializationType::AvroJson => {
            let resolved = value.resolve(schema)?;
            let json = JsonValue::try_from(resolved)?;
            Ok(json.to_string())
        }
    }
}

/// Decode an encoded event back into a JSON value.
///
/// The event is hex text for the binary encoding and raw JSON text for
/// the Avro-JSON encoding.
///
/// # Errors
/// * `CodecError::EventFormat` - binary event is not valid hex
/// * `CodecError::DataFormat` - Avro-JSON event is not valid JSON
/// * `CodecError::Avro` - the event does not decode against the schema
pub fn deserialize(
    event: &str,
    schema: &Schema,
    serialization_type: SerializationType,
) -> Result<JsonValue, CodecError> {
    match serialization_type {
        SerializationType::Avro => {
            let bytes = from_hex(event)?;
            let mut reader = Cursor::new(bytes);
            let value = from_avro_datum(schema, &mut reader, None)?;
            Ok(JsonValue::try_from(value)?)
        }
        SerializationType::AvroJson => {
            let data: JsonValue = serde_json::from_str(event)?;
            let resolved = AvroValue::from(data).resolve(schema)?;
            Ok(JsonValue::try_from(resolved)?)
        }
    }
}

/// Render bytes as lowercase hex
fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Parse hex text (optional 0x prefix) back into bytes
fn from_hex(text: &str) -> Result<Vec<u8>, CodecError> {
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);

    // Hex digits are ASCII; reject anything else before slicing at byte
    // offsets, which would panic on a multi-byte character boundary.
    if !text.is_ascii() {
        return Err(CodecError::EventFormat(
            "non-ascii character in event".to_string(),
        ));
    }

    if text.len() % 2 != 0 {
        return Err(CodecError::EventFormat(
            "odd number of hex digits".to_string(),
        ));
    }

    (0..text.len())
        .step_by(2)
        .map(|offset| {
            u8::from_str_radix(&text[offset..offset + 2], 16)
                .map_err(|_| CodecError::EventFormat(format!("invalid digit at offset {offset}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn example_schema() -> Schema {
        validate(&json!({
            "type": "record",
            "name": "User",
            "fields": [
                {"name": "name", "type": "string"},
                {"name": "age", "type": "int"},
                {"name": "address", "type": ["null", "string"]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(to_hex(&[0x00, 0x7f, 0xff]), "007fff");
        assert_eq!(from_hex("007fff").unwrap(), vec![0x00, 0x7f, 0xff]);
        assert_eq!(from_hex("0x007fff").unwrap(), vec![0x00, 0x7f, 0xff]);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(from_hex("0g").is_err());
        assert!(from_hex("abc").is_err());
    }

    #[test]
    fn test_from_hex_rejects_non_ascii() {
        // Multi-byte characters must produce an error, not a slice panic,
        // even when the byte length happens to be even.
        assert!(matches!(from_hex("€€"), Err(CodecError::EventFormat(_))));
        assert!(matches!(from_hex("aß"), Err(CodecError::EventFormat(_))));
    }

    #[test]
    fn test_binary_round_trip() {
        let schema = example_schema();
        let datum = json!({"name": "bond", "age": 50, "address": null});

        let encoded = serialize(&datum, &schema, SerializationType::Avro).unwrap();
        let decoded = deserialize(&encoded, &schema, SerializationType::Avro).unwrap();

        assert_eq!(decoded["name"], "bond");
        assert_eq!(decoded["age"], 50);
        assert_eq!(decoded["address"], JsonValue::Null);
    }

    #[test]
    fn test_avro_json_round_trip() {
        let schema = example_schema();
        let datum = json!({"name": "bond", "age": 50, "address": "London"});

        let encoded = serialize(&datum, &schema, SerializationType::AvroJson).unwrap();
        let decoded = deserialize(&encoded, &schema, SerializationType::AvroJson).unwrap();

        assert_eq!(decoded["name"], "bond");
        assert_eq!(decoded["age"], 50);
        assert_eq!(decoded["address"], "London");
    }

    #[test]
    fn test_serialize_rejects_mismatched_datum() {
        let schema = example_schema();
        let datum = json!({"name": "bond"});

        assert!(serialize(&datum, &schema, SerializationType::Avro).is_err());
    }
}
