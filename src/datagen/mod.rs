//! Fake sample data generation from Avro schemas.
//!
//! Walks a parsed schema and produces structurally valid JSON values:
//! every generated value resolves cleanly against the schema it came from.

use crate::utils::config::{FAKE_COLLECTION_MAX, FAKE_STRING_LEN, MAX_SCHEMA_DEPTH};
use crate::utils::error::DatagenError;
use apache_avro::schema::{Schema, SchemaKind};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Generate `count` sample values for a schema.
pub fn generate_data(schema: &Schema, count: usize) -> Result<Vec<Value>, DatagenError> {
    let mut rng = rand::thread_rng();
    let mut names = HashMap::new();
    collect_names(schema, &mut names);

    (0..count)
        .map(|_| generate_value(schema, &names, &mut rng, 0))
        .collect()
}

/// Index named types so `Ref` schemas inside the tree can be resolved
fn collect_names<'a>(schema: &'a Schema, names: &mut HashMap<String, &'a Schema>) {
    match schema {
        Schema::Record(record) => {
            names.insert(record.name.fullname(None), schema);
            for field in &record.fields {
                collect_names(&field.schema, names);
            }
        }
        Schema::Enum(inner) => {
            names.insert(inner.name.fullname(None), schema);
        }
        Schema::Fixed(inner) => {
            names.insert(inner.name.fullname(None), schema);
        }
        Schema::Array(items) => collect_names(items, names),
        Schema::Map(values) => collect_names(values, names),
        Schema::Union(union) => {
            for variant in union.variants() {
                collect_names(variant, names);
            }
        }
        _ => {}
    }
}

fn generate_value(
    schema: &Schema,
    names: &HashMap<String, &Schema>,
    rng: &mut impl Rng,
    depth: usize,
) -> Result<Value, DatagenError> {
    if depth > MAX_SCHEMA_DEPTH {
        return Err(DatagenError::RecursionLimit {
            limit: MAX_SCHEMA_DEPTH,
        });
    }

    let value = match schema {
        Schema::Null => Value::Null,
        Schema::Boolean => Value::from(rng.gen::<bool>()),
        Schema::Int => Value::from(rng.gen_range(0..10_000)),
        Schema::Long => Value::from(rng.gen_range(0..1_000_000_i64)),
        Schema::Float => Value::from((rng.gen::<f32>() * 100.0).round()),
        Schema::Double => Value::from((rng.gen::<f64>() * 100.0).round()),
        Schema::String => Value::from(random_string(rng, FAKE_STRING_LEN)),
        // Bytes and fixed travel as JSON strings; the codec resolves them
        Schema::Bytes | Schema::Decimal(_) => Value::from(random_string(rng, FAKE_STRING_LEN)),
        Schema::Fixed(inner) => Value::from(random_string(rng, inner.size)),
        Schema::Uuid => Value::from(uuid::Uuid::new_v4().to_string()),
        Schema::Date | Schema::TimeMillis => Value::from(rng.gen_range(0..20_000)),
        Schema::TimeMicros
        | Schema::TimestampMillis
        | Schema::TimestampMicros
        | Schema::LocalTimestampMillis
        | Schema::LocalTimestampMicros => Value::from(rng.gen_range(0..1_700_000_000_000_i64)),

        Schema::Enum(inner) => {
            let index = rng.gen_range(0..inner.symbols.len());
            Value::from(inner.symbols[index].clone())
        }

        Schema::Array(items) => {
            let len = rng.gen_range(1..=FAKE_COLLECTION_MAX);
            let values = (0..len)
                .map(|_| generate_value(items, names, rng, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            Value::Array(values)
        }

        Schema::Map(values_schema) => {
            let len = rng.gen_range(1..=FAKE_COLLECTION_MAX);
            let mut map = Map::new();
            for _ in 0..len {
                map.insert(
                    random_string(rng, FAKE_STRING_LEN / 2),
                    generate_value(values_schema, names, rng, depth + 1)?,
                );
            }
            Value::Object(map)
        }

        Schema::Union(union) => {
            let variants = union.variants();
            let has_null = variants.iter().any(|v| matches!(v, Schema::Null));
            // ~50% null for optionals, otherwise a random concrete variant
            if has_null && rng.gen_bool(0.5) {
                Value::Null
            } else {
                let concrete: Vec<&Schema> = variants
                    .iter()
                    .filter(|v| !matches!(v, Schema::Null))
                    .collect();
                match concrete.as_slice() {
                    [] => Value::Null,
                    options => {
                        let index = rng.gen_range(0..options.len());
                        generate_value(options[index], names, rng, depth + 1)?
                    }
                }
            }
        }

        Schema::Record(record) => {
            let mut map = Map::new();
            for field in &record.fields {
                map.insert(
                    field.name.clone(),
                    generate_value(&field.schema, names, rng, depth + 1)?,
                );
            }
            Value::Object(map)
        }

        Schema::Ref { name } => {
            let fullname = name.fullname(None);
            let target = names
                .get(&fullname)
                .copied()
                .ok_or(DatagenError::UnresolvedRef { name: fullname })?;
            generate_value(target, names, rng, depth + 1)?
        }

        // Duration and any other type with no JSON representation: fail
        // loudly rather than emit a value that cannot resolve.
        _ => {
            return Err(DatagenError::Unsupported {
                kind: format!("{:?}", SchemaKind::from(schema)),
            })
        }
    };

    Ok(value)
}

fn random_string(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use apache_avro::types::Value as AvroValue;
    use serde_json::json;

    fn example_schema() -> Schema {
        validate(&json!({
            "type": "record",
            "name": "UserAdvance",
            "fields": [
                {"name": "name", "type": "string"},
                {"name": "age", "type": "int"},
                {"name": "pets", "type": {"type": "array", "items": "string"}},
                {"name": "accounts", "type": {"type": "map", "values": "long"}},
                {"name": "favorite_colors", "type": {
                    "type": "enum", "name": "Colors", "symbols": ["BLUE", "YELLOW", "GREEN"]
                }},
                {"name": "has_car", "type": "boolean"},
                {"name": "address", "type": ["null", "string"]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_generates_requested_count() {
        let schema = example_schema();
        let values = generate_data(&schema, 3).unwrap();
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_generated_records_have_all_fields() {
        let schema = example_schema();
        let values = generate_data(&schema, 1).unwrap();

        let record = values[0].as_object().unwrap();
        assert!(record["name"].is_string());
        assert!(record["age"].is_i64());
        assert!(record["pets"].is_array());
        assert!(record["accounts"].is_object());
        assert!(record["has_car"].is_boolean());
    }

    #[test]
    fn test_generated_data_resolves_against_schema() {
        let schema = example_schema();

        for value in generate_data(&schema, 10).unwrap() {
            let avro = AvroValue::from(value);
            assert!(avro.resolve(&schema).is_ok());
        }
    }

    #[test]
    fn test_enum_symbols_come_from_schema() {
        let schema = example_schema();

        for value in generate_data(&schema, 10).unwrap() {
            let symbol = value["favorite_colors"].as_str().unwrap();
            assert!(["BLUE", "YELLOW", "GREEN"].contains(&symbol));
        }
    }

    #[test]
    fn test_duration_schema_is_unsupported() {
        let schema = validate(&json!({
            "type": "fixed",
            "name": "Span",
            "size": 12,
            "logicalType": "duration"
        }))
        .unwrap();

        assert!(matches!(
            generate_data(&schema, 1),
            Err(DatagenError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_recursive_schema_hits_the_guard() {
        let schema = validate(&json!({
            "type": "record",
            "name": "Node",
            "fields": [{"name": "next", "type": "Node"}]
        }))
        .unwrap();

        assert!(matches!(
            generate_data(&schema, 1),
            Err(DatagenError::RecursionLimit { .. })
        ));
    }
}
