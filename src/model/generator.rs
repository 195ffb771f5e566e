//! Rust model source generation.
//!
//! Walks a parsed Avro schema, collects every named type (records, enums,
//! fixed), and renders Rust definitions for them. Field and type names are
//! normalized to Rust conventions; the original Avro spelling is preserved
//! through serde rename attributes where the derive style carries serde.

use crate::utils::error::ModelError;
use apache_avro::schema::{RecordSchema, Schema};
use clap::ValueEnum;
use std::collections::HashSet;

/// Derive style applied to every generated type
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BaseClass {
    /// Serde-backed model: Serialize/Deserialize alongside Debug/Clone/PartialEq
    AvroModel,
    /// Plain data holder: Debug/Clone/PartialEq only
    Plain,
}

impl BaseClass {
    fn derive_line(self) -> &'static str {
        match self {
            BaseClass::AvroModel => {
                "#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]"
            }
            BaseClass::Plain => "#[derive(Debug, Clone, PartialEq)]",
        }
    }

    fn carries_serde(self) -> bool {
        matches!(self, BaseClass::AvroModel)
    }

    fn label(self) -> &'static str {
        match self {
            BaseClass::AvroModel => "AvroModel",
            BaseClass::Plain => "Plain",
        }
    }
}

/// Render Rust source for every named type in the schema.
///
/// # Errors
/// * `ModelError::NoNamedTypes` - the schema declares no record, enum, or fixed
pub fn generate_model(schema: &Schema, base_class: BaseClass) -> Result<String, ModelError> {
    let mut named = Vec::new();
    let mut seen = HashSet::new();
    collect_named_types(schema, &mut named, &mut seen);

    if named.is_empty() {
        return Err(ModelError::NoNamedTypes);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "// Models generated from an Avro schema (style: {})\n",
        base_class.label()
    ));

    for schema in named {
        out.push('\n');
        match schema {
            Schema::Record(record) => emit_record(record, base_class, &mut out),
            Schema::Enum(inner) => emit_enum(inner, base_class, &mut out),
            Schema::Fixed(inner) => emit_fixed(inner, base_class, &mut out),
            _ => {}
        }
    }

    Ok(out)
}

/// Depth-first collection of named types, nested definitions first so a
/// reader meets a type before the record that uses it.
fn collect_named_types<'a>(
    schema: &'a Schema,
    named: &mut Vec<&'a Schema>,
    seen: &mut HashSet<String>,
) {
    match schema {
        Schema::Record(record) => {
            if !seen.insert(record.name.fullname(None)) {
                return;
            }
            for field in &record.fields {
                collect_named_types(&field.schema, named, seen);
            }
            named.push(schema);
        }
        Schema::Enum(inner) => {
            if seen.insert(inner.name.fullname(None)) {
                named.push(schema);
            }
        }
        Schema::Fixed(inner) => {
            if seen.insert(inner.name.fullname(None)) {
                named.push(schema);
            }
        }
        Schema::Array(items) => collect_named_types(items, named, seen),
        Schema::Map(values) => collect_named_types(values, named, seen),
        Schema::Union(union) => {
            for variant in union.variants() {
                collect_named_types(variant, named, seen);
            }
        }
        _ => {}
    }
}

fn emit_record(record: &RecordSchema, base_class: BaseClass, out: &mut String) {
    if let Some(doc) = &record.doc {
        out.push_str(&format!("/// {doc}\n"));
    }
    out.push_str(base_class.derive_line());
    out.push('\n');
    out.push_str(&format!("pub struct {} {{\n", pascal_case(&record.name.name)));

    for field in &record.fields {
        if let Some(doc) = &field.doc {
            out.push_str(&format!("    /// {doc}\n"));
        }
        let ident = field_ident(&field.name);
        if base_class.carries_serde() && ident != field.name {
            out.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.name));
        }
        out.push_str(&format!("    pub {}: {},\n", ident, rust_type(&field.schema)));
    }

    out.push_str("}\n");
}

fn emit_enum(inner: &apache_avro::schema::EnumSchema, base_class: BaseClass, out: &mut String) {
    if let Some(doc) = &inner.doc {
        out.push_str(&format!("/// {doc}\n"));
    }
    out.push_str(base_class.derive_line());
    out.push('\n');
    out.push_str(&format!("pub enum {} {{\n", pascal_case(&inner.name.name)));

    for symbol in &inner.symbols {
        let variant = pascal_case(symbol);
        if base_class.carries_serde() && variant != *symbol {
            out.push_str(&format!("    #[serde(rename = \"{symbol}\")]\n"));
        }
        out.push_str(&format!("    {variant},\n"));
    }

    out.push_str("}\n");
}

fn emit_fixed(inner: &apache_avro::schema::FixedSchema, base_class: BaseClass, out: &mut String) {
    if let Some(doc) = &inner.doc {
        out.push_str(&format!("/// {doc}\n"));
    }
    out.push_str(base_class.derive_line());
    out.push('\n');
    out.push_str(&format!(
        "pub struct {}(pub [u8; {}]);\n",
        pascal_case(&inner.name.name),
        inner.size
    ));
}

/// Map an Avro schema to the Rust type used in a generated field
fn rust_type(schema: &Schema) -> String {
    match schema {
        Schema::Null => "()".to_string(),
        Schema::Boolean => "bool".to_string(),
        Schema::Int | Schema::Date | Schema::TimeMillis => "i32".to_string(),
        Schema::Long
        | Schema::TimeMicros
        | Schema::TimestampMillis
        | Schema::TimestampMicros => "i64".to_string(),
        Schema::Float => "f32".to_string(),
        Schema::Double => "f64".to_string(),
        Schema::Bytes => "Vec<u8>".to_string(),
        Schema::String | Schema::Uuid => "String".to_string(),
        Schema::Array(items) => format!("Vec<{}>", rust_type(items)),
        Schema::Map(values) => {
            format!("std::collections::HashMap<String, {}>", rust_type(values))
        }
        Schema::Union(union) => {
            let variants = union.variants();
            // [null, T] is the idiomatic Avro optional
            match variants {
                [Schema::Null, inner] => format!("Option<{}>", rust_type(inner)),
                [inner, Schema::Null] => format!("Option<{}>", rust_type(inner)),
                _ => "serde_json::Value".to_string(),
            }
        }
        Schema::Record(record) => pascal_case(&record.name.name),
        Schema::Enum(inner) => pascal_case(&inner.name.name),
        Schema::Fixed(inner) => pascal_case(&inner.name.name),
        Schema::Ref { name } => pascal_case(&name.name),
        Schema::Decimal(_) => "Vec<u8>".to_string(),
        Schema::Duration => "[u8; 12]".to_string(),
        _ => "serde_json::Value".to_string(),
    }
}

/// Rust field identifier for an Avro field name, keyword-escaped
fn field_ident(name: &str) -> String {
    let ident = snake_case(name);
    if is_rust_keyword(&ident) {
        format!("r#{ident}")
    } else {
        ident
    }
}

fn pascal_case(input: &str) -> String {
    let mut out = String::new();
    let mut upper_next = true;
    for ch in input.chars() {
        if ch == '_' || ch == '-' || ch == '.' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn snake_case(input: &str) -> String {
    let mut out = String::new();
    let mut prev_lower = false;
    for ch in input.chars() {
        if ch == '-' || ch == '.' {
            out.push('_');
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

fn is_rust_keyword(word: &str) -> bool {
    matches!(
        word,
        "as" | "break" | "const" | "continue" | "crate" | "dyn" | "else" | "enum" | "extern"
            | "false" | "fn" | "for" | "if" | "impl" | "in" | "let" | "loop" | "match" | "mod"
            | "move" | "mut" | "pub" | "ref" | "return" | "self" | "static" | "struct" | "super"
            | "trait" | "true" | "type" | "unsafe" | "use" | "where" | "while" | "async"
            | "await" | "box"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use serde_json::json;

    fn parsed(document: serde_json::Value) -> Schema {
        validate(&document).unwrap()
    }

    #[test]
    fn test_generate_record_model() {
        let schema = parsed(json!({
            "type": "record",
            "name": "user_profile",
            "doc": "A user profile",
            "fields": [
                {"name": "name", "type": "string"},
                {"name": "age", "type": "int"},
                {"name": "favoriteColor", "type": ["null", "string"]}
            ]
        }));

        let source = generate_model(&schema, BaseClass::AvroModel).unwrap();

        assert!(source.contains("/// A user profile"));
        assert!(source.contains("pub struct UserProfile {"));
        assert!(source.contains("pub name: String,"));
        assert!(source.contains("pub age: i32,"));
        assert!(source.contains("#[serde(rename = \"favoriteColor\")]"));
        assert!(source.contains("pub favorite_color: Option<String>,"));
        assert!(source.contains("serde::Serialize"));
    }

    #[test]
    fn test_plain_style_has_no_serde() {
        let schema = parsed(json!({
            "type": "record",
            "name": "Point",
            "fields": [{"name": "x", "type": "double"}]
        }));

        let source = generate_model(&schema, BaseClass::Plain).unwrap();

        assert!(!source.contains("serde"));
        assert!(source.contains("pub x: f64,"));
    }

    #[test]
    fn test_nested_types_emitted_before_parent() {
        let schema = parsed(json!({
            "type": "record",
            "name": "Order",
            "fields": [
                {"name": "status", "type": {
                    "type": "enum", "name": "Status", "symbols": ["OPEN", "CLOSED"]
                }},
                {"name": "items", "type": {"type": "array", "items": "string"}}
            ]
        }));

        let source = generate_model(&schema, BaseClass::AvroModel).unwrap();

        let enum_at = source.find("pub enum Status").unwrap();
        let struct_at = source.find("pub struct Order").unwrap();
        assert!(enum_at < struct_at);
        assert!(source.contains("pub items: Vec<String>,"));
    }

    #[test]
    fn test_keyword_field_is_escaped() {
        let schema = parsed(json!({
            "type": "record",
            "name": "Wrapper",
            "fields": [{"name": "type", "type": "string"}]
        }));

        let source = generate_model(&schema, BaseClass::Plain).unwrap();
        assert!(source.contains("pub r#type: String,"));
    }

    #[test]
    fn test_primitive_schema_has_no_models() {
        let schema = parsed(json!({"type": "string"}));

        assert!(matches!(
            generate_model(&schema, BaseClass::AvroModel),
            Err(ModelError::NoNamedTypes)
        ));
    }

    #[test]
    fn test_case_helpers() {
        assert_eq!(pascal_case("user_profile"), "UserProfile");
        assert_eq!(pascal_case("UserProfile"), "UserProfile");
        assert_eq!(snake_case("favoriteColor"), "favorite_color");
        assert_eq!(snake_case("already_snake"), "already_snake");
    }
}
