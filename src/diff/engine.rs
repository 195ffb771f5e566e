//! Core diff engine implementation.
//! Generates complete diff reports by comparing two JSON documents.

use super::report::{DiffReport, TypeChange, ValueChange};
use serde_json::Value;

/// Generate a complete diff report comparing a source document against a target
///
/// # Arguments
/// * `source` - The source document to compare against
/// * `target` - The target document to compare
///
/// # Returns
/// A [`DiffReport`] with every difference bucketed by category
pub fn generate_diff(source: &Value, target: &Value) -> DiffReport {
    let mut report = DiffReport::new();
    diff_value("root", source, target, &mut report);
    report
}

fn diff_value(path: &str, source: &Value, target: &Value, report: &mut DiffReport) {
    match (source, target) {
        (Value::Object(source_map), Value::Object(target_map)) => {
            for (key, source_value) in source_map {
                let child = format!("{path}['{key}']");
                match target_map.get(key) {
                    Some(target_value) => diff_value(&child, source_value, target_value, report),
                    None => {
                        report.dictionary_item_removed.insert(child, source_value.clone());
                    }
                }
            }
            for (key, target_value) in target_map {
                if !source_map.contains_key(key) {
                    report
                        .dictionary_item_added
                        .insert(format!("{path}['{key}']"), target_value.clone());
                }
            }
        }

        (Value::Array(source_items), Value::Array(target_items)) => {
            for (index, (source_value, target_value)) in
                source_items.iter().zip(target_items).enumerate()
            {
                diff_value(&format!("{path}[{index}]"), source_value, target_value, report);
            }
            for (index, source_value) in source_items.iter().enumerate().skip(target_items.len()) {
                report
                    .iterable_item_removed
                    .insert(format!("{path}[{index}]"), source_value.clone());
            }
            for (index, target_value) in target_items.iter().enumerate().skip(source_items.len()) {
                report
                    .iterable_item_added
                    .insert(format!("{path}[{index}]"), target_value.clone());
            }
        }

        _ if type_name(source) != type_name(target) => {
            report.type_changes.insert(
                path.to_string(),
                TypeChange {
                    old_type: type_name(source),
                    new_type: type_name(target),
                    old_value: source.clone(),
                    new_value: target.clone(),
                },
            );
        }

        _ if source != target => {
            report.values_changed.insert(
                path.to_string(),
                ValueChange {
                    old_value: source.clone(),
                    new_value: target.clone(),
                },
            );
        }

        _ => {}
    }
}

/// JSON type name used to detect type changes
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_identical_documents_produce_empty_report() {
        let document = json!({"type": "record", "name": "A", "fields": []});
        let report = generate_diff(&document, &document);

        assert!(report.is_empty());
        assert_eq!(report.change_count(), 0);
    }

    #[test]
    fn test_value_change_is_path_addressed() {
        let source = json!({"name": "User", "fields": [{"name": "id", "type": "int"}]});
        let target = json!({"name": "User", "fields": [{"name": "id", "type": "long"}]});

        let report = generate_diff(&source, &target);

        let change = &report.values_changed["root['fields'][0]['type']"];
        assert_eq!(change.old_value, json!("int"));
        assert_eq!(change.new_value, json!("long"));
        assert_eq!(report.change_count(), 1);
    }

    #[test]
    fn test_type_change_detected() {
        let source = json!({"default": 0});
        let target = json!({"default": "0"});

        let report = generate_diff(&source, &target);

        let change = &report.type_changes["root['default']"];
        assert_eq!(change.old_type, "integer");
        assert_eq!(change.new_type, "string");
    }

    #[test]
    fn test_dictionary_items_added_and_removed() {
        let source = json!({"name": "User", "doc": "old docs"});
        let target = json!({"name": "User", "namespace": "com.example"});

        let report = generate_diff(&source, &target);

        assert!(report.dictionary_item_removed.contains_key("root['doc']"));
        assert!(report
            .dictionary_item_added
            .contains_key("root['namespace']"));
    }

    #[test]
    fn test_iterable_items_added_and_removed() {
        let source = json!({"symbols": ["A", "B", "C"]});
        let target = json!({"symbols": ["A", "B"]});

        let report = generate_diff(&source, &target);
        assert_eq!(
            report.iterable_item_removed["root['symbols'][2]"],
            json!("C")
        );

        let reversed = generate_diff(&target, &source);
        assert_eq!(
            reversed.iterable_item_added["root['symbols'][2]"],
            json!("C")
        );
    }
}
