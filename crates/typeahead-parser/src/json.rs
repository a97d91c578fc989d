//! Tagged-record (JSON) payload parsing.

use serde_json::Value;
use typeahead_core::{Record, Result, Schema, TypeaheadError};

/// Parse a JSON payload into records.
///
/// The schema's container selector is walked as a dot-separated path of
/// object keys to locate the repeating collection. A non-array value at the
/// path is treated as a one-element collection. Per element, each field
/// selector is read as an object key; missing or null values become empty
/// strings.
pub(crate) fn parse(raw: &str, schema: &Schema) -> Result<Vec<Record>> {
    let root: Value = serde_json::from_str(raw)
        .map_err(|e| TypeaheadError::ParseError(format!("invalid JSON payload: {e}")))?;

    let collection = match locate(&root, schema) {
        Some(value) => value,
        None => {
            // An empty (but well-formed) response carries no collection at
            // all and means zero results, not a schema mismatch.
            if root.as_object().is_some_and(|o| o.is_empty()) {
                return Ok(Vec::new());
            }
            return Err(TypeaheadError::ParseError(format!(
                "container path `{}` not found in payload",
                schema.container()
            )));
        }
    };

    let elements: Vec<&Value> = match collection {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    let mut records = Vec::with_capacity(elements.len());
    for element in elements {
        let mut fields: Vec<String> = schema
            .fields()
            .iter()
            .map(|name| field_text(element.get(name.as_str())))
            .collect();

        // Nothing beyond the key slot survived the schema: pass the whole
        // element along so the consumer still has something to show.
        if fields.len() <= 1 || fields[1..].iter().all(String::is_empty) {
            fields.truncate(1);
            fields.push(element.to_string());
        }

        records.push(Record::new(fields));
    }
    Ok(records)
}

fn locate<'a>(root: &'a Value, schema: &Schema) -> Option<&'a Value> {
    let mut current = root;
    for segment in schema.container_path() {
        current = current.get(segment)?;
    }
    Some(current)
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
