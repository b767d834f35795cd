//! Normalisation of response bodies at the fetch boundary.
//!
//! List endpoints answer either `[...]` or `{"data": [...]}`; detail endpoints
//! answer a record, `{"data": record}`, or a one-element array. Whatever does
//! not fit degrades to an empty list or "not found" instead of an error.

use serde_json::Value;

use crate::models::Record;

/// Records in a list payload. Shapes other than an array or `{data: array}` yield none.
pub fn normalize_list(value: &Value) -> Vec<Record> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items.iter().filter_map(Record::from_value).collect()
}

/// The single record in a detail payload, or `None` when there is nothing usable.
pub fn normalize_detail(value: &Value) -> Option<Record> {
    match value {
        Value::Null => None,
        Value::Array(items) => items.first().and_then(normalize_detail),
        Value::Object(map) => match map.get("data") {
            Some(inner) => normalize_detail(inner),
            None => Record::from_value(value).filter(|record| !record.is_empty()),
        },
        Value::String(_) => Record::from_value(value).filter(|record| !record.is_empty()),
        _ => None,
    }
}

/// Unwrap a single-object payload that may sit under `data` or in an array.
pub fn unwrap_object(value: &Value) -> Value {
    match value {
        Value::Array(items) => items.first().map(unwrap_object).unwrap_or(Value::Null),
        Value::Object(map) => match map.get("data") {
            Some(inner @ (Value::Object(_) | Value::Array(_))) => unwrap_object(inner),
            _ => value.clone(),
        },
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_shapes() {
        let wrapped = json!({"data": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]});
        assert_eq!(normalize_list(&wrapped).len(), 2);

        let bare = json!([{"id": 1, "name": "A"}]);
        assert_eq!(normalize_list(&bare)[0].name, "A");

        let strings = json!(["Acme", "Globex"]);
        let records = normalize_list(&strings);
        assert_eq!(records[1].name, "Globex");

        let mixed = json!(["Acme", {"id": 9, "name": "Initech"}, 4, null]);
        assert_eq!(normalize_list(&mixed).len(), 2);
    }

    #[test]
    fn test_list_unexpected_shape_is_empty() {
        assert!(normalize_list(&json!({"data": "nope"})).is_empty());
        assert!(normalize_list(&json!({"items": []})).is_empty());
        assert!(normalize_list(&json!("text")).is_empty());
        assert!(normalize_list(&Value::Null).is_empty());
    }

    #[test]
    fn test_detail_shapes() {
        let direct = json!({"id": 4, "name": "Partner Co"});
        assert_eq!(normalize_detail(&direct).unwrap().name, "Partner Co");

        let wrapped = json!({"data": {"id": 4, "name": "Partner Co"}});
        assert_eq!(normalize_detail(&wrapped).unwrap().id.as_deref(), Some("4"));

        let listed = json!([{"id": 4, "name": "Partner Co"}]);
        assert!(normalize_detail(&listed).is_some());
    }

    #[test]
    fn test_detail_not_found_shapes() {
        assert!(normalize_detail(&Value::Null).is_none());
        assert!(normalize_detail(&json!({})).is_none());
        assert!(normalize_detail(&json!({"data": null})).is_none());
        assert!(normalize_detail(&json!([])).is_none());
    }

    #[test]
    fn test_unwrap_object() {
        let inner = json!({"our_story": "Founded in 2010"});
        assert_eq!(unwrap_object(&json!({"data": inner.clone()})), inner);
        assert_eq!(unwrap_object(&json!([inner.clone()])), inner);
        assert_eq!(unwrap_object(&inner), inner);
        assert_eq!(unwrap_object(&json!("x")), Value::Null);
    }
}
