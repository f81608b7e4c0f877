//! Normalization of raw operation results into plain records.
//!
//! Results can arrive wrapped the way the server's contracts name them, e.g.
//! `{"ListProjectsResult": {"ServerProjectInfo": [...]}}`. Both wrapper layers are removed
//! before the payload is handed back.

use serde_json::{Map, Value};

use crate::domain::model::Record;
use crate::utils::error::{MemoQError, Result};

/// 移除 `<Operation>Result` 外層
pub fn unwrap_result(operation: &str, value: Value) -> Value {
    strip_result(operation, value).0
}

/// Converts an operation result into a list of records.
///
/// An empty result (`null` or `{}`) yields no records. A lone object is one record unless it
/// is the holder of the list itself.
pub fn to_records(operation: &str, value: Value) -> Vec<Record> {
    let (value, wrapped) = strip_result(operation, value);
    let value = if wrapped || is_record_holder(&value) {
        unwrap_array_holder(value)
    } else {
        value
    };

    match value {
        Value::Null => Vec::new(),
        Value::Object(obj) if obj.is_empty() => Vec::new(),
        Value::Array(items) => items.into_iter().map(item_to_record).collect(),
        other => vec![item_to_record(other)],
    }
}

/// Converts an operation result into a single string, e.g. the API version.
pub fn to_scalar_string(operation: &str, value: Value) -> Result<String> {
    match unwrap_result(operation, value) {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(MemoQError::InvalidResponse {
            operation: operation.to_string(),
            message: format!("expected a scalar value, got {}", other),
        }),
    }
}

fn strip_result(operation: &str, value: Value) -> (Value, bool) {
    let result_key = format!("{}Result", operation);
    match value {
        Value::Object(mut obj) if obj.len() == 1 && obj.contains_key(&result_key) => {
            (obj.remove(&result_key).unwrap_or(Value::Null), true)
        }
        other => (other, false),
    }
}

/// `{"ServerProjectInfo": [{..}, {..}]}` without the result wrapper
fn is_record_holder(value: &Value) -> bool {
    match value {
        Value::Object(obj) if obj.len() == 1 => obj.values().all(|inner| match inner {
            Value::Array(items) => !items.is_empty() && items.iter().all(Value::is_object),
            _ => false,
        }),
        _ => false,
    }
}

fn unwrap_array_holder(value: Value) -> Value {
    match value {
        Value::Object(obj) if obj.len() == 1 && obj.values().all(Value::is_array) => {
            obj.into_iter()
                .next()
                .map(|(_, inner)| inner)
                .unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn item_to_record(item: Value) -> Record {
    match item {
        Value::Object(obj) => Record::new(obj),
        scalar => {
            let mut data = Map::new();
            data.insert("value".to_string(), scalar);
            Record::new(data)
        }
    }
}
