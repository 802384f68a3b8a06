//! Conversion between stored BSON documents and the JSON bodies served over HTTP.
//!
//! Object ids are rendered as 24-character hex strings and BSON datetimes as RFC 3339
//! strings. Whole-valued doubles are rendered as integers.

use crate::error::{MenuError, MenuResult};
use mongodb::bson::{self, Bson, Document};
use serde_json::{json, Value};

pub fn document_to_json(document: &Document) -> Value {
    Value::Object(
        document
            .iter()
            .map(|(key, value)| (key.clone(), bson_to_json(value)))
            .collect(),
    )
}

pub fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(at) => match at.try_to_rfc3339_string() {
            Ok(rendered) => Value::String(rendered),
            Err(_) => json!(at.timestamp_millis()),
        },
        Bson::Document(document) => document_to_json(document),
        Bson::Array(values) => Value::Array(values.iter().map(bson_to_json).collect()),
        Bson::Double(v) => number_to_json(*v),
        Bson::Int32(v) => json!(v),
        Bson::Int64(v) => json!(v),
        other => other.clone().into_relaxed_extjson(),
    }
}

pub fn number_to_json(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        json!(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Converts an arbitrary JSON value into BSON.
pub fn json_to_bson(value: &Value) -> MenuResult<Bson> {
    bson::to_bson(value).map_err(|e| MenuError::InvalidDocument(e.to_string()))
}

/// Converts a JSON object into a document. Any other JSON value is rejected.
pub fn json_to_document(value: &Value) -> MenuResult<Document> {
    match json_to_bson(value)? {
        Bson::Document(document) => Ok(document),
        _ => Err(MenuError::InvalidDocument("expected a JSON object".into())),
    }
}
