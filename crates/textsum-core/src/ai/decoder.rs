//! Extraction of the summary text from the inference API's response body.
//!
//! The hosted summarization task answers with `[{"summary_text": "..."}]`, but the
//! shape is not versioned and other tasks or error paths return something else.
//! Decoding goes through `serde_json::Value` so every input maps to either a
//! summary or a classified error.

use serde_json::{Map, Value};

use crate::{Error, Result};

pub const SUMMARY_FIELD: &str = "summary_text";

/// What element 0 holds under [`SUMMARY_FIELD`]
#[derive(Debug, PartialEq)]
enum SummaryField<'a> {
    Text(&'a str),
    Other(&'a Value),
    Absent,
}

impl<'a> SummaryField<'a> {
    fn lookup(record: &'a Value) -> Self {
        match record.get(SUMMARY_FIELD) {
            Some(Value::String(text)) => SummaryField::Text(text),
            Some(other) => SummaryField::Other(other),
            None => SummaryField::Absent,
        }
    }
}

/// Decode a raw response body into the summary text, returned verbatim
pub fn decode_summary(raw: &[u8]) -> Result<String> {
    let payload: Value = serde_json::from_slice(raw)
        .map_err(|e| Error::MalformedResponse(e.to_string()))?;

    let records = match payload {
        Value::Array(records) => records,
        Value::Object(object) => return Err(unexpected_object(&object)),
        other => {
            return Err(Error::MalformedResponse(format!(
                "expected an array of records, got {}",
                type_name(&other)
            )))
        }
    };

    let first = records.first().ok_or(Error::EmptyResult)?;

    match SummaryField::lookup(first) {
        SummaryField::Text(text) => Ok(text.to_string()),
        SummaryField::Other(value) => {
            tracing::debug!(found = type_name(value), "summary_text is not a string");
            Err(Error::MissingSummaryField)
        }
        SummaryField::Absent => Err(Error::MissingSummaryField),
    }
}

/// The API reports failures as `{"error": "..."}`; surface that message when present
fn unexpected_object(object: &Map<String, Value>) -> Error {
    match object.get("error").and_then(Value::as_str) {
        Some(message) => Error::MalformedResponse(format!("API error: {message}")),
        None => Error::MalformedResponse("expected an array of records, got object".to_string()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
