use serde_json::Value;

use crate::errors::ScanError;

/// One scan request as read from stdin. Missing keys default to `""`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    pub resume_text: String,
    pub job_desc: String,
}

impl ScanRequest {
    /// Parses the raw stdin payload.
    ///
    /// The payload must be a JSON object; duplicate keys keep the last value.
    pub fn parse(raw: &str) -> Result<Self, ScanError> {
        if raw.is_empty() {
            return Err(ScanError::EmptyInput);
        }

        let value: Value = serde_json::from_str(raw)?;
        let object = match value {
            Value::Object(map) => map,
            other => return Err(ScanError::NotAnObject(json_type_name(&other))),
        };

        Ok(ScanRequest {
            resume_text: string_field(&object, "resumeText")?,
            job_desc: string_field(&object, "jobDesc")?,
        })
    }
}

fn string_field(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, ScanError> {
    match object.get(field) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ScanError::InvalidField { field }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
