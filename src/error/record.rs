//! Record-level errors

use std::path::Path;

use serde_json::Value;

use super::UnionError;

/// Creates a JSON parse error for a line of an input file
pub fn parse_failed(path: &Path, line: usize, reason: impl ToString) -> UnionError {
    UnionError::ParseFailed {
        path: path.display().to_string(),
        line,
        reason: reason.to_string(),
    }
}

/// Creates an error for a line that parsed as JSON but is not an object
pub fn not_an_object(path: &Path, line: usize) -> UnionError {
    UnionError::NotAnObject {
        path: path.display().to_string(),
        line,
    }
}

/// Creates an error for a key field holding something other than text
pub fn invalid_key(path: &Path, line: usize, field: &str, value: &Value) -> UnionError {
    UnionError::InvalidKey {
        path: path.display().to_string(),
        line,
        field: field.to_string(),
        found: json_type_name(value).to_string(),
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
