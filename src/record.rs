//! Records and their identity keys
//!
//! A record is an opaque JSON object. Only the key field is ever inspected;
//! everything else is carried through untouched, in its original field order.

use serde_json::{Map, Value};

/// Field used as the identity key when none is configured
pub const DEFAULT_KEY_FIELD: &str = "name";

/// One JSON object read from an input dataset
pub type Record = Map<String, Value>;

/// What a record holds in its key field
#[derive(Debug, PartialEq, Eq)]
pub enum KeyField<'a> {
    /// Usable text value
    Text(&'a str),
    /// Field absent or explicitly null
    Missing,
    /// Field present with a non-text value
    Invalid(&'a Value),
}

/// Inspect the key field of a record
pub fn key_field<'a>(record: &'a Record, field: &str) -> KeyField<'a> {
    match record.get(field) {
        None | Some(Value::Null) => KeyField::Missing,
        Some(Value::String(text)) => KeyField::Text(text),
        Some(other) => KeyField::Invalid(other),
    }
}

/// Normalize a key value for case-insensitive matching.
///
/// Both datasets go through this same folding rule.
pub fn normalize_key(value: &str) -> String {
    value.to_lowercase()
}

/// Display value of a record's key field, if it is text
pub fn display_key<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    match key_field(record, field) {
        KeyField::Text(text) => Some(text),
        _ => None,
    }
}
