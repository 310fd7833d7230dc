//! Linked-record reference resolution and encoding.
//!
//! Depending on schema version, a foreign-key field may arrive as a bare
//! string (legacy free-text key), a single-element array of store record
//! ids (native linked record), or be absent entirely. Outbound writes must
//! mirror the distinction: only true store record ids may be sent as
//! arrays, or the store rejects the write.

use serde_json::Value;

/// Prefix of every store-assigned record identifier.
const RECORD_ID_PREFIX: &str = "rec";

/// Extract a single identifier from a reference field.
///
/// Returns the first array element, the bare string, or `""` when absent.
pub fn linked_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .first()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

/// Whether `id` is a store-native record id (non-empty, `rec` prefix).
pub fn is_record_id(id: &str) -> bool {
    !id.is_empty() && id.starts_with(RECORD_ID_PREFIX)
}

/// Encode an identifier for an outbound write to a linked-record field.
///
/// - empty → empty array (clears the relation; an empty string is rejected)
/// - store record id → single-element array
/// - legacy free-text key → scalar string
pub fn encode_link(id: &str) -> Value {
    if id.is_empty() {
        Value::Array(Vec::new())
    } else if is_record_id(id) {
        Value::Array(vec![Value::String(id.to_string())])
    } else {
        Value::String(id.to_string())
    }
}
