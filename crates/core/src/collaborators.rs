//! Collaborator-set codec.
//!
//! The `CollaborateursParRole` field has carried two encodings over time: a
//! flat JSON array of collaborator ids, and an older object grouping ids
//! under role keys. Decoding accepts both (plus already-parsed values);
//! encoding always writes the flat array, so round-tripping the grouped
//! form is lossy by design.

use serde_json::Value;

/// Decode the collaborator set attached to a project.
///
/// Accepts an absent field, a JSON string, or an already-parsed value. A
/// grouped-by-role object contributes every value across all keys
/// (array-valued entries are flattened, string-valued entries contribute
/// themselves), deduplicated keeping first occurrence. Any parse failure
/// yields an empty list; a malformed record must never block a read.
pub fn decode_set(value: Option<&Value>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };

    let parsed: Value = match value {
        Value::String(s) => match serde_json::from_str(s) {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        },
        other => other.clone(),
    };

    match parsed {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Value::Object(map) => {
            let mut ids: Vec<String> = Vec::new();
            for entry in map.values() {
                match entry {
                    Value::Array(items) => {
                        for item in items {
                            if let Some(id) = item.as_str() {
                                push_unique(&mut ids, id);
                            }
                        }
                    }
                    Value::String(id) => push_unique(&mut ids, id),
                    _ => {}
                }
            }
            ids
        }
        _ => Vec::new(),
    }
}

/// Encode a collaborator set as the flat JSON array string stored in the
/// `CollaborateursParRole` field.
pub fn encode_set(ids: &[String]) -> String {
    Value::from(ids.to_vec()).to_string()
}

fn push_unique(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}
