//! Document-list codec.
//!
//! Link documents (drive/notion/link descriptors) live as one JSON-encoded
//! array inside a long-text field on the owning project. Store-native
//! attachments, when present, are mapped into the same shape but flagged as
//! files; files are read-only from this layer, only link documents have an
//! add/remove path. Mutations are read-modify-write over the whole list and
//! are not atomic across concurrent editors (last writer wins).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a document descriptor points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Drive,
    Notion,
    File,
    #[default]
    Link,
}

/// One document attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: DocKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default)]
    pub is_file: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Decode the JSON-encoded link-document list.
///
/// Accepts the serialized string or an already-parsed array; any parse
/// failure or absence yields an empty list.
pub fn decode_links(value: Option<&Value>) -> Vec<Document> {
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
    serde_json::from_value(parsed).unwrap_or_default()
}

/// Map a store-native attachment field into read-only file documents.
///
/// Attachment shape: `[{id, url, filename, size, type}]`. Unparseable
/// entries are skipped, never fatal.
pub fn decode_attachments(value: Option<&Value>) -> Vec<Document> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let url = obj.get("url")?.as_str()?.to_string();
            Some(Document {
                id: obj
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                name: obj
                    .get("filename")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                url,
                kind: DocKind::File,
                size: obj.get("size").and_then(Value::as_u64),
                is_file: true,
                created_at: None,
            })
        })
        .collect()
}

/// Encode the link documents back to the stored JSON string. Files are
/// excluded; they live in the attachment field.
pub fn encode_links(documents: &[Document]) -> String {
    let links: Vec<&Document> = documents.iter().filter(|d| !d.is_file).collect();
    serde_json::to_string(&links).unwrap_or_else(|_| "[]".to_string())
}

/// Append a new link document with a generated time-based id.
pub fn add(documents: &mut Vec<Document>, name: String, url: String, kind: DocKind) -> String {
    let id = format!("doc{}", Utc::now().timestamp_millis());
    documents.push(Document {
        id: id.clone(),
        name,
        url,
        kind,
        size: None,
        is_file: false,
        created_at: Some(Utc::now().to_rfc3339()),
    });
    id
}

/// Remove the link document with the given id, preserving the order of the
/// remaining entries. Returns whether anything was removed.
pub fn remove(documents: &mut Vec<Document>, id: &str) -> bool {
    let before = documents.len();
    documents.retain(|d| d.is_file || d.id != id);
    documents.len() != before
}
