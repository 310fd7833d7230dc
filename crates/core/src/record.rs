//! Raw record shape exchanged with the external store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field-set of a raw record (field name → store-native value).
pub type Fields = serde_json::Map<String, Value>;

/// One raw record as returned by the store's list/get/create/update
/// responses. Empty fields are simply absent from `fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: Fields,
}

impl Record {
    /// Build a record from a field-set (test fixtures, stub responses).
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
