//! Chantier mapper.

use serde::{Deserialize, Serialize};

use crate::linked;
use crate::record::Record;
use crate::scalar;

const DEFAULT_COLOR: &str = "#1976D2";

/// A workstream belonging to exactly one axe, containing projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chantier {
    /// Human-facing short id (falls back to the record id).
    pub id: String,
    pub name: String,
    pub axe_id: String,
    pub color: String,
    pub ordre: i64,
}

/// Decode a raw chantier record. Total: never fails on absent fields.
pub fn decode(record: &Record) -> Chantier {
    let f = |name: &str| record.field(name);

    Chantier {
        id: scalar::text_or(f("Id"), &record.id),
        name: scalar::text(f("Name")),
        axe_id: linked::linked_id(f("AxeId")),
        color: scalar::text_or(f("Color"), DEFAULT_COLOR),
        ordre: scalar::int_or(f("Order"), 0),
    }
}
