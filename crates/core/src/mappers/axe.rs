//! Axe mapper.

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::scalar;

const DEFAULT_COLOR: &str = "#1565C0";
const DEFAULT_ICON: &str = "🚀";

/// Top-level strategic category grouping chantiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axe {
    /// Human-facing short id (falls back to the record id).
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub ordre: i64,
}

/// Decode a raw axe record. Total: never fails on absent fields.
pub fn decode(record: &Record) -> Axe {
    let f = |name: &str| record.field(name);

    Axe {
        id: scalar::text_or(f("Id"), &record.id),
        name: scalar::text(f("Name")),
        color: scalar::text_or(f("Color"), DEFAULT_COLOR),
        icon: scalar::text_or(f("Icon"), DEFAULT_ICON),
        ordre: scalar::int_or(f("Order"), 0),
    }
}
