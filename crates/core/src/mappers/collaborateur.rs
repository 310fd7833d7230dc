//! Collaborateur mapper and dual-key lookup index.
//!
//! Collaborators live in two identifier spaces: a human-facing short `id`
//! (the `Id` field, used in display/URL contexts and legacy foreign keys)
//! and the store's opaque record id (what native linked-record fields
//! reference). Both resolve to the same entity through one index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::linked;
use crate::record::Record;
use crate::scalar;

/// Default badge color, as seeded in the store.
const DEFAULT_COLOR: &str = "#7B1FA2";

/// A person who can carry roles and task assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborateur {
    /// Human-facing short id (falls back to the record id).
    pub id: String,
    /// Store-assigned record id.
    pub record_id: String,
    pub name: String,
    pub nom_complet: String,
    pub role: String,
    pub service: String,
    pub color: String,
    pub email: String,
    pub photo_url: String,
    pub est_directeur: bool,
    pub est_comite_strategique_ia: bool,
    pub est_commission_conformite: bool,
    pub peut_etre_meneur: bool,
    /// Resolved "reports-to" director, empty when unset.
    pub directeur_id: String,
    pub ordre: i64,
}

/// Decode a raw collaborateur record. Total: never fails on absent fields.
pub fn decode(record: &Record) -> Collaborateur {
    let f = |name: &str| record.field(name);

    let name = scalar::text(f("Name"));
    Collaborateur {
        id: scalar::text_or(f("Id"), &record.id),
        record_id: record.id.clone(),
        nom_complet: scalar::text_or(f("NomComplet"), &name),
        name,
        role: scalar::text(f("Role")),
        service: scalar::text(f("Service")),
        color: scalar::text_or(f("Color"), DEFAULT_COLOR),
        email: scalar::text(f("Email")),
        photo_url: photo_url(f("Photo")),
        est_directeur: scalar::coerce_bool(f("EstDirecteur")),
        est_comite_strategique_ia: scalar::coerce_bool(f("EstComiteStrategiqueIA")),
        est_commission_conformite: scalar::coerce_bool(f("EstCommissionConformite")),
        peut_etre_meneur: scalar::coerce_bool_default_true(f("PeutEtreMeneur")),
        directeur_id: linked::linked_id(f("Directeur")),
        ordre: scalar::int_or(f("Order"), 0),
    }
}

/// Url of the first photo attachment, preferring the `large` thumbnail
/// variant over the full-size url. Empty when no photo.
fn photo_url(value: Option<&Value>) -> String {
    let Some(Value::Array(items)) = value else {
        return String::new();
    };
    let Some(first) = items.first().and_then(Value::as_object) else {
        return String::new();
    };
    first
        .get("thumbnails")
        .and_then(|t| t.get("large"))
        .and_then(|l| l.get("url"))
        .or_else(|| first.get("url"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// One in-memory table of collaborators, indexed by both identifier
/// spaces.
#[derive(Debug, Default)]
pub struct CollaborateurIndex {
    list: Vec<Collaborateur>,
    by_id: HashMap<String, usize>,
    by_record_id: HashMap<String, usize>,
}

impl CollaborateurIndex {
    pub fn new(mut list: Vec<Collaborateur>) -> Self {
        list.sort_by_key(|c| c.ordre);
        let mut by_id = HashMap::with_capacity(list.len());
        let mut by_record_id = HashMap::with_capacity(list.len());
        for (pos, collab) in list.iter().enumerate() {
            by_id.insert(collab.id.clone(), pos);
            by_record_id.insert(collab.record_id.clone(), pos);
        }
        Self {
            list,
            by_id,
            by_record_id,
        }
    }

    /// Resolve by either the short id or the store record id.
    pub fn get(&self, key: &str) -> Option<&Collaborateur> {
        self.by_id
            .get(key)
            .or_else(|| self.by_record_id.get(key))
            .map(|&pos| &self.list[pos])
    }

    /// All collaborators, ordered by their `ordre` key.
    pub fn all(&self) -> &[Collaborateur] {
        &self.list
    }
}
