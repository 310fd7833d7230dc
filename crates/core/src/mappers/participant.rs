//! Participant mapper (legacy join entity).
//!
//! One evolution of the schema linked tasks to collaborators through a
//! dedicated join table with hours and a date range; later versions moved
//! to a direct assignee field on the task. Decoding stays supported so
//! historical data can still be reconciled; there is no write path.

use serde::{Deserialize, Serialize};

use crate::linked;
use crate::record::Record;
use crate::scalar;

/// Legacy task↔collaborator assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub tache_id: String,
    pub collaborateur_id: String,
    pub heures: f64,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
}

/// Decode a raw participant record. Total: never fails on absent fields.
pub fn decode(record: &Record) -> Participant {
    let f = |name: &str| record.field(name);

    Participant {
        id: record.id.clone(),
        tache_id: linked::linked_id(f("Tache")),
        collaborateur_id: linked::linked_id(f("Collaborateur")),
        heures: scalar::number_or(f("Heures"), 0.0),
        date_debut: scalar::opt_text(f("DateDebut")),
        date_fin: scalar::opt_text(f("DateFin")),
    }
}
