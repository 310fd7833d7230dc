//! Status vocabulary translation.
//!
//! The internal vocabulary is the closed set `todo` / `in_progress` /
//! `done`. Depending on schema version, the store holds either the same
//! strings (projets) or a localized three-value vocabulary (tâches:
//! `À faire` / `En cours` / `Terminé`). Both code paths are legitimate;
//! which table is being written decides whether translation applies.

use serde::{Deserialize, Serialize};

/// Localized label for "to do" (also the encode default).
pub const A_FAIRE: &str = "À faire";
/// Localized label for "in progress".
pub const EN_COURS: &str = "En cours";
/// Localized label for "done".
pub const TERMINE: &str = "Terminé";

/// Lifecycle status of a projet or tâche.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statut {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Statut {
    /// Internal wire name, as stored in the simplified schema variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Statut::Todo => "todo",
            Statut::InProgress => "in_progress",
            Statut::Done => "done",
        }
    }

    /// Parse an internal-vocabulary string.
    pub fn parse(value: &str) -> Option<Statut> {
        match value {
            "todo" => Some(Statut::Todo),
            "in_progress" => Some(Statut::InProgress),
            "done" => Some(Statut::Done),
            _ => None,
        }
    }
}

/// Decode a store status value of either vocabulary.
///
/// Localized labels are translated; internal-vocabulary strings pass
/// through; anything empty or unrecognized defaults to [`Statut::Todo`].
pub fn decode(value: &str) -> Statut {
    match value {
        A_FAIRE => Statut::Todo,
        EN_COURS => Statut::InProgress,
        TERMINE => Statut::Done,
        other => Statut::parse(other).unwrap_or_default(),
    }
}

/// Encode a status into the localized vocabulary (tâches tables).
pub fn encode_localise(statut: Statut) -> &'static str {
    match statut {
        Statut::Todo => A_FAIRE,
        Statut::InProgress => EN_COURS,
        Statut::Done => TERMINE,
    }
}
