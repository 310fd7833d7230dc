//! Record-to-domain mappers, one module per entity.
//!
//! Decode is total: every field falls back to a safe empty/zero value, so a
//! record with nothing but an id still maps without error. Encode builds
//! the outbound field-set: full with defaults for create, sparse for
//! patch (only supplied keys are written).

pub mod axe;
pub mod chantier;
pub mod collaborateur;
pub mod participant;
pub mod projet;
pub mod tache;

pub use axe::Axe;
pub use chantier::Chantier;
pub use collaborateur::{Collaborateur, CollaborateurIndex};
pub use participant::Participant;
pub use projet::{NewProjet, Projet, ProjetPatch};
pub use tache::{NewTache, Tache, TachePatch};
