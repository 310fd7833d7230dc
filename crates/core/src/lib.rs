//! Sprintboard domain logic.
//!
//! Everything in this crate is pure and synchronous: the coercion and codec
//! layers that translate the external tabular store's historically-evolving
//! field encodings into a stable domain model, and back. No I/O happens
//! here; the `sprintboard-airtable` crate talks to the store and the api
//! crate composes the two.

pub mod calendar;
pub mod collaborators;
pub mod documents;
pub mod error;
pub mod linked;
pub mod mappers;
pub mod patch;
pub mod record;
pub mod scalar;
pub mod sprint;
pub mod status;
