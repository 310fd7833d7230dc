//! REST client for the Airtable base backing the sprint board.
//!
//! Wraps the Airtable HTTP API (paginated listing, single-record get/
//! create/patch/delete) using [`reqwest`]. All translation between raw
//! records and the domain model lives in `sprintboard-core`; this crate
//! only moves [`sprintboard_core::record::Record`]s over the wire.

pub mod client;
pub mod config;
pub mod error;

pub use client::AirtableClient;
pub use config::{StoreConfig, Table};
pub use error::StoreError;
