//! Store configuration loaded from environment variables.

use crate::error::StoreError;

/// Default API endpoint; overridable for tests via `AIRTABLE_API_URL`.
const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// The tables of the sprint-board base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Projets,
    Taches,
    Axes,
    Chantiers,
    Collaborateurs,
    Participants,
}

/// Connection settings for the Airtable base.
///
/// Credentials are required; table identifiers default to the production
/// base layout and can be overridden per table.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Bearer token (`AIRTABLE_TOKEN`).
    pub token: String,
    /// Base identifier (`AIRTABLE_BASE_ID`).
    pub base_id: String,
    /// API endpoint, without trailing slash (`AIRTABLE_API_URL`).
    pub api_url: String,
    pub table_projets: String,
    pub table_taches: String,
    pub table_axes: String,
    pub table_chantiers: String,
    pub table_collaborateurs: String,
    pub table_participants: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                        | Default              |
    /// |--------------------------------|----------------------|
    /// | `AIRTABLE_TOKEN`               | *required*           |
    /// | `AIRTABLE_BASE_ID`             | *required*           |
    /// | `AIRTABLE_API_URL`             | Airtable's v0 API    |
    /// | `AIRTABLE_TABLE_PROJETS`       | `tblcIBoB5nl6PDCfn`  |
    /// | `AIRTABLE_TABLE_TACHES`        | `tblSFNt5dWgiU89g2`  |
    /// | `AIRTABLE_TABLE_AXES`          | `tblBwHP0Ft9pkntyy`  |
    /// | `AIRTABLE_TABLE_CHANTIERS`     | `tblIkKyzPB7u8NWzI`  |
    /// | `AIRTABLE_TABLE_COLLABORATEURS`| `tblVtL5KEJQmxBra3`  |
    /// | `AIRTABLE_TABLE_PARTICIPANTS`  | `Participants`       |
    ///
    /// Missing credentials are a fatal configuration error, reported
    /// before any request is made.
    pub fn from_env() -> Result<Self, StoreError> {
        let token = require("AIRTABLE_TOKEN")?;
        let base_id = require("AIRTABLE_BASE_ID")?;

        Ok(Self {
            token,
            base_id,
            api_url: env_or("AIRTABLE_API_URL", DEFAULT_API_URL),
            table_projets: env_or("AIRTABLE_TABLE_PROJETS", "tblcIBoB5nl6PDCfn"),
            table_taches: env_or("AIRTABLE_TABLE_TACHES", "tblSFNt5dWgiU89g2"),
            table_axes: env_or("AIRTABLE_TABLE_AXES", "tblBwHP0Ft9pkntyy"),
            table_chantiers: env_or("AIRTABLE_TABLE_CHANTIERS", "tblIkKyzPB7u8NWzI"),
            table_collaborateurs: env_or("AIRTABLE_TABLE_COLLABORATEURS", "tblVtL5KEJQmxBra3"),
            table_participants: env_or("AIRTABLE_TABLE_PARTICIPANTS", "Participants"),
        })
    }

    /// Identifier of a table within the base.
    pub fn table_id(&self, table: Table) -> &str {
        match table {
            Table::Projets => &self.table_projets,
            Table::Taches => &self.table_taches,
            Table::Axes => &self.table_axes,
            Table::Chantiers => &self.table_chantiers,
            Table::Collaborateurs => &self.table_collaborateurs,
            Table::Participants => &self.table_participants,
        }
    }

    /// Collection URL for a table.
    pub fn table_url(&self, table: Table) -> String {
        format!("{}/{}/{}", self.api_url, self.base_id, self.table_id(table))
    }

    /// URL of one record within a table.
    pub fn record_url(&self, table: Table, record_id: &str) -> String {
        format!("{}/{}", self.table_url(table), record_id)
    }
}

fn require(name: &'static str) -> Result<String, StoreError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(StoreError::Config(name)),
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
