//! HTTP client for the Airtable base.

use serde::Deserialize;
use serde_json::Value;
use sprintboard_core::record::{Fields, Record};

use crate::config::{StoreConfig, Table};
use crate::error::StoreError;

/// Ceiling on the cursor chase for one table fetch. The store serves 100
/// records per page, so this caps a listing at 10k records; anything
/// beyond that is treated as a runaway cursor loop.
const MAX_PAGES: u32 = 100;

/// Client for a single Airtable base.
pub struct AirtableClient {
    client: reqwest::Client,
    config: StoreConfig,
}

/// One page of a table listing.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    records: Vec<Record>,
    /// Opaque cursor for the next page; absent on the last page.
    offset: Option<String>,
}

impl AirtableClient {
    /// Create a client with a fresh connection pool.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    /// Fetch every record of a table across the cursor-based pagination
    /// protocol.
    ///
    /// Pages are requested strictly sequentially (each request needs the
    /// previous response's cursor) and accumulated in page order. A
    /// server-reported error aborts immediately; no partial result is
    /// returned. The [`MAX_PAGES`] ceiling guards against a runaway
    /// cursor loop.
    pub async fn list_all(&self, table: Table) -> Result<Vec<Record>, StoreError> {
        let url = self.config.table_url(table);
        let mut records = Vec::new();
        let mut offset: Option<String> = None;
        let mut pages = 0u32;

        loop {
            if pages >= MAX_PAGES {
                return Err(StoreError::PaginationExceeded {
                    table: self.config.table_id(table).to_string(),
                    max_pages: MAX_PAGES,
                });
            }

            let mut request = self.client.get(&url).bearer_auth(&self.config.token);
            if let Some(cursor) = &offset {
                request = request.query(&[("offset", cursor)]);
            }

            let page: ListResponse = Self::parse_response(request.send().await?).await?;
            records.extend(page.records);
            pages += 1;

            match page.offset {
                Some(cursor) => offset = Some(cursor),
                None => break,
            }
        }

        tracing::debug!(
            table = self.config.table_id(table),
            pages,
            records = records.len(),
            "Fetched table"
        );
        Ok(records)
    }

    /// Fetch a single record by id.
    pub async fn get_record(&self, table: Table, record_id: &str) -> Result<Record, StoreError> {
        let response = self
            .client
            .get(self.config.record_url(table, record_id))
            .bearer_auth(&self.config.token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Insert one record, returning the stored form (with its assigned
    /// id).
    pub async fn create_record(&self, table: Table, fields: Fields) -> Result<Record, StoreError> {
        let response = self
            .client
            .post(self.config.table_url(table))
            .bearer_auth(&self.config.token)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Patch one record. Only the supplied fields are overwritten;
    /// everything else is left untouched server-side.
    pub async fn update_record(
        &self,
        table: Table,
        record_id: &str,
        fields: Fields,
    ) -> Result<Record, StoreError> {
        let response = self
            .client
            .patch(self.config.record_url(table, record_id))
            .bearer_auth(&self.config.token)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Delete one record by id.
    pub async fn delete_record(&self, table: Table, record_id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.config.record_url(table, record_id))
            .bearer_auth(&self.config.token)
            .send()
            .await?;

        Self::check_body(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    /// Read the body, surfacing the store's error envelope
    /// (`{"error": {"message": ...}}`, or a bare error string) verbatim.
    /// The envelope is checked regardless of HTTP status: some store
    /// deployments report errors inside a 200 response.
    async fn check_body(response: reqwest::Response) -> Result<Value, StoreError> {
        let status = response.status();
        let body: Value = response.json().await?;

        if let Some(error) = body.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .or_else(|| error.as_str())
                .unwrap_or("unknown store error")
                .to_string();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body.to_string(),
            });
        }
        Ok(body)
    }

    /// Check the envelope, then parse the body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let body = Self::check_body(response).await?;
        Ok(serde_json::from_value(body)?)
    }
}
