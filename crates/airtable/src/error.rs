use thiserror::Error;

/// Errors from the Airtable REST layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required environment variable is missing or empty. Fatal; no
    /// request is attempted.
    #[error("missing configuration: {0}")]
    Config(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store reported an error; its message is surfaced verbatim.
    #[error("Airtable error ({status}): {message}")]
    Api {
        /// HTTP status code (0 when the error came in a 200 envelope).
        status: u16,
        /// The store's own error message.
        message: String,
    },

    /// The response body did not match the expected record shape.
    #[error("invalid response from store: {0}")]
    Decode(#[from] serde_json::Error),

    /// The cursor chase exceeded the page ceiling for one table fetch.
    #[error("pagination exceeded {max_pages} pages for table {table}")]
    PaginationExceeded { table: String, max_pages: u32 },
}
