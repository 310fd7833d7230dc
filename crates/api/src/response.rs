//! Response envelope for API handlers.
//!
//! Every endpoint wraps its payload as `{ "data": ... }` so the dashboard
//! can unwrap responses uniformly. Handlers return
//! `Json(DataResponse { data })` rather than building the envelope with
//! `serde_json::json!` inline.

use serde::Serialize;

/// The `{ "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
