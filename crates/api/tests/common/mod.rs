#![allow(dead_code)]

//! Shared helpers for API integration tests.
//!
//! Tests run the real application router (full middleware stack, same
//! construction as `main.rs`) against an in-memory stub of the record
//! store, spawned on an ephemeral port. Requests are driven through
//! `tower::ServiceExt::oneshot` without binding the API itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use sprintboard_airtable::{AirtableClient, StoreConfig};
use sprintboard_api::config::ServerConfig;
use sprintboard_api::routes;
use sprintboard_api::state::AppState;

// ---------------------------------------------------------------------------
// In-memory stub store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct StoredRecord {
    id: String,
    fields: Map<String, Value>,
}

#[derive(Debug, Default)]
struct Inner {
    tables: HashMap<String, Vec<StoredRecord>>,
    next_id: u64,
}

/// Handle on the stub store's state, for seeding and inspection.
#[derive(Debug, Clone, Default)]
pub struct StubStore {
    inner: Arc<Mutex<Inner>>,
}

impl StubStore {
    /// Insert a record directly and return its assigned id.
    pub fn seed(&self, table: &str, fields: Value) -> String {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = format!("rec{:07}", inner.next_id);
        let fields = fields.as_object().cloned().unwrap_or_default();
        inner
            .tables
            .entry(table.to_string())
            .or_default()
            .push(StoredRecord {
                id: id.clone(),
                fields,
            });
        id
    }

    /// Snapshot of one record's fields, if it exists.
    pub fn fields_of(&self, table: &str, id: &str) -> Option<Value> {
        let inner = self.inner.lock().unwrap();
        inner
            .tables
            .get(table)?
            .iter()
            .find(|r| r.id == id)
            .map(|r| Value::Object(r.fields.clone()))
    }

    /// Number of records currently stored in a table.
    pub fn count(&self, table: &str) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.tables.get(table).map_or(0, Vec::len)
    }
}

fn record_json(record: &StoredRecord) -> Value {
    json!({ "id": record.id, "fields": record.fields })
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": { "type": "MODEL_ID_NOT_FOUND", "message": "Record not found" }
        })),
    )
        .into_response()
}

async fn stub_list(
    State(store): State<StubStore>,
    Path((_base, table)): Path<(String, String)>,
    Query(_params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let inner = store.inner.lock().unwrap();
    let records: Vec<Value> = inner
        .tables
        .get(&table)
        .map(|rs| rs.iter().map(record_json).collect())
        .unwrap_or_default();

    Json(json!({ "records": records }))
}

async fn stub_create(
    State(store): State<StubStore>,
    Path((_base, table)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let fields = body
        .get("fields")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    let id = store.seed(&table, Value::Object(fields));

    let fields = store.fields_of(&table, &id).unwrap_or(Value::Null);
    Json(json!({ "id": id, "fields": fields })).into_response()
}

async fn stub_get(
    State(store): State<StubStore>,
    Path((_base, table, id)): Path<(String, String, String)>,
) -> Response {
    let inner = store.inner.lock().unwrap();
    match inner
        .tables
        .get(&table)
        .and_then(|rs| rs.iter().find(|r| r.id == id))
    {
        Some(record) => Json(record_json(record)).into_response(),
        None => not_found(),
    }
}

async fn stub_patch(
    State(store): State<StubStore>,
    Path((_base, table, id)): Path<(String, String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let patch = body
        .get("fields")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let mut inner = store.inner.lock().unwrap();
    match inner
        .tables
        .get_mut(&table)
        .and_then(|rs| rs.iter_mut().find(|r| r.id == id))
    {
        Some(record) => {
            for (key, value) in patch {
                record.fields.insert(key, value);
            }
            Json(record_json(record)).into_response()
        }
        None => not_found(),
    }
}

async fn stub_delete(
    State(store): State<StubStore>,
    Path((_base, table, id)): Path<(String, String, String)>,
) -> Response {
    let mut inner = store.inner.lock().unwrap();
    let Some(records) = inner.tables.get_mut(&table) else {
        return not_found();
    };
    let before = records.len();
    records.retain(|r| r.id != id);
    if records.len() == before {
        return not_found();
    }

    Json(json!({ "deleted": true, "id": id })).into_response()
}

/// Spawn the stub store on an ephemeral port.
///
/// Returns its base URL (to use as the store's API endpoint) and a handle
/// on its state.
pub async fn spawn_stub_store() -> (String, StubStore) {
    let store = StubStore::default();

    let app = Router::new()
        .route("/{base}/{table}", get(stub_list).post(stub_create))
        .route(
            "/{base}/{table}/{id}",
            get(stub_get).patch(stub_patch).delete(stub_delete),
        )
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub store");
    let addr = listener.local_addr().expect("stub store addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub store serve");
    });

    (format!("http://{addr}"), store)
}

// ---------------------------------------------------------------------------
// Application under test
// ---------------------------------------------------------------------------

/// Table ids used by the test store configuration.
pub const TABLE_PROJETS: &str = "tblProjets";
pub const TABLE_TACHES: &str = "tblTaches";
pub const TABLE_AXES: &str = "tblAxes";
pub const TABLE_CHANTIERS: &str = "tblChantiers";
pub const TABLE_COLLABORATEURS: &str = "tblCollaborateurs";
pub const TABLE_PARTICIPANTS: &str = "tblParticipants";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        planning_year: 2026,
    }
}

/// Build the full application router with all middleware layers, pointed
/// at the given stub store URL.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(store_url: &str) -> Router {
    let store_config = StoreConfig {
        token: "test-token".to_string(),
        base_id: "appTest".to_string(),
        api_url: store_url.to_string(),
        table_projets: TABLE_PROJETS.to_string(),
        table_taches: TABLE_TACHES.to_string(),
        table_axes: TABLE_AXES.to_string(),
        table_chantiers: TABLE_CHANTIERS.to_string(),
        table_collaborateurs: TABLE_COLLABORATEURS.to_string(),
        table_participants: TABLE_PARTICIPANTS.to_string(),
    };

    let state = AppState::new(AirtableClient::new(store_config), test_config());

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get_req(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request"),
    )
    .await
    .expect("send request")
}

async fn with_json_body(app: Router, method: Method, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request"),
    )
    .await
    .expect("send request")
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    with_json_body(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response {
    with_json_body(app, Method::PATCH, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    with_json_body(app, Method::PUT, uri, body).await
}

pub async fn delete_req(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .expect("build request"),
    )
    .await
    .expect("send request")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> Value {
    use http_body_util::BodyExt;

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
