//! Handlers for the `/taches` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sprintboard_airtable::Table;
use sprintboard_core::mappers::tache::{self, NewTache, Tache, TachePatch};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TacheListQuery {
    /// Restrict the listing to tasks of one project (record id).
    pub projet: Option<String>,
}

/// GET /api/v1/taches
///
/// List tasks, optionally filtered by owning project. The store cannot
/// filter on linked fields server-side, so the filter is applied after
/// the full fetch.
pub async fn list_taches(
    State(state): State<AppState>,
    Query(query): Query<TacheListQuery>,
) -> AppResult<impl IntoResponse> {
    let records = state.store.list_all(Table::Taches).await?;
    let mut taches: Vec<Tache> = records.iter().map(tache::decode).collect();

    if let Some(projet_id) = query.projet {
        taches.retain(|t| t.projet_id == projet_id);
    }

    Ok(Json(DataResponse { data: taches }))
}

/// POST /api/v1/taches
///
/// Create a task. Returns 201 with the stored form.
pub async fn create_tache(
    State(state): State<AppState>,
    Json(input): Json<NewTache>,
) -> AppResult<impl IntoResponse> {
    tache::validate_new(&input)?;

    let fields = tache::encode_new(&input);
    let record = state.store.create_record(Table::Taches, fields).await?;
    let created = tache::decode(&record);

    tracing::info!(id = %created.id, name = %created.name, "Tâche created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PATCH /api/v1/taches/{id}
///
/// Sparse update. Drag-and-drop sprint reassignment sends only `sprint`;
/// an explicit null on `dateDebut` or `dateFin` clears the stored date.
pub async fn update_tache(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TachePatch>,
) -> AppResult<impl IntoResponse> {
    tache::validate_patch(&patch)?;

    let fields = tache::encode_patch(&patch);
    let record = state.store.update_record(Table::Taches, &id, fields).await?;

    Ok(Json(DataResponse {
        data: tache::decode(&record),
    }))
}

/// DELETE /api/v1/taches/{id}
///
/// Delete a task. Returns 204 on success.
pub async fn delete_tache(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_record(Table::Taches, &id).await?;

    tracing::info!(%id, "Tâche deleted");

    Ok(StatusCode::NO_CONTENT)
}
