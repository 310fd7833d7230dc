//! Handlers for the `/projets` resource.
//!
//! Create and update payloads are validated before any store round trip;
//! a rejected payload never reaches the store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sprintboard_airtable::Table;
use sprintboard_core::mappers::projet::{self, NewProjet, Projet, ProjetPatch};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /api/v1/projets
///
/// List every project. Decoding is total: records with absent or malformed
/// fields come back with defaults rather than failing the whole listing.
pub async fn list_projets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_all(Table::Projets).await?;
    let projets: Vec<Projet> = records.iter().map(projet::decode).collect();

    Ok(Json(DataResponse { data: projets }))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// POST /api/v1/projets
///
/// Create a project. Returns 201 with the stored form, re-decoded so the
/// caller sees exactly what subsequent listings will show.
pub async fn create_projet(
    State(state): State<AppState>,
    Json(input): Json<NewProjet>,
) -> AppResult<impl IntoResponse> {
    projet::validate_new(&input, &state.calendar)?;

    let fields = projet::encode_new(&input);
    let record = state.store.create_record(Table::Projets, fields).await?;
    let created = projet::decode(&record);

    tracing::info!(id = %created.id, name = %created.name, "Projet created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// PATCH /api/v1/projets/{id}
///
/// Sparse update: only the fields present in the payload are written, the
/// rest of the record is left untouched. An explicit `"dateComite": null`
/// clears the stored date.
pub async fn update_projet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProjetPatch>,
) -> AppResult<impl IntoResponse> {
    projet::validate_patch(&patch, &state.calendar)?;

    let fields = projet::encode_patch(&patch);
    let record = state.store.update_record(Table::Projets, &id, fields).await?;

    Ok(Json(DataResponse {
        data: projet::decode(&record),
    }))
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// DELETE /api/v1/projets/{id}
///
/// Delete a project. Returns 204 on success.
pub async fn delete_projet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_record(Table::Projets, &id).await?;

    tracing::info!(%id, "Projet deleted");

    Ok(StatusCode::NO_CONTENT)
}
