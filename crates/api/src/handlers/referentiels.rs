//! Handlers for the read-only reference tables.
//!
//! These tables are curated by hand in the store; the API never writes to
//! them. Listings are sorted by their `Order` column so the UI can render
//! them without re-sorting.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sprintboard_airtable::Table;
use sprintboard_core::mappers::{axe, chantier, collaborateur, participant};
use sprintboard_core::mappers::{Axe, Chantier, CollaborateurIndex, Participant};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/axes
pub async fn list_axes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_all(Table::Axes).await?;
    let mut axes: Vec<Axe> = records.iter().map(axe::decode).collect();
    axes.sort_by_key(|a| a.ordre);

    Ok(Json(DataResponse { data: axes }))
}

/// GET /api/v1/chantiers
pub async fn list_chantiers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_all(Table::Chantiers).await?;
    let mut chantiers: Vec<Chantier> = records.iter().map(chantier::decode).collect();
    chantiers.sort_by_key(|c| c.ordre);

    Ok(Json(DataResponse { data: chantiers }))
}

/// GET /api/v1/collaborateurs
///
/// The index sorts by `Order` and resolves both short ids and record ids;
/// only the sorted listing is exposed here.
pub async fn list_collaborateurs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_all(Table::Collaborateurs).await?;
    let index = CollaborateurIndex::new(records.iter().map(collaborateur::decode).collect());

    Ok(Json(DataResponse {
        data: index.all().to_vec(),
    }))
}

/// GET /api/v1/participants
///
/// Legacy task/collaborator join table, decode-only.
pub async fn list_participants(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.store.list_all(Table::Participants).await?;
    let participants: Vec<Participant> = records.iter().map(participant::decode).collect();

    Ok(Json(DataResponse { data: participants }))
}
