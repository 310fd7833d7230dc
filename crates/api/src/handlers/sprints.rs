//! Handlers for a project's sprint list.
//!
//! Sprints are not records of their own: the list is derived from the
//! sprint labels referenced in the project's free-text directive field,
//! gap-filled from 1, with the Backlog pseudo-sprint appended. Renames and
//! appends are read-modify-writes over that field.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sprintboard_airtable::Table;
use sprintboard_core::error::CoreError;
use sprintboard_core::record::Fields;
use sprintboard_core::scalar;
use sprintboard_core::sprint::{self, SprintDirective};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One sprint of a project's derived list.
#[derive(Debug, Serialize)]
pub struct SprintEntry {
    /// Canonical label (`Sprint N` or `Backlog`).
    pub label: String,
    /// Label with the custom name appended when one is set.
    pub display: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameSprint {
    pub name: String,
}

fn entries(directive: &str) -> Vec<SprintEntry> {
    sprint::sprints_for_directive(directive)
        .into_iter()
        .map(|label| SprintEntry {
            display: sprint::display_name(&label, directive),
            label,
        })
        .collect()
}

/// GET /api/v1/projets/{id}/sprints
///
/// The project's derived sprint list with display names.
pub async fn list_sprints(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = state.store.get_record(Table::Projets, &id).await?;
    let directive = scalar::text(record.field("SprintNames"));

    Ok(Json(DataResponse {
        data: entries(&directive),
    }))
}

/// POST /api/v1/projets/{id}/sprints
///
/// Append the next sprint to the project and return the updated list.
/// Returns 201.
pub async fn append_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = state.store.get_record(Table::Projets, &id).await?;
    let directive = scalar::text(record.field("SprintNames"));

    let mut parsed = SprintDirective::parse(&directive);
    let label = parsed.append_sprint();
    let updated = write_directive(&state, &id, &parsed).await?;

    tracing::info!(projet = %id, %label, "Sprint appended");

    Ok((StatusCode::CREATED, Json(DataResponse { data: updated })))
}

/// PUT /api/v1/projets/{id}/sprints/{label}
///
/// Set or clear the custom name of one sprint and return the updated
/// list. An empty name clears the entry; the Backlog pseudo-sprint
/// cannot be renamed.
pub async fn rename_sprint(
    State(state): State<AppState>,
    Path((id, label)): Path<(String, String)>,
    Json(input): Json<RenameSprint>,
) -> AppResult<impl IntoResponse> {
    if sprint::sprint_number(&label).is_none() {
        return Err(CoreError::validation(format!(
            "sprint non renommable: {label}"
        ))
        .into());
    }

    let record = state.store.get_record(Table::Projets, &id).await?;
    let directive = scalar::text(record.field("SprintNames"));

    let mut parsed = SprintDirective::parse(&directive);
    parsed.set_name(&label, &input.name);
    let updated = write_directive(&state, &id, &parsed).await?;

    Ok(Json(DataResponse { data: updated }))
}

/// Re-serialize the directive into the project's free-text field and
/// return the re-derived sprint list from the stored form.
async fn write_directive(
    state: &AppState,
    id: &str,
    directive: &SprintDirective,
) -> AppResult<Vec<SprintEntry>> {
    let serialized = directive.serialize();

    let mut fields = Fields::new();
    fields.insert("SprintNames".to_string(), Value::String(serialized));

    let record = state.store.update_record(Table::Projets, id, fields).await?;
    let stored = scalar::text(record.field("SprintNames"));

    Ok(entries(&stored))
}
