//! Handlers for a project's link documents.
//!
//! The link list lives JSON-encoded inside one long-text field on the
//! project, so every mutation is a read-modify-write over the whole list.
//! Concurrent editors race on the field (last writer wins); store-native
//! file attachments are read-only and survive every mutation untouched.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use sprintboard_airtable::Table;
use sprintboard_core::documents::{self, DocKind, Document};
use sprintboard_core::error::CoreError;
use sprintboard_core::mappers::projet;
use sprintboard_core::record::Fields;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: DocKind,
}

/// POST /api/v1/projets/{id}/documents
///
/// Append a link document to the project and return the updated full
/// document list (links plus read-only attachments). Returns 201.
pub async fn add_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<NewDocument>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(CoreError::validation("le nom du document est requis").into());
    }
    if input.url.trim().is_empty() {
        return Err(CoreError::validation("l'URL du document est requise").into());
    }
    if matches!(input.kind, DocKind::File) {
        return Err(
            CoreError::validation("les fichiers ne peuvent pas être ajoutés par lien").into(),
        );
    }

    let record = state.store.get_record(Table::Projets, &id).await?;
    let mut links = documents::decode_links(record.field("Documents"));
    documents::add(&mut links, input.name, input.url, input.kind);

    let updated = write_links(&state, &id, &links).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: updated })))
}

/// DELETE /api/v1/projets/{id}/documents/{doc_id}
///
/// Remove a link document and return the updated full document list.
/// Attachments cannot be removed through this route.
pub async fn remove_document(
    State(state): State<AppState>,
    Path((id, doc_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let record = state.store.get_record(Table::Projets, &id).await?;
    let mut links = documents::decode_links(record.field("Documents"));

    if !documents::remove(&mut links, &doc_id) {
        return Err(AppError::NotFound("document"));
    }

    let updated = write_links(&state, &id, &links).await?;

    Ok(Json(DataResponse { data: updated }))
}

/// Write the link list back to the project's long-text field and return
/// the re-decoded full document list from the stored form.
async fn write_links(
    state: &AppState,
    id: &str,
    links: &[Document],
) -> AppResult<Vec<Document>> {
    let mut fields = Fields::new();
    fields.insert(
        "Documents".to_string(),
        Value::String(documents::encode_links(links)),
    );

    let record = state.store.update_record(Table::Projets, id, fields).await?;
    Ok(projet::decode(&record).documents)
}
