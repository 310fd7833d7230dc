//! Route definitions for the `/projets` resource.

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::{documents, projets, sprints};
use crate::state::AppState;

/// Routes mounted at `/projets`.
///
/// ```text
/// GET    /                            -> list_projets
/// POST   /                            -> create_projet
/// PATCH  /{id}                        -> update_projet
/// DELETE /{id}                        -> delete_projet
/// POST   /{id}/documents              -> add_document
/// DELETE /{id}/documents/{doc_id}     -> remove_document
/// GET    /{id}/sprints                -> list_sprints
/// POST   /{id}/sprints                -> append_sprint
/// PUT    /{id}/sprints/{label}        -> rename_sprint
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projets::list_projets).post(projets::create_projet))
        .route(
            "/{id}",
            patch(projets::update_projet).delete(projets::delete_projet),
        )
        .route("/{id}/documents", post(documents::add_document))
        .route(
            "/{id}/documents/{doc_id}",
            delete(documents::remove_document),
        )
        .route(
            "/{id}/sprints",
            get(sprints::list_sprints).post(sprints::append_sprint),
        )
        .route("/{id}/sprints/{label}", put(sprints::rename_sprint))
}
