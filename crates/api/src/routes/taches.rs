//! Route definitions for the `/taches` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::taches;
use crate::state::AppState;

/// Routes mounted at `/taches`.
///
/// ```text
/// GET    /          -> list_taches (?projet=recXXX)
/// POST   /          -> create_tache
/// PATCH  /{id}      -> update_tache
/// DELETE /{id}      -> delete_tache
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(taches::list_taches).post(taches::create_tache))
        .route(
            "/{id}",
            patch(taches::update_tache).delete(taches::delete_tache),
        )
}
