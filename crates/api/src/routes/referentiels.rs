//! Route definitions for the read-only reference tables.

use axum::routing::get;
use axum::Router;

use crate::handlers::referentiels;
use crate::state::AppState;

/// Flat routes for the reference tables.
///
/// ```text
/// GET /axes             -> list_axes
/// GET /chantiers        -> list_chantiers
/// GET /collaborateurs   -> list_collaborateurs
/// GET /participants     -> list_participants
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/axes", get(referentiels::list_axes))
        .route("/chantiers", get(referentiels::list_chantiers))
        .route("/collaborateurs", get(referentiels::list_collaborateurs))
        .route("/participants", get(referentiels::list_participants))
}
