pub mod calendar;
pub mod health;
pub mod projets;
pub mod referentiels;
pub mod taches;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projets                                 list, create
/// /projets/{id}                            update, delete
/// /projets/{id}/documents                  add document link (POST)
/// /projets/{id}/documents/{doc_id}         remove document (DELETE)
/// /projets/{id}/sprints                    list sprints (GET), append sprint (POST)
/// /projets/{id}/sprints/{label}            rename sprint (PUT)
///
/// /taches                                  list (?projet=), create
/// /taches/{id}                             update, delete
///
/// /axes                                    list (GET)
/// /chantiers                               list (GET)
/// /collaborateurs                          list (GET)
/// /participants                            list (GET)
///
/// /calendar                                week grid (?quarter=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Projects: CRUD plus document and sprint sub-resources.
        .nest("/projets", projets::router())
        // Tasks: CRUD with optional project filter.
        .nest("/taches", taches::router())
        // Read-only reference tables (axes, chantiers, collaborateurs, participants).
        .merge(referentiels::router())
        // Planning week grid.
        .merge(calendar::router())
}
