//! Route definitions for the planning week grid.

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use sprintboard_core::calendar::Week;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// Optional quarter filter, 1 through 4.
    pub quarter: Option<u32>,
}

/// Week grid payload: the planning year plus its (possibly quarter-
/// filtered) weeks.
#[derive(Debug, Serialize)]
pub struct CalendarPayload {
    pub year: i32,
    pub weeks: Vec<Week>,
}

/// GET /calendar -- the 53-week grid for the planning year, optionally
/// restricted to one quarter.
async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<DataResponse<CalendarPayload>>> {
    let weeks = match query.quarter {
        Some(q) => {
            let slice = state.calendar.quarter(q);
            if slice.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "trimestre invalide: {q} (attendu 1 à 4)"
                )));
            }
            slice.to_vec()
        }
        None => state.calendar.weeks().to_vec(),
    };

    Ok(Json(DataResponse {
        data: CalendarPayload {
            year: state.calendar.year(),
            weeks,
        },
    }))
}

/// Routes mounted at the API root.
pub fn router() -> Router<AppState> {
    Router::new().route("/calendar", get(get_calendar))
}
