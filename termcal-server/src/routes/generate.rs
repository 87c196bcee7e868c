//! Calendar generation endpoint

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::info;

use termcal_core::TimetableDocument;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

/// POST /api/generate - Convert a timetable into a downloadable .ics file
async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<TimetableDocument>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(doc) = payload?;

    let ics = termcal_core::generate_ics(&doc)?;
    info!(bytes = ics.len(), "Serving generated calendar");

    let disposition = format!("attachment; filename={}", state.config.download_filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        ics,
    )
        .into_response())
}
