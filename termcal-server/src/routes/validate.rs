//! Structural validation endpoint

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::post,
};
use serde::Serialize;
use tracing::debug;

use termcal_core::TimetableDocument;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/validate", post(validate))
}

/// Validation outcome returned by the API
#[derive(Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// POST /api/validate - Report every missing required field
async fn validate(
    payload: Result<Json<TimetableDocument>, JsonRejection>,
) -> (StatusCode, Json<ValidationResponse>) {
    let errors = match payload {
        Ok(Json(doc)) => termcal_core::structural_errors(&doc),
        Err(rejection) => vec![rejection.body_text()],
    };

    if errors.is_empty() {
        return (
            StatusCode::OK,
            Json(ValidationResponse {
                valid: true,
                errors,
            }),
        );
    }

    debug!(count = errors.len(), "Timetable failed validation");
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationResponse {
            valid: false,
            errors,
        }),
    )
}
