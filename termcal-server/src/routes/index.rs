//! Static landing page

use axum::{Router, response::Html, routing::get};

use crate::state::AppState;

static INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / - The timetable editor page
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
