//! Static front page driving the JSON API from the browser.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::api::AppState;

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../../static/script.js");

/// Create front page routes
pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
