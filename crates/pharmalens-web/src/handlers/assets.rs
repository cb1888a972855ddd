//! Embedded static assets.
//!
//! The stylesheet and the selection script ship inside the binary so the
//! server runs from any working directory.

use axum::http::header;
use axum::response::IntoResponse;

pub const MAIN_CSS: &str = include_str!("../../templates/main.css");
pub const MAIN_JS: &str = include_str!("../../templates/main.js");

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], MAIN_CSS)
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        MAIN_JS,
    )
}
