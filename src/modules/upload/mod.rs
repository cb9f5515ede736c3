use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use tower_http::limit::RequestBodyLimitLayer;

pub mod dto;
pub mod handler;
pub mod service;

// Base64 inflates the payload by ~4/3, so allow a bit over 256 MiB on the
// wire for ~192 MiB videos.
const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024 + 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handler::upload_video))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES))
}
