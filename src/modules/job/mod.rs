use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_job).get(handler::list_jobs))
        .route("/{id}", get(handler::get_job).patch(handler::update_job))
}
