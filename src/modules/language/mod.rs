use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub mod catalog;
pub mod handler;
pub mod model;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handler::list_languages))
}
