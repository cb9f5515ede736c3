use super::catalog;
use super::model::Language;
use crate::common::response::{ApiResponse, ApiSuccess};
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// List supported languages
#[utoipa::path(
    get,
    path = "/api/v1/languages",
    responses(
        (status = 200, description = "Supported languages, sorted by display name", body = ApiResponse<Vec<Language>>)
    ),
    tag = "Languages"
)]
pub async fn list_languages() -> impl IntoResponse {
    ApiSuccess(
        ApiResponse::success(catalog::list(), "Languages retrieved successfully"),
        StatusCode::OK,
    )
}
