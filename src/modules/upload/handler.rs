use super::dto::UploadVideoRequest;
use super::service::UploadService;
use crate::common::error::AppError;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::job::model::TranslationJob;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Upload a video and open a translation job for it
#[utoipa::path(
    post,
    path = "/api/v1/videos/upload",
    request_body = UploadVideoRequest,
    responses(
        (status = 201, description = "Video stored, job created with status pending", body = ApiResponse<TranslationJob>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Upload"
)]
pub async fn upload_video(
    State(state): State<AppState>,
    Json(req): Json<UploadVideoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let job = UploadService::upload(&state, req).await?;
    Ok(ApiSuccess(
        ApiResponse::success(job, "Video uploaded successfully"),
        StatusCode::CREATED,
    ))
}
