use super::dto::{CreateJobRequest, UpdateJobRequest};
use super::model::TranslationJob;
use super::service::JobService;
use crate::common::error::AppError;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Create a translation job for a video already in storage
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = ApiResponse<TranslationJob>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Jobs"
)]
pub async fn create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::create(&state, req).await?;
    Ok(ApiSuccess(
        ApiResponse::success(job, "Job created successfully"),
        StatusCode::CREATED,
    ))
}

/// List translation jobs, newest first
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses(
        (status = 200, description = "All jobs, newest first", body = ApiResponse<Vec<TranslationJob>>),
        (status = 500, description = "Storage failure")
    ),
    tag = "Jobs"
)]
pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let jobs = JobService::list(&state).await?;
    Ok(ApiSuccess(
        ApiResponse::success(jobs, "Jobs retrieved successfully"),
        StatusCode::OK,
    ))
}

/// Get a translation job by id
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job details", body = ApiResponse<TranslationJob>),
        (status = 404, description = "Job not found")
    ),
    tag = "Jobs"
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::get(&state, id).await?;
    Ok(ApiSuccess(
        ApiResponse::success(job, "Job retrieved successfully"),
        StatusCode::OK,
    ))
}

/// Partially update a translation job
///
/// Fields omitted from the body keep their value; fields sent as `null` are
/// cleared. Called by the translation pipeline to advance job state.
#[utoipa::path(
    patch,
    path = "/api/v1/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated", body = ApiResponse<TranslationJob>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Job not found")
    ),
    tag = "Jobs"
)]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::update(&state, id, req).await?;
    Ok(ApiSuccess(
        ApiResponse::success(job, "Job updated successfully"),
        StatusCode::OK,
    ))
}
