use tracing::info;
use validator::Validate;

use super::dto::{CreateJobRequest, UpdateJobRequest};
use super::model::TranslationJob;
use super::repository::JobRepository;
use crate::common::error::AppError;
use crate::modules::language::catalog;
use crate::state::AppState;

pub struct JobService;

impl JobService {
    pub async fn create(state: &AppState, req: CreateJobRequest) -> Result<TranslationJob, AppError> {
        req.validate()?;
        ensure_supported(&req.target_language)?;

        let job = JobRepository::insert(
            &state.db,
            &req.original_filename,
            &req.original_file_path,
            &req.target_language,
        )
        .await?;

        info!(job_id = job.id, target = %job.target_language, "translation job created");
        Ok(job)
    }

    pub async fn get(state: &AppState, id: i64) -> Result<TranslationJob, AppError> {
        JobRepository::find_by_id(&state.db, id)
            .await?
            .ok_or(AppError::NotFound("translation job"))
    }

    pub async fn list(state: &AppState) -> Result<Vec<TranslationJob>, AppError> {
        Ok(JobRepository::find_all(&state.db).await?)
    }

    pub async fn update(
        state: &AppState,
        id: i64,
        req: UpdateJobRequest,
    ) -> Result<TranslationJob, AppError> {
        if let Some(Some(code)) = &req.detected_language {
            ensure_supported(code)?;
        }

        let job = JobRepository::update(&state.db, id, req.into())
            .await?
            .ok_or(AppError::NotFound("translation job"))?;

        info!(job_id = job.id, status = ?job.status, "translation job updated");
        Ok(job)
    }
}

fn ensure_supported(code: &str) -> Result<(), AppError> {
    if catalog::is_supported(code) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "unsupported language code: {code}"
        )))
    }
}
