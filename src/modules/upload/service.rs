use base64::{Engine as _, engine::general_purpose::STANDARD};
use bytes::Bytes;
use tracing::info;
use validator::Validate;

use super::dto::UploadVideoRequest;
use crate::common::error::AppError;
use crate::infrastructure::storage::BlobStorage;
use crate::modules::job::dto::CreateJobRequest;
use crate::modules::job::model::TranslationJob;
use crate::modules::job::service::JobService;
use crate::state::AppState;

pub struct UploadService;

impl UploadService {
    /// Decodes the payload, stores it under a unique path, then records the
    /// job. If the job insert fails the file stays on disk; the error is
    /// surfaced to the caller rather than compensated.
    pub async fn upload(
        state: &AppState,
        req: UploadVideoRequest,
    ) -> Result<TranslationJob, AppError> {
        req.validate()?;

        let bytes = STANDARD
            .decode(&req.file_data)
            .map(Bytes::from)
            .map_err(|e| AppError::Validation(format!("file_data is not valid base64: {e}")))?;

        let size = bytes.len();
        let path = state.storage.write_unique(&req.filename, bytes).await?;
        info!(filename = %req.filename, path = %path, size, "video stored");

        JobService::create(
            state,
            CreateJobRequest {
                original_filename: req.filename,
                original_file_path: path,
                target_language: req.target_language,
            },
        )
        .await
    }
}
