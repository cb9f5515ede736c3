use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::model::{JobPatch, JobStatus};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, message = "original_filename must not be empty"))]
    pub original_filename: String,
    #[validate(length(min = 1, message = "original_file_path must not be empty"))]
    pub original_file_path: String,
    pub target_language: String,
}

/// Partial update. Omitted fields are left untouched; an explicit `null`
/// clears the field.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateJobRequest {
    #[serde(default, deserialize_with = "crate::common::patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub detected_language: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default, deserialize_with = "crate::common::patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub translated_file_path: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::common::patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub transcript: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::common::patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub translated_transcript: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::common::patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub error_message: Option<Option<String>>,
}

impl From<UpdateJobRequest> for JobPatch {
    fn from(req: UpdateJobRequest) -> Self {
        Self {
            detected_language: req.detected_language,
            status: req.status,
            translated_file_path: req.translated_file_path,
            transcript: req.transcript,
            translated_transcript: req.translated_transcript,
            error_message: req.error_message,
        }
    }
}
