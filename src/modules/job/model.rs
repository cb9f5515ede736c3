use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Coarse lifecycle marker of a job. Any value may follow any other; the
/// external pipeline is trusted to drive transitions.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, ToSchema)]
pub struct TranslationJob {
    pub id: i64,
    pub original_filename: String,
    pub original_file_path: String,
    pub detected_language: Option<String>,
    pub target_language: String,
    pub status: JobStatus,
    pub translated_file_path: Option<String>,
    pub transcript: Option<String>,
    pub translated_transcript: Option<String>,
    pub error_message: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

/// Field-presence patch applied by the update operation. `None` leaves a
/// field untouched; `Some(None)` clears an optional field.
#[derive(Debug, Default, Clone)]
pub struct JobPatch {
    pub detected_language: Option<Option<String>>,
    pub status: Option<JobStatus>,
    pub translated_file_path: Option<Option<String>>,
    pub transcript: Option<Option<String>>,
    pub translated_transcript: Option<Option<String>>,
    pub error_message: Option<Option<String>>,
}
