use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UploadVideoRequest {
    #[validate(length(min = 1, message = "filename must not be empty"))]
    pub filename: String,
    /// Base64-encoded file contents (standard alphabet).
    #[validate(length(min = 1, message = "file_data must not be empty"))]
    pub file_data: String,
    pub target_language: String,
}
