use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::healthcheck,
        crate::modules::upload::handler::upload_video,
        crate::modules::job::handler::create_job,
        crate::modules::job::handler::list_jobs,
        crate::modules::job::handler::get_job,
        crate::modules::job::handler::update_job,
        crate::modules::language::handler::list_languages,
    ),
    components(
        schemas(
            crate::routes::HealthResponse,
            crate::modules::upload::dto::UploadVideoRequest,
            crate::modules::job::dto::CreateJobRequest,
            crate::modules::job::dto::UpdateJobRequest,
            crate::modules::job::model::TranslationJob,
            crate::modules::job::model::JobStatus,
            crate::modules::language::model::Language,
        )
    ),
    tags(
        (name = "System", description = "Liveness"),
        (name = "Upload", description = "Video intake"),
        (name = "Jobs", description = "Translation job lifecycle"),
        (name = "Languages", description = "Supported languages")
    )
)]
pub struct ApiDoc;
