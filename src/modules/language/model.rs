use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}
