use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SchoolResponse {
    pub school_id: String,
    pub school_name: String,
    pub created_at: String,
}
