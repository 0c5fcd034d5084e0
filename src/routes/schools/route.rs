use axum::{Json, Router, http::StatusCode, routing::get};

use super::dto::SchoolResponse;
use crate::error::ApiError;
use crate::extractor::AuthSession;
use crate::repositories::SchoolRepository;
use crate::response::ApiResponse;

pub fn create_route() -> Router {
    Router::new().route("/api/schools", get(list_schools))
}

/// List all schools, oldest first
#[utoipa::path(
    get,
    path = "/api/schools",
    responses(
        (status = 200, description = "All schools", body = Vec<SchoolResponse>),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Schools"
)]
pub async fn list_schools(
    AuthSession(_current_user): AuthSession,
) -> Result<(StatusCode, Json<ApiResponse<Vec<SchoolResponse>>>), ApiError> {
    let school_repo = SchoolRepository::new();
    let schools = school_repo.find_all().await?;

    let data: Vec<SchoolResponse> = schools
        .into_iter()
        .map(|school| SchoolResponse {
            school_id: school.school_id.to_string(),
            school_name: school.school_name,
            created_at: school.created_at.to_string(),
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}
