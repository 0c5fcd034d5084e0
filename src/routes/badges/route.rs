use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use uuid::Uuid;

use super::dto::{BadgeResponse, StudentBadgeResponse};
use crate::error::ApiError;
use crate::extractor::AuthSession;
use crate::repositories::BadgeRepository;
use crate::response::ApiResponse;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/badges", get(list_badges))
        .route("/api/student-badges/{student_id}", get(list_student_badges))
}

/// Badge catalogue ordered by type then name
#[utoipa::path(
    get,
    path = "/api/badges",
    responses(
        (status = 200, description = "Badge definitions", body = Vec<BadgeResponse>),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Badges"
)]
pub async fn list_badges(
    AuthSession(_current_user): AuthSession,
) -> Result<(StatusCode, Json<ApiResponse<Vec<BadgeResponse>>>), ApiError> {
    let badge_repo = BadgeRepository::new();
    let badges = badge_repo.find_all().await?;

    let data: Vec<BadgeResponse> = badges
        .into_iter()
        .map(|badge| BadgeResponse {
            badge_id: badge.badge_id.to_string(),
            name: badge.name,
            description: badge.description,
            badge_type: badge.badge_type,
            rule_desc: badge.rule_desc,
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}

/// Badges awarded to one student
#[utoipa::path(
    get,
    path = "/api/student-badges/{student_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "Awards held by the student", body = Vec<StudentBadgeResponse>),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Badges"
)]
pub async fn list_student_badges(
    AuthSession(_current_user): AuthSession,
    Path(student_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<StudentBadgeResponse>>>), ApiError> {
    let student_id = Uuid::parse_str(&student_id)
        .map_err(|_| ApiError::NotFound("student not found".to_string()))?;

    let badge_repo = BadgeRepository::new();
    let awards = badge_repo.find_for_student(student_id).await?;

    let data: Vec<StudentBadgeResponse> = awards
        .into_iter()
        .map(|(award, badge)| StudentBadgeResponse {
            id: award.student_badge_id.to_string(),
            badge_id: award.badge_id.to_string(),
            badge_name: badge.map(|badge| badge.name).unwrap_or_default(),
            period: award.period,
            awarded_at: award.awarded_at.to_string(),
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}
