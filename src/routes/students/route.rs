use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use super::dto::{ReceivedRatingResponse, StudentQueryParams, StudentResponse};
use crate::error::ApiError;
use crate::extractor::AuthSession;
use crate::repositories::{RatingRepository, StudentRepository};
use crate::response::ApiResponse;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/students", get(list_students))
        .route("/api/students/{student_id}", get(get_student))
        .route("/api/students/{student_id}/ratings", get(list_student_ratings))
}

/// List students with their rating summaries
#[utoipa::path(
    get,
    path = "/api/students",
    params(StudentQueryParams),
    responses(
        (status = 200, description = "Students with rating summaries", body = Vec<StudentResponse>),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Students"
)]
pub async fn list_students(
    AuthSession(_current_user): AuthSession,
    Query(params): Query<StudentQueryParams>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<StudentResponse>>>), ApiError> {
    let student_repo = StudentRepository::new();
    let rows = student_repo.find_rows(params.school_id, params.grade).await?;

    let data: Vec<StudentResponse> = rows.into_iter().map(StudentResponse::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}

/// Single student with rating summary
#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    params(
        ("student_id" = Uuid, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "Student detail", body = StudentResponse),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Students"
)]
pub async fn get_student(
    AuthSession(_current_user): AuthSession,
    Path(student_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<StudentResponse>>), ApiError> {
    let student_id = Uuid::parse_str(&student_id)
        .map_err(|_| ApiError::NotFound("student not found".to_string()))?;

    let student_repo = StudentRepository::new();
    let row = student_repo
        .find_row_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("student not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(StudentResponse::from(row)))))
}

/// Ratings a student has received, newest first
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/ratings",
    params(
        ("student_id" = Uuid, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "Ratings received by the student", body = Vec<ReceivedRatingResponse>),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Students"
)]
pub async fn list_student_ratings(
    AuthSession(_current_user): AuthSession,
    Path(student_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ReceivedRatingResponse>>>), ApiError> {
    let student_id = Uuid::parse_str(&student_id)
        .map_err(|_| ApiError::NotFound("student not found".to_string()))?;

    let rating_repo = RatingRepository::new();
    let ratings = rating_repo.find_by_target_with_rater(student_id).await?;

    // Unknown students yield an empty list rather than 404
    let data: Vec<ReceivedRatingResponse> = ratings
        .into_iter()
        .map(|(rating, rater)| ReceivedRatingResponse {
            rating_id: rating.rating_id.to_string(),
            rater_id: rating.rater_id.to_string(),
            rater_name: rater.map(|user| user.account).unwrap_or_default(),
            target_id: rating.target_id.to_string(),
            score: rating.score,
            comment: rating.comment,
            created_at: rating.created_at.to_string(),
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}
