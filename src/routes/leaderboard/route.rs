use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use super::dto::{LeaderboardQueryParams, RankedStudentResponse, SchoolStandingResponse};
use crate::error::ApiError;
use crate::extractor::AuthSession;
use crate::ranking::{self, SchoolStudentRow, StudentStanding};
use crate::repositories::StudentRepository;
use crate::response::ApiResponse;

pub fn create_route() -> Router {
    Router::new().route("/api/leaderboard", get(get_leaderboard))
}

/// Current leaderboard, recomputed on every call
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardQueryParams),
    responses(
        (status = 200, description = "Top ten standings; student entries carry a rank, school entries do not"),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Leaderboard"
)]
pub async fn get_leaderboard(
    AuthSession(_current_user): AuthSession,
    Query(params): Query<LeaderboardQueryParams>,
) -> Result<Response, ApiError> {
    let student_repo = StudentRepository::new();
    let rows = student_repo.find_rows(None, None).await?;

    if params.leaderboard_type == "school" {
        let school_rows: Vec<SchoolStudentRow> = rows
            .into_iter()
            .map(|row| SchoolStudentRow {
                school_id: row.student.school_id,
                school_name: row.school_name,
                avg_score: row.avg_score,
                rating_count: row.rating_count,
            })
            .collect();

        let data: Vec<SchoolStandingResponse> = ranking::rank_schools(school_rows)
            .into_iter()
            .map(SchoolStandingResponse::from)
            .collect();

        return Ok((StatusCode::OK, Json(ApiResponse::ok(data))).into_response());
    }

    // Any other type value falls back to the student board
    let standings: Vec<StudentStanding> = rows
        .into_iter()
        .map(|row| StudentStanding {
            student_id: row.student.student_id,
            name: row.student.name,
            grade: row.student.grade,
            school_id: row.student.school_id,
            school_name: row.school_name,
            avg_score: row.avg_score,
            rating_count: row.rating_count,
        })
        .collect();

    let data: Vec<RankedStudentResponse> = ranking::rank_students(standings)
        .into_iter()
        .map(RankedStudentResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))).into_response())
}
