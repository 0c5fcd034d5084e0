use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    routing::post,
};

use super::dto::{GivenRatingResponse, RatingQueryParams, SubmitRatingRequest, SubmitRatingResponse};
use crate::error::ApiError;
use crate::extractor::{ApiJson, AuthSession};
use crate::ranking;
use crate::repositories::{RatingRepository, StudentRepository, UserRepository};
use crate::response::ApiResponse;

pub fn create_route() -> Router {
    Router::new().route("/api/ratings", post(submit_rating).get(list_given_ratings))
}

/// Ratings a user has given, newest first
#[utoipa::path(
    get,
    path = "/api/ratings",
    params(RatingQueryParams),
    responses(
        (status = 200, description = "Ratings given by the user", body = Vec<GivenRatingResponse>),
        (status = 400, description = "rater_id missing"),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Ratings"
)]
pub async fn list_given_ratings(
    AuthSession(_current_user): AuthSession,
    Query(params): Query<RatingQueryParams>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<GivenRatingResponse>>>), ApiError> {
    let rater_id = params
        .rater_id
        .ok_or_else(|| ApiError::Validation("rater_id is required".to_string()))?;

    let rating_repo = RatingRepository::new();
    let ratings = rating_repo.find_by_rater_with_target(rater_id).await?;

    let data: Vec<GivenRatingResponse> = ratings
        .into_iter()
        .map(|(rating, target)| GivenRatingResponse {
            rating_id: rating.rating_id.to_string(),
            target_id: rating.target_id.to_string(),
            target_name: target.map(|student| student.name).unwrap_or_default(),
            score: rating.score,
            comment: rating.comment,
            created_at: rating.created_at.to_string(),
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}

/// Submit or overwrite a rating and refresh the target's summary
#[utoipa::path(
    post,
    path = "/api/ratings",
    request_body = SubmitRatingRequest,
    responses(
        (status = 200, description = "Rating stored", body = SubmitRatingResponse),
        (status = 400, description = "Missing fields or score out of range"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Rater or target student unknown"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Ratings"
)]
pub async fn submit_rating(
    AuthSession(_current_user): AuthSession,
    ApiJson(payload): ApiJson<SubmitRatingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SubmitRatingResponse>>), ApiError> {
    let (Some(rater_id), Some(target_id), Some(score)) =
        (payload.rater_id, payload.target_id, payload.score)
    else {
        return Err(ApiError::Validation(
            "rater_id, target_id and score are required".to_string(),
        ));
    };

    if !ranking::score_in_range(score) {
        return Err(ApiError::Validation(
            "score must be between 1 and 5".to_string(),
        ));
    }

    let user_repo = UserRepository::new();
    let student_repo = StudentRepository::new();
    let rater = user_repo.find_by_id(rater_id).await?;
    let target = student_repo.find_by_id(target_id).await?;
    if rater.is_none() || target.is_none() {
        return Err(ApiError::NotFound(
            "rater or target student not found".to_string(),
        ));
    }

    let rating_repo = RatingRepository::new();
    let rating = rating_repo
        .submit(rater_id, target_id, score, payload.comment.unwrap_or_default())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(SubmitRatingResponse {
            rating_id: rating.rating_id.to_string(),
        })),
    ))
}
