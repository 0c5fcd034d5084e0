use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, patch},
};
use uuid::Uuid;

use super::dto::{
    ApplicationCreatedResponse, ApplicationDecisionResponse, ApplicationQueryParams,
    CreateSchoolApplicationRequest, CreateStudentApplicationRequest, DecideApplicationRequest,
    SchoolApplicationResponse, StudentApplicationResponse, parse_status,
};
use crate::entities::sea_orm_active_enums::ApplicationStatusEnum;
use crate::error::ApiError;
use crate::extractor::{AdminSession, ApiJson, AuthSession};
use crate::repositories::{ApplicationRepository, SchoolRepository, UserRepository};
use crate::response::ApiResponse;

pub fn create_route() -> Router {
    Router::new()
        .route(
            "/api/school-applications",
            get(list_school_applications).post(create_school_application),
        )
        .route(
            "/api/school-applications/{application_id}",
            patch(decide_school_application),
        )
        .route(
            "/api/student-applications",
            get(list_student_applications).post(create_student_application),
        )
        .route(
            "/api/student-applications/{application_id}",
            patch(decide_student_application),
        )
}

/// Filter derived from the raw `status` query value. Absent or empty
/// means no filter; a value outside the known states matches no rows.
enum StatusFilter {
    All,
    One(ApplicationStatusEnum),
    Unmatched,
}

fn filter_status(raw: Option<&str>) -> StatusFilter {
    match raw {
        None | Some("") => StatusFilter::All,
        Some(value) => match parse_status(value) {
            Ok(status) => StatusFilter::One(status),
            Err(_) => StatusFilter::Unmatched,
        },
    }
}

/// School applications, newest first
#[utoipa::path(
    get,
    path = "/api/school-applications",
    params(ApplicationQueryParams),
    responses(
        (status = 200, description = "School applications", body = Vec<SchoolApplicationResponse>),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Applications"
)]
pub async fn list_school_applications(
    AuthSession(_current_user): AuthSession,
    Query(params): Query<ApplicationQueryParams>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<SchoolApplicationResponse>>>), ApiError> {
    let status = match filter_status(params.status.as_deref()) {
        StatusFilter::All => None,
        StatusFilter::One(status) => Some(status),
        StatusFilter::Unmatched => {
            return Ok((StatusCode::OK, Json(ApiResponse::ok(Vec::new()))));
        }
    };

    let application_repo = ApplicationRepository::new();
    let applications = application_repo
        .find_school_applications(status, params.applicant_id)
        .await?;

    let data: Vec<SchoolApplicationResponse> = applications
        .into_iter()
        .map(|application| SchoolApplicationResponse {
            application_id: application.application_id.to_string(),
            applicant_id: application.applicant_id.to_string(),
            school_name: application.school_name,
            contact: application.contact,
            reason: application.reason,
            status: application.status,
            created_at: application.created_at.to_string(),
            updated_at: application.updated_at.to_string(),
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}

/// Submit a school application
#[utoipa::path(
    post,
    path = "/api/school-applications",
    request_body = CreateSchoolApplicationRequest,
    responses(
        (status = 200, description = "Application accepted", body = ApplicationCreatedResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Applicant unknown"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Applications"
)]
pub async fn create_school_application(
    AuthSession(_current_user): AuthSession,
    ApiJson(payload): ApiJson<CreateSchoolApplicationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationCreatedResponse>>), ApiError> {
    let Some(applicant_id) = payload.applicant_id else {
        return Err(ApiError::Validation("missing required fields".to_string()));
    };
    let school_name = payload.school_name.unwrap_or_default();
    let contact = payload.contact.unwrap_or_default();
    if school_name.is_empty() || contact.is_empty() {
        return Err(ApiError::Validation("missing required fields".to_string()));
    }

    let user_repo = UserRepository::new();
    user_repo
        .find_by_id(applicant_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("applicant not found".to_string()))?;

    let application_repo = ApplicationRepository::new();
    let application = application_repo
        .create_school_application(
            applicant_id,
            school_name,
            contact,
            payload.reason.unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(ApplicationCreatedResponse {
            application_id: application.application_id.to_string(),
        })),
    ))
}

/// Decide a school application; approval creates the school when absent
#[utoipa::path(
    patch,
    path = "/api/school-applications/{application_id}",
    params(
        ("application_id" = Uuid, Path, description = "Application identifier")
    ),
    request_body = DecideApplicationRequest,
    responses(
        (status = 200, description = "Decision stored", body = ApplicationDecisionResponse),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "No valid session"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Application unknown"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Applications"
)]
pub async fn decide_school_application(
    AdminSession(_admin): AdminSession,
    Path(application_id): Path<String>,
    ApiJson(payload): ApiJson<DecideApplicationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationDecisionResponse>>), ApiError> {
    let application_id = Uuid::parse_str(&application_id)
        .map_err(|_| ApiError::NotFound("application not found".to_string()))?;

    let application_repo = ApplicationRepository::new();
    application_repo
        .find_school_application(application_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("application not found".to_string()))?;

    let status = parse_status(payload.status.as_deref().unwrap_or_default())?;

    let application = application_repo
        .decide_school_application(application_id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound("application not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(ApplicationDecisionResponse {
            application_id: application.application_id.to_string(),
            status: application.status,
        })),
    ))
}

/// Student applications, newest first
#[utoipa::path(
    get,
    path = "/api/student-applications",
    params(ApplicationQueryParams),
    responses(
        (status = 200, description = "Student applications", body = Vec<StudentApplicationResponse>),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Applications"
)]
pub async fn list_student_applications(
    AuthSession(_current_user): AuthSession,
    Query(params): Query<ApplicationQueryParams>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<StudentApplicationResponse>>>), ApiError> {
    let status = match filter_status(params.status.as_deref()) {
        StatusFilter::All => None,
        StatusFilter::One(status) => Some(status),
        StatusFilter::Unmatched => {
            return Ok((StatusCode::OK, Json(ApiResponse::ok(Vec::new()))));
        }
    };

    let application_repo = ApplicationRepository::new();
    let applications = application_repo
        .find_student_applications(status, params.applicant_id)
        .await?;

    let data: Vec<StudentApplicationResponse> = applications
        .into_iter()
        .map(|(application, school)| StudentApplicationResponse {
            application_id: application.application_id.to_string(),
            applicant_id: application.applicant_id.to_string(),
            student_name: application.student_name,
            school_id: application.school_id.to_string(),
            school_name: school.map(|school| school.school_name).unwrap_or_default(),
            grade: application.grade,
            reason: application.reason,
            status: application.status,
            created_at: application.created_at.to_string(),
            updated_at: application.updated_at.to_string(),
        })
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(data))))
}

/// Submit a student application
#[utoipa::path(
    post,
    path = "/api/student-applications",
    request_body = CreateStudentApplicationRequest,
    responses(
        (status = 200, description = "Application accepted", body = ApplicationCreatedResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Applicant or school unknown"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Applications"
)]
pub async fn create_student_application(
    AuthSession(_current_user): AuthSession,
    ApiJson(payload): ApiJson<CreateStudentApplicationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationCreatedResponse>>), ApiError> {
    let (Some(applicant_id), Some(school_id), Some(grade)) =
        (payload.applicant_id, payload.school_id, payload.grade)
    else {
        return Err(ApiError::Validation("missing required fields".to_string()));
    };
    let student_name = payload.student_name.unwrap_or_default();
    if student_name.is_empty() {
        return Err(ApiError::Validation("missing required fields".to_string()));
    }

    let user_repo = UserRepository::new();
    let school_repo = SchoolRepository::new();
    let applicant = user_repo.find_by_id(applicant_id).await?;
    let school = school_repo.find_by_id(school_id).await?;
    if applicant.is_none() || school.is_none() {
        return Err(ApiError::NotFound(
            "applicant or school not found".to_string(),
        ));
    }

    let application_repo = ApplicationRepository::new();
    let application = application_repo
        .create_student_application(
            applicant_id,
            student_name,
            school_id,
            grade,
            payload.reason.unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(ApplicationCreatedResponse {
            application_id: application.application_id.to_string(),
        })),
    ))
}

/// Decide a student application; approval creates the student when the
/// exact (school, name, grade) triple is absent
#[utoipa::path(
    patch,
    path = "/api/student-applications/{application_id}",
    params(
        ("application_id" = Uuid, Path, description = "Application identifier")
    ),
    request_body = DecideApplicationRequest,
    responses(
        (status = 200, description = "Decision stored", body = ApplicationDecisionResponse),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "No valid session"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Application unknown"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Applications"
)]
pub async fn decide_student_application(
    AdminSession(_admin): AdminSession,
    Path(application_id): Path<String>,
    ApiJson(payload): ApiJson<DecideApplicationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationDecisionResponse>>), ApiError> {
    let application_id = Uuid::parse_str(&application_id)
        .map_err(|_| ApiError::NotFound("application not found".to_string()))?;

    let application_repo = ApplicationRepository::new();
    application_repo
        .find_student_application(application_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("application not found".to_string()))?;

    let status = parse_status(payload.status.as_deref().unwrap_or_default())?;

    let application = application_repo
        .decide_student_application(application_id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound("application not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(ApplicationDecisionResponse {
            application_id: application.application_id.to_string(),
            status: application.status,
        })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_status_absent_or_blank_means_no_filter() {
        assert!(matches!(filter_status(None), StatusFilter::All));
        assert!(matches!(filter_status(Some("")), StatusFilter::All));
    }

    #[test]
    fn test_filter_status_narrows_on_known_state() {
        assert!(matches!(
            filter_status(Some("pending")),
            StatusFilter::One(ApplicationStatusEnum::Pending)
        ));
        assert!(matches!(
            filter_status(Some("approved")),
            StatusFilter::One(ApplicationStatusEnum::Approved)
        ));
    }

    #[test]
    fn test_filter_status_unknown_value_matches_no_rows() {
        assert!(matches!(
            filter_status(Some("cancelled")),
            StatusFilter::Unmatched
        ));
        assert!(matches!(
            filter_status(Some("Approved")),
            StatusFilter::Unmatched
        ));
    }
}
