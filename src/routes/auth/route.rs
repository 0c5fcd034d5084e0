use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use uuid::Uuid;

use super::dto::{LoginRequest, RegisterRequest, UserPayload};
use crate::config::{APP_CONFIG, SESSION_COOKIE_NAME};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::extractor::{ApiJson, AuthSession};
use crate::repositories::{SessionRepository, UserRepository};
use crate::response::ApiResponse;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/check", get(check))
}

/// Register endpoint - creates a regular user account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = UserPayload),
        (status = 400, description = "Missing fields or account already taken"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn register(
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserPayload>>), ApiError> {
    let account = payload.account.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    if account.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "account and password are required".to_string(),
        ));
    }

    let user_repo = UserRepository::new();
    if user_repo.account_exists(&account).await? {
        return Err(ApiError::Validation("account already exists".to_string()));
    }

    let user = user_repo.create(account, password, RoleEnum::User).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(
            "register success",
            UserPayload {
                user_id: user.user_id.to_string(),
                account: user.account,
                role: user.role,
            },
        )),
    ))
}

/// Login endpoint - verifies credentials and sets the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = UserPayload),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn login(
    jar: CookieJar,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<(CookieJar, (StatusCode, Json<ApiResponse<UserPayload>>)), ApiError> {
    let account = payload.account.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user_repo = UserRepository::new();
    let user = user_repo
        .find_by_credentials(&account, &password)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("invalid account or password".to_string()))?;

    let session_repo = SessionRepository::new();
    let session = session_repo
        .create(user.user_id, APP_CONFIG.session_ttl_seconds)
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, session.session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    let jar = jar.add(cookie);

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(ApiResponse::message(
                "login success",
                UserPayload {
                    user_id: user.user_id.to_string(),
                    account: user.account,
                    role: user.role,
                },
            )),
        ),
    ))
}

/// Logout endpoint - drops the session row and clears the cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cleared"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn logout(
    jar: CookieJar,
) -> Result<(CookieJar, (StatusCode, Json<ApiResponse<()>>)), ApiError> {
    // Succeeds with or without a live session
    let session_id = jar
        .get(SESSION_COOKIE_NAME)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    if let Some(session_id) = session_id {
        let session_repo = SessionRepository::new();
        session_repo.delete(session_id).await?;
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/").build());

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(ApiResponse::message("logout success", ())),
        ),
    ))
}

/// Session check endpoint - echoes the identity behind the cookie
#[utoipa::path(
    get,
    path = "/api/auth/check",
    responses(
        (status = 200, description = "Session identity", body = UserPayload),
        (status = 401, description = "No valid session"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_cookie" = [])),
    tag = "Authentication"
)]
pub async fn check(
    AuthSession(current_user): AuthSession,
) -> Result<(StatusCode, Json<ApiResponse<UserPayload>>), ApiError> {
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(UserPayload {
            user_id: current_user.user_id.to_string(),
            account: current_user.account,
            role: current_user.role,
        })),
    ))
}
