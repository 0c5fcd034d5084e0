use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::SESSION_COOKIE_NAME;
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::repositories::SessionRepository;

/// Identity resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub account: String,
    pub role: RoleEnum,
}

/// Requires a valid, unexpired session. Expired or unknown sessions are
/// rejected on read; their rows stay in the table.
pub struct AuthSession(pub CurrentUser);

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(SESSION_COOKIE_NAME)
            .ok_or_else(|| ApiError::Unauthorized("authentication required".to_string()))?;

        let session_id = Uuid::parse_str(cookie.value())
            .map_err(|_| ApiError::Unauthorized("invalid session".to_string()))?;

        let session_repo = SessionRepository::new();
        let (_session, user) = session_repo
            .find_valid_with_user(session_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("session expired or unknown".to_string()))?;

        Ok(AuthSession(CurrentUser {
            user_id: user.user_id,
            account: user.account,
            role: user.role,
        }))
    }
}

/// Same as [`AuthSession`] but additionally requires the admin role.
pub struct AdminSession(pub CurrentUser);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthSession(current_user) = AuthSession::from_request_parts(parts, state).await?;

        if current_user.role != RoleEnum::Admin {
            return Err(ApiError::Forbidden(
                "admin privileges required".to_string(),
            ));
        }

        Ok(AdminSession(current_user))
    }
}

/// Json extractor that reports malformed bodies through the standard
/// response envelope instead of axum's plain text rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
