use axum::{Router, routing::get};

pub fn create_route() -> Router {
    Router::new().route("/health", get(health))
}

/// Liveness probe, open and unenveloped.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "Health"
)]
pub async fn health() -> &'static str {
    "OK"
}
