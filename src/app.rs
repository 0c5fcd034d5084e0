use crate::api_docs::ApiDoc;
use crate::config::APP_CONFIG;
use crate::error::ApiError;
use crate::middleware::http_logger::http_logger;
use crate::routes;
use crate::routes::health::route::create_route;
use axum::Router;
use axum::middleware;
use http::header;
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt,
    cors::{AllowOrigin, Any, CorsLayer},
    propagate_header::PropagateHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn not_found() -> ApiError {
    ApiError::NotFound("resource not found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn create_app() -> anyhow::Result<Router> {
    let mut router = Router::new()
        .merge(create_route())
        .merge(routes::auth::create_route())
        .merge(routes::schools::create_route())
        .merge(routes::students::create_route())
        .merge(routes::ratings::create_route())
        .merge(routes::leaderboard::create_route())
        .merge(routes::badges::create_route())
        .merge(routes::applications::create_route());

    // Add Swagger UI
    if APP_CONFIG.swagger_enabled {
        let swagger_ui =
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());
        router = router.merge(swagger_ui);
    }

    // Unknown paths and known paths with the wrong method both answer in
    // the response envelope
    let router = router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed);

    // Axum middleware (middleware::from_fn) must be applied separately from
    // ServiceBuilder, which only accepts Tower layers
    let router = router.layer(middleware::from_fn(http_logger));

    // Configure CORS
    let allowed_headers = [
        header::CONTENT_TYPE,
        header::ACCEPT,
        header::ACCEPT_LANGUAGE,
    ];

    let allowed_methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::PATCH,
        http::Method::OPTIONS,
    ];

    let cors_layer = if APP_CONFIG.cors_allowed_origins == "*" {
        // A wildcard origin cannot be combined with credentials, so the
        // session cookie only flows when origins are listed explicitly
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(false)
    } else {
        let allowed_origins: HashSet<String> = APP_CONFIG
            .cors_allowed_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let origins: Vec<http::HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(true)
    };

    // Session ids must never reach the logs from either direction
    let sensitive_headers: Arc<[_]> = vec![header::COOKIE, header::SET_COOKIE].into();

    // Apply Tower middleware stack
    let middleware = ServiceBuilder::new()
        .layer(cors_layer)
        .layer(PropagateHeaderLayer::new(header::HeaderName::from_static(
            "x-request-id",
        )))
        .sensitive_request_headers(sensitive_headers.clone())
        .sensitive_response_headers(sensitive_headers)
        .compression();

    Ok(router.layer(middleware))
}
