use std::net::SocketAddr;

use rating_service::bootstrap::{initialize_admin_user, initialize_default_badges};
use rating_service::static_service::get_database_connection;
use rating_service::{app, config::APP_CONFIG, utils::tracing::init_standard_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_standard_tracing(env!("CARGO_CRATE_NAME"));

    tracing::info!("Starting application...");

    // Initialize database connection
    let db_connection = get_database_connection().await;

    // Initialize default admin user
    tracing::info!("Checking admin user...");
    if let Err(e) = initialize_admin_user(db_connection).await {
        tracing::error!("Failed to initialize admin user: {}", e);
        tracing::warn!("Continuing without admin user initialization...");
    }

    // Seed the built-in badge definitions
    tracing::info!("Checking badge catalogue...");
    if let Err(e) = initialize_default_badges().await {
        tracing::error!("Failed to seed badge catalogue: {}", e);
        tracing::warn!("Continuing without badge catalogue...");
    }

    let app = app::create_app().await?;

    let http_address = format!("0.0.0.0:{}", APP_CONFIG.port);

    tracing::info!("HTTP server listening on {}", &http_address);

    let listener = tokio::net::TcpListener::bind(http_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
