use axum_helpers::{health_router, server::create_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::{handlers, ApiDoc, InMemoryTaskRepository, TaskService};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // The store lives for the lifetime of the process and is dropped
    // with it; there is no persistence.
    let repository = InMemoryTaskRepository::new();
    let service = TaskService::new(repository);

    let router = handlers::router(service)
        .merge(health_router(config.app.clone()))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    info!(
        "Starting {} {} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("{} shutdown complete", config.app.name);
    Ok(())
}
