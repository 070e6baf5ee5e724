//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `flag_quiz::QuizError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use flag_quiz::{
    FlagCdnClient, JsonFileCatalogSource, LoadCatalogUseCase, QuestionGenerator, QuizConfig,
    quiz_router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,flag_quiz=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = QuizConfig::from_env();

    // Flag catalog: loaded once, shared read-only for the process lifetime
    let catalog_source = Arc::new(JsonFileCatalogSource::new(config.data_path.clone()));
    let catalog = LoadCatalogUseCase::new(catalog_source).load().await?;

    if catalog.is_empty() {
        // Still serve; every question request answers with an error
        tracing::warn!(path = %config.data_path.display(), "Flag catalog is empty");
    }

    let generator = Arc::new(QuestionGenerator::new(catalog, config.history_capacity));
    let cdn = FlagCdnClient::new(&config)?;

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]))
        .allow_credentials(true);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Build router
    let app = Router::new()
        .nest("/api", quiz_router(generator, cdn, config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
