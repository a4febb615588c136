mod adapters;
mod application;
mod domain;
mod services;

use std::sync::Arc;

use adapters::{
    auth::require_bearer_auth,
    controllers::{
        health_controller::HealthController, logo_controller::LogoController,
        pdf_controller::PdfController,
    },
    repositories::{PgFileRepository, PgLogoRepository},
    state::AppState,
};
use application::{
    repositories::{file_repository::FileRepository, logo_repository::LogoRepository},
    services::ObjectStorage,
};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
    Router,
};
use domain::config::settings::Settings;
use services::{InputResolver, RendererHandle, S3Storage};
use tower_http::cors::{Any, CorsLayer};

/// Request bodies above this are rejected outright; the logo size policy
/// (5 MiB) is enforced separately with a 400.
const MAX_REQUEST_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize AWS SDK crypto provider (required for aws-sdk-s3)
    // This must be called before any AWS SDK operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let settings = Arc::new(Settings::from_env());

    tracing::info!("Starting pdfpress on port {}", settings.port);

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    tracing::info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&settings.database_url)
        .await
        .expect("ERROR: Failed to connect to PostgreSQL database. Check DATABASE_URL and network connectivity.");
    tracing::info!("Database connection established");

    let storage = S3Storage::connect(&settings).await;
    let renderer = RendererHandle::discover(settings.renderer_path.clone());

    let app_state = AppState {
        settings: settings.clone(),
        file_repository: Arc::new(PgFileRepository::new(pool.clone())) as Arc<dyn FileRepository>,
        logo_repository: Arc::new(PgLogoRepository::new(pool)) as Arc<dyn LogoRepository>,
        storage: Arc::new(storage) as Arc<dyn ObjectStorage>,
        renderer,
        input_resolver: Arc::new(InputResolver::new()),
    };

    // Logo routes require a bearer token
    let logo_routes = Router::new()
        .route(
            "/logos/",
            post(LogoController::upload).get(LogoController::list_logos),
        )
        .route(
            "/logos/{logo_id}",
            get(LogoController::get_logo).delete(LogoController::delete_logo),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_bearer_auth,
        ));

    // Conversion routes are public
    let pdf_routes = Router::new()
        .route("/pdf/convert", post(PdfController::convert))
        .route("/pdf/generate", post(PdfController::generate))
        .route("/pdf/preview", post(PdfController::preview))
        .route("/pdf/health", get(HealthController::health_check))
        .route("/pdf/list/{user_id}", get(PdfController::list_user_files))
        .route("/pdf/download/{file_id}", get(PdfController::download))
        .route("/pdf/delete/{file_id}", delete(PdfController::delete));

    let router = Router::new()
        .merge(pdf_routes)
        .merge(logo_routes)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(cors)
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", settings.port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
