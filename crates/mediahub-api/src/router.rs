//! Route definitions for the MediaHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and threads it through every handler via Axum's `State` extractor.

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(directory_routes())
        .merge(file_routes())
        .merge(stats_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        // Leave headroom for multipart boundaries around the per-file cap.
        .layer(DefaultBodyLimit::max(max_upload.saturating_mul(2)))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Directory listing and CRUD.
fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/listing", get(handlers::directory::listing))
        .route("/directories", post(handlers::directory::create_directory))
        .route(
            "/directories/{id}",
            delete(handlers::directory::delete_directory),
        )
}

/// File listing, upload, mutations, download.
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::file::list_files))
        .route("/files/upload", post(handlers::file::upload_files))
        .route("/files/bulk/move", put(handlers::file::move_files))
        .route("/files/bulk", delete(handlers::file::delete_files))
        .route("/files/{id}/rename", put(handlers::file::rename_file))
        .route("/files/{id}/download", get(handlers::file::download_file))
        .route("/files/{id}", delete(handlers::file::delete_file))
}

/// Storage statistics.
fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats", get(handlers::stats::stats))
}

/// Health check (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
