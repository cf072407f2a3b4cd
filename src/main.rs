//! MediaHub server entry point.
//!
//! Wires configuration, database, blob store, services, and the HTTP
//! router together, then serves until a shutdown signal arrives.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use mediahub_api::{build_router, AppState};
use mediahub_core::config::AppConfig;
use mediahub_core::error::AppError;
use mediahub_core::traits::storage::BlobStore;
use mediahub_database::connection::DatabasePool;
use mediahub_database::migration;
use mediahub_database::repositories::directory::DirectoryRepository;
use mediahub_database::repositories::file::FileRepository;
use mediahub_service::directory::service::DirectoryService;
use mediahub_service::file::service::FileService;
use mediahub_service::file::upload::UploadService;
use mediahub_service::stats::StatsService;
use mediahub_storage::LocalBlobStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let env = std::env::var("MEDIAHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;

    init_logging(&config);
    info!(environment = %env, "Starting MediaHub server");

    // Database and schema.
    let db = Arc::new(DatabasePool::connect(&config.database).await?);
    migration::run_migrations(db.pool()).await?;

    // Blob store.
    let blob_store: Arc<dyn BlobStore> = Arc::new(
        LocalBlobStore::new(&format!("{}/blobs", config.storage.data_root)).await?,
    );

    // Repositories.
    let file_repo = Arc::new(FileRepository::new(db.pool().clone()));
    let dir_repo = Arc::new(DirectoryRepository::new(db.pool().clone()));

    // Services.
    let directory_service = Arc::new(DirectoryService::new(
        Arc::clone(&dir_repo),
        Arc::clone(&file_repo),
    ));
    let file_service = Arc::new(FileService::new(
        Arc::clone(&file_repo),
        Arc::clone(&dir_repo),
        Arc::clone(&blob_store),
    ));
    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&file_repo),
        Arc::clone(&dir_repo),
        Arc::clone(&blob_store),
        config.storage.clone(),
    ));
    let stats_service = Arc::new(StatsService::new(
        Arc::clone(&file_repo),
        Arc::clone(&dir_repo),
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        db: Arc::clone(&db),
        directory_service,
        file_service,
        upload_service,
        stats_service,
    };

    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "MediaHub server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    info!("MediaHub server stopped");
    Ok(())
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
    }
}
