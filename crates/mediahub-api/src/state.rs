//! Application state shared across all handlers.

use std::sync::Arc;

use mediahub_core::config::AppConfig;
use mediahub_database::connection::DatabasePool;
use mediahub_service::directory::service::DirectoryService;
use mediahub_service::file::service::FileService;
use mediahub_service::file::upload::UploadService;
use mediahub_service::stats::StatsService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (used by the health check).
    pub db: Arc<DatabasePool>,
    /// Directory CRUD and listings.
    pub directory_service: Arc<DirectoryService>,
    /// File rename, move, delete, download.
    pub file_service: Arc<FileService>,
    /// Multi-file upload.
    pub upload_service: Arc<UploadService>,
    /// Aggregate storage statistics.
    pub stats_service: Arc<StatsService>,
}
