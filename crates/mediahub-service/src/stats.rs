//! Aggregate storage statistics.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use mediahub_core::error::AppError;
use mediahub_database::repositories::directory::DirectoryRepository;
use mediahub_database::repositories::file::FileRepository;

/// Aggregate counts shown in the storage side panel. Field names match
/// the wire format the admin frontend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    /// Total number of stored files.
    pub total_files: i64,
    /// Combined size of all files in bytes.
    pub total_size: i64,
    /// Total number of directories.
    pub total_directories: i64,
    /// Number of files whose derived kind is `image`.
    pub image_count: i64,
}

/// Computes storage statistics on demand.
#[derive(Debug, Clone)]
pub struct StatsService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Directory repository.
    dir_repo: Arc<DirectoryRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(file_repo: Arc<FileRepository>, dir_repo: Arc<DirectoryRepository>) -> Self {
        Self {
            file_repo,
            dir_repo,
        }
    }

    /// Compute the current aggregate counts.
    pub async fn stats(&self) -> Result<StorageStats, AppError> {
        let total_files = self.file_repo.count_all().await?;
        let total_size = self.file_repo.total_size_bytes().await?;
        let total_directories = self.dir_repo.count_all().await?;
        let image_count = self.file_repo.count_images().await?;

        Ok(StorageStats {
            total_files,
            total_size,
            total_directories,
            image_count,
        })
    }
}
