//! The catalog API the browser talks to.
//!
//! [`CatalogApi`] abstracts the MediaHub REST surface so the state engine
//! can be driven by the real HTTP client in production and an in-memory
//! fake in tests.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mediahub_core::AppResult;
use mediahub_entity::directory::model::Directory;
use mediahub_entity::file::model::StoredFile;

/// The contents of one directory as returned by the listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    /// The path the listing was taken for.
    #[serde(default)]
    pub path: String,
    /// Immediate subdirectories.
    pub directories: Vec<Directory>,
    /// Files owned by the directory.
    pub files: Vec<StoredFile>,
}

/// Aggregate storage counts, as served by the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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

/// One file handle queued for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// File name as picked or dropped by the user.
    pub file_name: String,
    /// File content.
    pub data: Bytes,
}

/// Async interface to the MediaHub catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the listing of a directory.
    async fn fetch_listing(&self, path: &str) -> AppResult<Listing>;

    /// Create a directory under an existing parent.
    async fn create_directory(&self, name: &str, parent_path: &str) -> AppResult<Directory>;

    /// Delete a directory.
    async fn delete_directory(&self, id: Uuid) -> AppResult<()>;

    /// Upload a batch of files into a directory, returning the created
    /// metadata.
    async fn upload_files(&self, directory: &str, files: Vec<UploadFile>)
        -> AppResult<Vec<StoredFile>>;

    /// Rename a file.
    async fn rename_file(&self, id: Uuid, new_name: &str) -> AppResult<StoredFile>;

    /// Move a set of files to a destination directory.
    async fn move_files(&self, file_ids: &[Uuid], destination: &str) -> AppResult<()>;

    /// Delete a set of files in one request.
    async fn delete_files(&self, file_ids: &[Uuid]) -> AppResult<()>;

    /// Delete a single file.
    async fn delete_file(&self, id: Uuid) -> AppResult<()>;

    /// Fetch aggregate storage statistics.
    async fn fetch_stats(&self) -> AppResult<StorageStats>;
}
