//! Blob-store abstraction.
//!
//! Metadata lives in the database; the bytes themselves go through this
//! trait. Keys are relative slash-delimited paths owned by the caller.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Storage backend for uploaded file content.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write a blob, creating parent directories as needed.
    async fn write(&self, key: &str, data: Bytes) -> AppResult<()>;

    /// Read a blob fully into memory.
    async fn read(&self, key: &str) -> AppResult<Bytes>;

    /// Delete a blob. Deleting a missing blob is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Whether a blob exists.
    async fn exists(&self, key: &str) -> AppResult<bool>;
}
