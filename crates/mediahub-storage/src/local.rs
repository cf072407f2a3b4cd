//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use mediahub_core::error::{AppError, ErrorKind};
use mediahub_core::result::AppResult;
use mediahub_core::traits::storage::BlobStore;

/// Stores blobs as plain files under a root directory.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a new blob store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Build a fresh blob key for an upload into a directory. The key
    /// embeds a UUID so renames never touch the stored bytes.
    pub fn new_key(directory: &str, original_name: &str) -> String {
        let ext = original_name
            .rsplit('.')
            .next()
            .filter(|e| *e != original_name)
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default();
        format!(
            "{}/{}{ext}",
            directory.trim_matches('/'),
            Uuid::new_v4()
        )
        .trim_start_matches('/')
        .to_string()
    }

    /// Resolve a blob key to an absolute path within the root.
    fn resolve(&self, key: &str) -> PathBuf {
        let clean = key.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn write(&self, key: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(key);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write blob: {key}"), e)
        })?;

        debug!(key, bytes = data.len(), "Wrote blob");
        Ok(())
    }

    async fn read(&self, key: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(key);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {key}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to read blob: {key}"), e)
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_path = self.resolve(key);
        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete blob: {key}"),
                e,
            )),
        }
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let full_path = self.resolve(key);
        fs::try_exists(&full_path).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to stat blob: {key}"), e)
        })
    }
}

/// Guess the MIME type for a file name, falling back to octet-stream.
pub fn mime_from_name(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let data = Bytes::from("hello world");
        store.write("docs/file.txt", data.clone()).await.unwrap();

        assert!(store.exists("docs/file.txt").await.unwrap());

        let read_back = store.read("docs/file.txt").await.unwrap();
        assert_eq!(read_back, data);

        store.delete("docs/file.txt").await.unwrap();
        assert!(!store.exists("docs/file.txt").await.unwrap());
    }

    #[tokio::test]
    async fn deleting_missing_blob_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path().to_str().unwrap())
            .await
            .unwrap();
        store.delete("nope/missing.bin").await.unwrap();
    }

    #[test]
    fn new_key_keeps_extension_and_directory() {
        let key = LocalBlobStore::new_key("/photos", "Holiday.JPG");
        assert!(key.starts_with("photos/"));
        assert!(key.ends_with(".jpg"));
    }

    #[test]
    fn new_key_under_root_has_no_leading_slash() {
        let key = LocalBlobStore::new_key("/", "notes.txt");
        assert!(!key.starts_with('/'));
        assert!(key.ends_with(".txt"));
    }

    #[test]
    fn test_mime_detection() {
        assert_eq!(mime_from_name("file.pdf"), "application/pdf");
        assert_eq!(mime_from_name("img.PNG"), "image/png");
        assert_eq!(mime_from_name("noext"), "application/octet-stream");
    }

    #[test]
    fn mime_detection_covers_allowed_document_types() {
        assert_eq!(
            mime_from_name("report.odt"),
            "application/vnd.oasis.opendocument.text"
        );
        assert_eq!(mime_from_name("data.csv"), "text/csv");
    }

    #[test]
    fn unknown_extension_downloads_as_octet_stream() {
        assert_eq!(mime_from_name("scene.xyz123"), "application/octet-stream");
    }
}
