//! Multi-file upload into a target directory.

use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use mediahub_core::config::storage::StorageConfig;
use mediahub_core::error::AppError;
use mediahub_core::traits::storage::BlobStore;
use mediahub_database::repositories::directory::DirectoryRepository;
use mediahub_database::repositories::file::FileRepository;
use mediahub_entity::directory::model::ROOT_PATH;
use mediahub_entity::file::model::{CreateStoredFile, StoredFile};
use mediahub_storage::local::LocalBlobStore;

/// One file of an upload batch.
#[derive(Debug, Clone)]
pub struct UploadPart {
    /// Original file name as submitted.
    pub file_name: String,
    /// File content.
    pub data: Bytes,
}

/// Validates and persists upload batches.
///
/// Every part of a batch is validated, including name collisions within
/// the batch and with the target directory, before any byte is written.
/// Should a metadata insert still fail mid-batch, that part's blob is
/// removed again so no orphaned bytes stay behind.
#[derive(Clone)]
pub struct UploadService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Directory repository (target checks).
    dir_repo: Arc<DirectoryRepository>,
    /// Blob store receiving the content.
    blob_store: Arc<dyn BlobStore>,
    /// Upload policy: size limit, extension allow-list, public URL base.
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        dir_repo: Arc<DirectoryRepository>,
        blob_store: Arc<dyn BlobStore>,
        config: StorageConfig,
    ) -> Self {
        Self {
            file_repo,
            dir_repo,
            blob_store,
            config,
        }
    }

    /// Uploads a batch of files into the target directory, returning the
    /// created metadata in submission order.
    pub async fn upload(
        &self,
        directory: &str,
        parts: Vec<UploadPart>,
    ) -> Result<Vec<StoredFile>, AppError> {
        if parts.is_empty() {
            return Err(AppError::validation("No files in upload"));
        }
        self.require_directory(directory).await?;

        for part in &parts {
            validate_part(&self.config, part)?;
        }
        check_batch_names(&parts)?;
        for part in &parts {
            let name = part.file_name.trim();
            if self
                .file_repo
                .find_by_directory_and_name(directory, name)
                .await?
                .is_some()
            {
                return Err(AppError::conflict(format!(
                    "A file named '{name}' already exists in this directory"
                )));
            }
        }

        let mut created = Vec::with_capacity(parts.len());
        for part in parts {
            let key = LocalBlobStore::new_key(directory, &part.file_name);
            let size_bytes = part.data.len() as i64;

            self.blob_store.write(&key, part.data).await?;

            let insert = self
                .file_repo
                .create(&CreateStoredFile {
                    original_name: part.file_name.trim().to_string(),
                    size_bytes,
                    url: format!(
                        "{}/{key}",
                        self.config.public_base_url.trim_end_matches('/')
                    ),
                    directory: directory.to_string(),
                    storage_path: key.clone(),
                })
                .await;

            let record = match insert {
                Ok(record) => record,
                Err(e) => {
                    if let Err(del_err) = self.blob_store.delete(&key).await {
                        warn!(
                            key = %key,
                            error = %del_err,
                            "Failed to remove blob after failed metadata insert"
                        );
                    }
                    return Err(e);
                }
            };

            info!(
                file_id = %record.id,
                name = %record.original_name,
                directory = %directory,
                size = size_bytes,
                "File uploaded"
            );

            created.push(record);
        }

        Ok(created)
    }

    /// Resolve a target path, treating the implicit root as present.
    async fn require_directory(&self, path: &str) -> Result<(), AppError> {
        if path == ROOT_PATH {
            return Ok(());
        }
        self.dir_repo
            .find_by_path(path)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Target directory '{path}' not found")))
    }
}

/// Reject batches carrying two parts with the same trimmed name. The
/// second insert would collide with the first one's committed row.
fn check_batch_names(parts: &[UploadPart]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for part in parts {
        let name = part.file_name.trim();
        if !seen.insert(name.to_string()) {
            return Err(AppError::conflict(format!(
                "Duplicate file name '{name}' in upload"
            )));
        }
    }
    Ok(())
}

/// Enforce the upload policy for one part: non-empty name, size limit,
/// extension allow-list.
fn validate_part(config: &StorageConfig, part: &UploadPart) -> Result<(), AppError> {
    let name = part.file_name.trim();
    if name.is_empty() {
        return Err(AppError::validation("File name cannot be empty"));
    }

    if part.data.len() as u64 > config.max_upload_size_bytes {
        return Err(AppError::validation(format!(
            "File '{name}' exceeds the maximum upload size of {} bytes",
            config.max_upload_size_bytes
        )));
    }

    let ext = name
        .rsplit('.')
        .next()
        .filter(|e| *e != name)
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if !config.extension_allowed(&ext) {
        return Err(AppError::validation(format!(
            "File type '.{ext}' is not allowed"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediahub_core::error::ErrorKind;

    fn part(name: &str, len: usize) -> UploadPart {
        UploadPart {
            file_name: name.to_string(),
            data: Bytes::from(vec![0u8; len]),
        }
    }

    #[test]
    fn accepts_an_allowed_file_under_the_limit() {
        let config = StorageConfig::default();
        assert!(validate_part(&config, &part("report.pdf", 1024)).is_ok());
    }

    #[test]
    fn rejects_a_blank_file_name() {
        let config = StorageConfig::default();
        let err = validate_part(&config, &part("   ", 10)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn rejects_a_file_over_the_size_limit() {
        let config = StorageConfig {
            max_upload_size_bytes: 100,
            ..StorageConfig::default()
        };
        let err = validate_part(&config, &part("big.png", 101)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("maximum upload size"));
    }

    #[test]
    fn rejects_a_disallowed_extension() {
        let config = StorageConfig::default();
        let err = validate_part(&config, &part("tool.exe", 10)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains(".exe"));
    }

    #[test]
    fn extension_check_ignores_case() {
        let config = StorageConfig::default();
        assert!(validate_part(&config, &part("photo.JPG", 10)).is_ok());
    }

    #[test]
    fn duplicate_names_within_a_batch_are_rejected() {
        let parts = vec![part("photo.jpg", 10), part("other.png", 10), part(" photo.jpg ", 10)];
        let err = check_batch_names(&parts).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert!(err.message.contains("photo.jpg"));
    }

    #[test]
    fn distinct_names_within_a_batch_pass() {
        let parts = vec![part("a.png", 10), part("b.png", 10)];
        assert!(check_batch_names(&parts).is_ok());
    }

    #[test]
    fn a_name_without_extension_needs_an_empty_allow_list() {
        let strict = StorageConfig::default();
        assert!(validate_part(&strict, &part("README", 10)).is_err());

        let open = StorageConfig {
            allowed_extensions: Vec::new(),
            ..StorageConfig::default()
        };
        assert!(validate_part(&open, &part("README", 10)).is_ok());
    }
}
