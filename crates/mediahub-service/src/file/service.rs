//! File rename, move, and delete operations (single and bulk).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use mediahub_core::error::AppError;
use mediahub_core::traits::storage::BlobStore;
use mediahub_core::types::pagination::{PageRequest, PageResponse};
use mediahub_database::repositories::directory::DirectoryRepository;
use mediahub_database::repositories::file::FileRepository;
use mediahub_entity::directory::model::ROOT_PATH;
use mediahub_entity::file::model::StoredFile;

/// Handles file metadata mutations and deletion.
///
/// Bulk mutations are all-or-nothing at the metadata level; blob removal
/// after a committed delete is best-effort and never fails the request.
#[derive(Clone)]
pub struct FileService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Directory repository (for destination checks).
    dir_repo: Arc<DirectoryRepository>,
    /// Blob store holding the file content.
    blob_store: Arc<dyn BlobStore>,
}

/// Request to rename a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameFileRequest {
    /// The new file name.
    pub new_name: String,
}

/// Request to move one or more files to a destination directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveFilesRequest {
    /// Identifiers of the files to move (at least one).
    pub file_ids: Vec<Uuid>,
    /// Destination directory path.
    pub destination: String,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        dir_repo: Arc<DirectoryRepository>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            file_repo,
            dir_repo,
            blob_store,
        }
    }

    /// Gets a single file's metadata.
    pub async fn get_file(&self, file_id: Uuid) -> Result<StoredFile, AppError> {
        self.file_repo
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Paginated file listing for one directory.
    pub async fn list_files(
        &self,
        directory: &str,
        page: PageRequest,
    ) -> Result<PageResponse<StoredFile>, AppError> {
        self.file_repo
            .find_by_directory_paged(directory, &page)
            .await
    }

    /// Renames a file. The identifier and owning directory are preserved.
    pub async fn rename_file(
        &self,
        file_id: Uuid,
        req: RenameFileRequest,
    ) -> Result<StoredFile, AppError> {
        let new_name = req.new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }

        let file = self.get_file(file_id).await?;

        if let Some(existing) = self
            .file_repo
            .find_by_directory_and_name(&file.directory, new_name)
            .await?
        {
            if existing.id != file_id {
                return Err(AppError::conflict(format!(
                    "A file named '{new_name}' already exists in this directory"
                )));
            }
        }

        let renamed = self.file_repo.rename(file_id, new_name).await?;

        info!(file_id = %file_id, new_name = %new_name, "File renamed");

        Ok(renamed)
    }

    /// Moves a set of files to a destination directory. All-or-nothing:
    /// the batch is rejected if any identifier is unknown.
    pub async fn move_files(&self, req: MoveFilesRequest) -> Result<u64, AppError> {
        if req.file_ids.is_empty() {
            return Err(AppError::validation("No files selected to move"));
        }
        self.require_directory(&req.destination).await?;

        let moved = self
            .file_repo
            .move_many(&req.file_ids, &req.destination)
            .await?;

        info!(
            count = moved,
            destination = %req.destination,
            "Files moved"
        );

        Ok(moved)
    }

    /// Deletes a single file (metadata row plus blob).
    pub async fn delete_file(&self, file_id: Uuid) -> Result<(), AppError> {
        self.delete_files(&[file_id]).await
    }

    /// Deletes a set of files in one request. Metadata deletion is
    /// all-or-nothing; blob removal happens after the commit and is
    /// best-effort, so a missing blob only produces a warning.
    pub async fn delete_files(&self, file_ids: &[Uuid]) -> Result<(), AppError> {
        if file_ids.is_empty() {
            return Err(AppError::validation("No files selected to delete"));
        }

        let storage_paths = self.file_repo.delete_many(file_ids).await?;

        for key in &storage_paths {
            if let Err(e) = self.blob_store.delete(key).await {
                warn!(key = %key, error = %e, "Failed to remove blob for deleted file");
            }
        }

        info!(count = file_ids.len(), "Files deleted");

        Ok(())
    }

    /// Read a file's content for download, with its metadata.
    pub async fn download(&self, file_id: Uuid) -> Result<(StoredFile, bytes::Bytes), AppError> {
        let file = self.get_file(file_id).await?;
        let data = self.blob_store.read(&file.storage_path).await?;
        Ok((file, data))
    }

    /// Resolve a destination path, treating the implicit root as present.
    async fn require_directory(&self, path: &str) -> Result<(), AppError> {
        if path == ROOT_PATH {
            return Ok(());
        }
        self.dir_repo
            .find_by_path(path)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Destination directory '{path}' not found")))
    }
}
