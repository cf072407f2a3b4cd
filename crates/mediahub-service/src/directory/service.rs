//! Directory CRUD operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use mediahub_core::error::AppError;
use mediahub_database::repositories::directory::DirectoryRepository;
use mediahub_database::repositories::file::FileRepository;
use mediahub_entity::directory::model::{join_path, CreateDirectory, Directory, ROOT_PATH};
use mediahub_entity::file::model::StoredFile;

/// Manages directory CRUD and the combined directory listing.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    /// Directory repository.
    dir_repo: Arc<DirectoryRepository>,
    /// File repository (for listings and non-empty checks).
    file_repo: Arc<FileRepository>,
}

/// Request to create a new directory under an existing parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDirectoryRequest {
    /// Directory name (single path segment).
    pub name: String,
    /// Path of the parent directory (`"/"` for top level).
    pub parent_path: String,
}

/// The contents of one directory: immediate subdirectories plus files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryListing {
    /// The path the listing was taken for.
    pub path: String,
    /// Immediate subdirectories, name-ordered.
    pub directories: Vec<Directory>,
    /// Files owned by this directory, name-ordered.
    pub files: Vec<StoredFile>,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(dir_repo: Arc<DirectoryRepository>, file_repo: Arc<FileRepository>) -> Self {
        Self {
            dir_repo,
            file_repo,
        }
    }

    /// Fetch the full listing of a directory: its files and immediate
    /// subdirectories. The path must be the root or an existing
    /// directory.
    pub async fn listing(&self, path: &str) -> Result<DirectoryListing, AppError> {
        self.require_exists(path).await?;

        let directories = self.dir_repo.find_children(path).await?;
        let files = self.file_repo.find_by_directory(path).await?;

        Ok(DirectoryListing {
            path: path.to_string(),
            directories,
            files,
        })
    }

    /// Creates a new directory under an existing parent.
    pub async fn create(&self, req: CreateDirectoryRequest) -> Result<Directory, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Directory name cannot be empty"));
        }
        if name.contains('/') {
            return Err(AppError::validation(
                "Directory name cannot contain path separators",
            ));
        }

        self.require_exists(&req.parent_path).await?;

        let path = join_path(&req.parent_path, name);
        let directory = self
            .dir_repo
            .create(&CreateDirectory {
                path: path.clone(),
                name: name.to_string(),
                parent_path: req.parent_path.clone(),
            })
            .await?;

        info!(directory_id = %directory.id, path = %directory.path, "Directory created");

        Ok(directory)
    }

    /// Deletes a directory. Non-empty directories are rejected so that a
    /// delete can never silently discard files.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let directory = self
            .dir_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Directory not found"))?;

        let file_count = self.file_repo.count_in_directory(&directory.path).await?;
        let child_count = self.dir_repo.count_children(&directory.path).await?;
        if file_count > 0 || child_count > 0 {
            return Err(AppError::conflict(format!(
                "Directory '{}' is not empty",
                directory.path
            )));
        }

        self.dir_repo.delete(id).await?;

        info!(directory_id = %id, path = %directory.path, "Directory deleted");

        Ok(())
    }

    /// Resolve a path, treating the implicit root as always present.
    async fn require_exists(&self, path: &str) -> Result<(), AppError> {
        if path == ROOT_PATH {
            return Ok(());
        }
        self.dir_repo
            .find_by_path(path)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Directory '{path}' not found")))
    }
}
