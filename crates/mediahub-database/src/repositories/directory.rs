//! Directory repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mediahub_core::error::{AppError, ErrorKind};
use mediahub_core::result::AppResult;
use mediahub_entity::directory::model::{CreateDirectory, Directory};

/// Repository for directory CRUD and hierarchy queries.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    pool: PgPool,
}

impl DirectoryRepository {
    /// Create a new directory repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a directory by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Directory>> {
        sqlx::query_as::<_, Directory>("SELECT * FROM directories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find directory", e))
    }

    /// Find a directory by its unique path.
    pub async fn find_by_path(&self, path: &str) -> AppResult<Option<Directory>> {
        sqlx::query_as::<_, Directory>("SELECT * FROM directories WHERE path = $1")
            .bind(path)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find directory by path", e)
            })
    }

    /// List the immediate subdirectories of a path.
    pub async fn find_children(&self, parent_path: &str) -> AppResult<Vec<Directory>> {
        sqlx::query_as::<_, Directory>(
            "SELECT * FROM directories WHERE parent_path = $1 ORDER BY name ASC",
        )
        .bind(parent_path)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list subdirectories", e)
        })
    }

    /// Create a new directory.
    pub async fn create(&self, data: &CreateDirectory) -> AppResult<Directory> {
        sqlx::query_as::<_, Directory>(
            "INSERT INTO directories (path, name, parent_path) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.path)
        .bind(&data.name)
        .bind(&data.parent_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("directories_path_key") =>
            {
                AppError::conflict(format!("A directory at path '{}' already exists", data.path))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create directory", e),
        })
    }

    /// Delete a directory by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM directories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete directory", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the immediate subdirectories of a path.
    pub async fn count_children(&self, parent_path: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM directories WHERE parent_path = $1")
            .bind(parent_path)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count subdirectories", e)
            })
    }

    /// Count total directories.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM directories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count directories", e)
            })
    }
}
