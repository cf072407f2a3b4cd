//! File repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mediahub_core::error::{AppError, ErrorKind};
use mediahub_core::result::AppResult;
use mediahub_core::types::pagination::{PageRequest, PageResponse};
use mediahub_entity::file::model::{CreateStoredFile, StoredFile};

/// Matches the image extensions of the derived-kind lookup table, so the
/// stats query agrees with client-side filtering.
const IMAGE_NAME_PATTERN: &str = r"\.(jpg|jpeg|png|gif|webp|svg|bmp|ico)$";

/// Repository for file CRUD and query operations.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a file by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StoredFile>> {
        sqlx::query_as::<_, StoredFile>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// Full listing of a directory, ordered by name. The admin UI applies
    /// its filter/search/sort pipeline client-side, so no paging here.
    pub async fn find_by_directory(&self, directory: &str) -> AppResult<Vec<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE directory = $1 ORDER BY original_name ASC",
        )
        .bind(directory)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Paginated variant of the directory listing.
    pub async fn find_by_directory_paged(
        &self,
        directory: &str,
        page: &PageRequest,
    ) -> AppResult<PageResponse<StoredFile>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE directory = $1")
            .bind(directory)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;

        let files = sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE directory = $1 ORDER BY original_name ASC LIMIT $2 OFFSET $3",
        )
        .bind(directory)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))?;

        Ok(PageResponse::new(
            files,
            page.page,
            page.per_page,
            total as u64,
        ))
    }

    /// Find a file by directory and name (for duplicate checking).
    pub async fn find_by_directory_and_name(
        &self,
        directory: &str,
        name: &str,
    ) -> AppResult<Option<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE directory = $1 AND original_name = $2",
        )
        .bind(directory)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file by name", e))
    }

    /// Create a new file record.
    pub async fn create(&self, data: &CreateStoredFile) -> AppResult<StoredFile> {
        sqlx::query_as::<_, StoredFile>(
            "INSERT INTO files (original_name, size_bytes, url, directory, storage_path) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.original_name)
        .bind(data.size_bytes)
        .bind(&data.url)
        .bind(&data.directory)
        .bind(&data.storage_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("files_directory_original_name_key") =>
            {
                AppError::conflict(format!(
                    "A file named '{}' already exists in this directory",
                    data.original_name
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create file", e),
        })
    }

    /// Rename a file. The identifier and directory stay untouched.
    pub async fn rename(&self, file_id: Uuid, new_name: &str) -> AppResult<StoredFile> {
        sqlx::query_as::<_, StoredFile>(
            "UPDATE files SET original_name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(file_id)
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename file", e))?
        .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))
    }

    /// Reassign a set of files to a destination directory in one
    /// statement. All-or-nothing: if any ID does not exist the whole
    /// batch is rolled back.
    pub async fn move_many(&self, file_ids: &[Uuid], destination: &str) -> AppResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin move", e))?;

        let result = sqlx::query(
            "UPDATE files SET directory = $2, updated_at = NOW() WHERE id = ANY($1)",
        )
        .bind(file_ids)
        .bind(destination)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("files_directory_original_name_key") =>
            {
                AppError::conflict(format!(
                    "A file with the same name already exists in '{destination}'"
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to move files", e),
        })?;

        let moved = result.rows_affected();
        if moved != file_ids.len() as u64 {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back move", e)
            })?;
            return Err(AppError::not_found(format!(
                "Move aborted: {} of {} files not found",
                file_ids.len() as u64 - moved,
                file_ids.len()
            )));
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit move", e))?;

        Ok(moved)
    }

    /// Delete a set of files in one statement, returning the blob keys of
    /// the deleted rows. All-or-nothing: if any ID does not exist the
    /// whole batch is rolled back.
    pub async fn delete_many(&self, file_ids: &[Uuid]) -> AppResult<Vec<String>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin delete", e))?;

        let storage_paths: Vec<String> = sqlx::query_scalar(
            "DELETE FROM files WHERE id = ANY($1) RETURNING storage_path",
        )
        .bind(file_ids)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete files", e))?;

        if storage_paths.len() != file_ids.len() {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back delete", e)
            })?;
            return Err(AppError::not_found(format!(
                "Delete aborted: {} of {} files not found",
                file_ids.len() - storage_paths.len(),
                file_ids.len()
            )));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit delete", e)
        })?;

        Ok(storage_paths)
    }

    /// Count files in a directory.
    pub async fn count_in_directory(&self, directory: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE directory = $1")
            .bind(directory)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))
    }

    /// Count total files.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))
    }

    /// Total size of all files in bytes.
    pub async fn total_size_bytes(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COALESCE(SUM(size_bytes), 0) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to calculate storage size", e)
            })
    }

    /// Count files whose extension derives to the image kind.
    pub async fn count_images(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE lower(original_name) ~ $1")
            .bind(IMAGE_NAME_PATTERN)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count images", e))
    }
}
