//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::file::kind::FileKind;

/// A file stored in MediaHub.
///
/// The identifier is stable across rename and move; only `original_name`
/// and `directory` are mutable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// The file name as uploaded (including extension).
    pub original_name: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Public retrieval URL.
    pub url: String,
    /// Path of the owning directory (e.g. `/photos`).
    pub directory: String,
    /// Blob-store key. Stable across rename and move.
    pub storage_path: String,
    /// When the file was uploaded.
    pub created_at: DateTime<Utc>,
    /// When the file was last renamed or moved.
    pub updated_at: DateTime<Utc>,
}

impl StoredFile {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.original_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.original_name)
            .map(|ext| ext.to_lowercase())
    }

    /// The derived kind, computed from the extension lookup table.
    /// Never stored server-side.
    pub fn kind(&self) -> FileKind {
        self.extension()
            .map(|ext| FileKind::from_extension(&ext))
            .unwrap_or(FileKind::Other)
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStoredFile {
    /// The file name as uploaded.
    pub original_name: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Public retrieval URL.
    pub url: String,
    /// Path of the owning directory.
    pub directory: String,
    /// Blob-store key.
    pub storage_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_named(name: &str) -> StoredFile {
        StoredFile {
            id: Uuid::new_v4(),
            original_name: name.to_string(),
            size_bytes: 1,
            url: String::new(),
            directory: "/".to_string(),
            storage_path: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_named("Photo.JPG").extension(), Some("jpg".into()));
    }

    #[test]
    fn no_extension_means_no_kind_match() {
        let f = file_named("README");
        assert_eq!(f.extension(), None);
        assert_eq!(f.kind(), FileKind::Other);
    }
}
