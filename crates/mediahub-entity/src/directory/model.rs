//! Directory entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The implicit root path. The root itself is never stored as a row.
pub const ROOT_PATH: &str = "/";

/// A directory in the storage hierarchy.
///
/// `path` is unique and slash-delimited; every non-root directory's
/// `parent_path` references an existing directory's path (or the root).
/// Cycles are impossible by construction: directories are only ever
/// created under an existing parent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Directory {
    /// Unique directory identifier.
    pub id: Uuid,
    /// Absolute path (e.g. `/photos/events`).
    pub path: String,
    /// Directory name (last path segment).
    pub name: String,
    /// Path of the parent directory (`"/"` for top-level directories).
    /// Nullable only to represent the implicit root when one is
    /// materialized in a listing.
    pub parent_path: Option<String>,
    /// When the directory was created.
    pub created_at: DateTime<Utc>,
}

impl Directory {
    /// Whether this directory sits directly under the root.
    pub fn is_top_level(&self) -> bool {
        self.parent_path.as_deref() == Some(ROOT_PATH)
    }
}

/// Data required to create a new directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDirectory {
    /// Absolute path of the new directory.
    pub path: String,
    /// Directory name.
    pub name: String,
    /// Path of the parent directory.
    pub parent_path: String,
}

/// Join a parent path and a child name into an absolute path.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent == ROOT_PATH {
        format!("/{name}")
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}
