//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use mediahub_core::error::AppError;
use mediahub_core::types::pagination::PageRequest;

/// Query parameters for the directory listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Directory path to list. Defaults to the root.
    #[serde(default = "default_path")]
    pub path: String,
}

/// Query parameters for the paginated file listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListQuery {
    /// Owning directory path.
    #[serde(default = "default_path")]
    pub directory: String,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub per_page: Option<u64>,
}

impl FileListQuery {
    /// Convert the query parameters into a clamped page request.
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.per_page.unwrap_or(defaults.per_page),
        )
    }
}

/// Create directory request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDirectoryBody {
    /// Directory name (single path segment).
    #[validate(length(min = 1, max = 255, message = "Directory name is required"))]
    pub name: String,
    /// Path of the parent directory.
    #[serde(default = "default_path")]
    pub parent_path: String,
}

/// Rename file request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenameFileBody {
    /// The new file name.
    #[validate(length(min = 1, max = 255, message = "File name is required"))]
    pub new_name: String,
}

/// Bulk move request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoveFilesBody {
    /// Identifiers of the files to move.
    #[validate(length(min = 1, message = "At least one file must be selected"))]
    pub file_ids: Vec<Uuid>,
    /// Destination directory path.
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
}

/// Bulk delete request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkDeleteBody {
    /// Identifiers of the files to delete.
    #[validate(length(min = 1, message = "At least one file must be selected"))]
    pub file_ids: Vec<Uuid>,
}

/// Run `validator` checks and map the failure into the shared error type.
pub fn validate(body: &impl Validate) -> Result<(), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

fn default_path() -> String {
    "/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_directory_name_fails_validation() {
        let body = CreateDirectoryBody {
            name: String::new(),
            parent_path: "/".to_string(),
        };
        assert!(validate(&body).is_err());
    }

    #[test]
    fn empty_bulk_delete_fails_validation() {
        let body = BulkDeleteBody { file_ids: vec![] };
        assert!(validate(&body).is_err());
    }

    #[test]
    fn file_list_query_clamps_page_size() {
        let query = FileListQuery {
            directory: "/docs".to_string(),
            page: Some(0),
            per_page: Some(10_000),
        };
        let page = query.page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 500);
    }
}
