//! View state for the file browser.

use serde::{Deserialize, Serialize};

use mediahub_core::types::sorting::{SortKey, SortOrder};
use mediahub_entity::file::kind::FileKind;
use mediahub_entity::file::model::StoredFile;

/// Layout of the file listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Tile grid.
    #[default]
    Grid,
    /// Detail rows.
    List,
}

/// Process-local, non-persisted view settings.
///
/// The display pipeline consumes this as-is: filter by `filter_kind`,
/// then search by `search_query`, then sort by `sort_by`/`sort_order`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    /// Grid or list layout.
    pub view_mode: ViewMode,
    /// Attribute the listing is sorted by.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Kind filter. `None` keeps every file.
    pub filter_kind: Option<FileKind>,
    /// Case-insensitive substring match on the original name. Empty
    /// passes everything.
    pub search_query: String,
}

/// The inline viewer chosen for a file preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Inline image viewer.
    Image { url: String },
    /// Inline video player.
    Video { url: String },
    /// Inline audio player.
    Audio { url: String },
    /// Icon plus file name, for kinds with no inline viewer.
    Fallback { kind: FileKind, name: String },
}

impl Preview {
    /// Pick the viewer for a file by its derived kind.
    pub fn for_file(file: &StoredFile) -> Self {
        match file.kind() {
            FileKind::Image => Self::Image {
                url: file.url.clone(),
            },
            FileKind::Video => Self::Video {
                url: file.url.clone(),
            },
            FileKind::Audio => Self::Audio {
                url: file.url.clone(),
            },
            kind => Self::Fallback {
                kind,
                name: file.original_name.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn file_named(name: &str) -> StoredFile {
        StoredFile {
            id: Uuid::new_v4(),
            original_name: name.to_string(),
            size_bytes: 1,
            url: format!("/uploads/{name}"),
            directory: "/".to_string(),
            storage_path: name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn media_kinds_get_inline_viewers() {
        assert!(matches!(
            Preview::for_file(&file_named("a.png")),
            Preview::Image { .. }
        ));
        assert!(matches!(
            Preview::for_file(&file_named("a.mp4")),
            Preview::Video { .. }
        ));
        assert!(matches!(
            Preview::for_file(&file_named("a.mp3")),
            Preview::Audio { .. }
        ));
    }

    #[test]
    fn non_media_kinds_fall_back_to_icon_and_name() {
        let preview = Preview::for_file(&file_named("report.pdf"));
        assert_eq!(
            preview,
            Preview::Fallback {
                kind: FileKind::Document,
                name: "report.pdf".to_string()
            }
        );
    }
}
