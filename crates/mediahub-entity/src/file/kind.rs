//! Derived file kind.
//!
//! The kind is computed from a static extension lookup table and is never
//! persisted; the admin UI uses it for filtering, icons, and choosing a
//! preview viewer.

use serde::{Deserialize, Serialize};

/// Category derived from a file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Raster and vector images.
    Image,
    /// Video containers.
    Video,
    /// Audio formats.
    Audio,
    /// Office documents, PDFs, plain text.
    Document,
    /// Compressed archives.
    Archive,
    /// Source code and markup.
    Code,
    /// Anything not matched by the lookup table.
    Other,
}

impl FileKind {
    /// Look up the kind for a lowercase extension (without the dot).
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" | "bmp" | "ico" => Self::Image,
            "mp4" | "webm" | "mov" | "avi" | "mkv" => Self::Video,
            "mp3" | "wav" | "ogg" | "flac" | "m4a" => Self::Audio,
            "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "txt" | "rtf" | "odt"
            | "epub" => Self::Document,
            "zip" | "rar" | "7z" | "tar" | "gz" => Self::Archive,
            "html" | "css" | "js" | "ts" | "json" | "xml" | "py" | "java" | "cpp" | "c" | "rs" => {
                Self::Code
            }
            _ => Self::Other,
        }
    }

    /// Stable lowercase label, used as the sort key for type ordering
    /// and as the wire value of kind filters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Archive => "archive",
            Self::Code => "code",
            Self::Other => "other",
        }
    }

    /// Whether an inline preview exists for this kind. Everything else
    /// falls back to an icon plus the file name.
    pub fn previewable(&self) -> bool {
        matches!(self, Self::Image | Self::Video | Self::Audio)
    }
}

impl std::str::FromStr for FileKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "document" => Ok(Self::Document),
            "archive" => Ok(Self::Archive),
            "code" => Ok(Self::Code),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_common_extensions() {
        assert_eq!(FileKind::from_extension("png"), FileKind::Image);
        assert_eq!(FileKind::from_extension("mp4"), FileKind::Video);
        assert_eq!(FileKind::from_extension("flac"), FileKind::Audio);
        assert_eq!(FileKind::from_extension("pdf"), FileKind::Document);
        assert_eq!(FileKind::from_extension("7z"), FileKind::Archive);
        assert_eq!(FileKind::from_extension("rs"), FileKind::Code);
        assert_eq!(FileKind::from_extension("blend"), FileKind::Other);
    }

    #[test]
    fn only_media_kinds_are_previewable() {
        assert!(FileKind::Image.previewable());
        assert!(FileKind::Video.previewable());
        assert!(FileKind::Audio.previewable());
        assert!(!FileKind::Document.previewable());
        assert!(!FileKind::Archive.previewable());
        assert!(!FileKind::Code.previewable());
        assert!(!FileKind::Other.previewable());
    }

    #[test]
    fn label_round_trips_through_from_str() {
        for kind in [
            FileKind::Image,
            FileKind::Video,
            FileKind::Audio,
            FileKind::Document,
            FileKind::Archive,
            FileKind::Code,
            FileKind::Other,
        ] {
            assert_eq!(kind.label().parse::<FileKind>(), Ok(kind));
        }
    }
}
