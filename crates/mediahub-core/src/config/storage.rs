//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data (blobs, logs).
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum size of a single uploaded file in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Lowercase file extensions accepted for upload. An empty list
    /// accepts every extension.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Public base URL under which uploaded files are served, used to
    /// build each file's retrieval `url`.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            max_upload_size_bytes: default_max_upload(),
            allowed_extensions: default_allowed_extensions(),
            public_base_url: default_public_base_url(),
        }
    }
}

impl StorageConfig {
    /// Whether the given lowercase extension is accepted for upload.
    pub fn extension_allowed(&self, ext: &str) -> bool {
        self.allowed_extensions.is_empty() || self.allowed_extensions.iter().any(|e| e == ext)
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MB
}

fn default_allowed_extensions() -> Vec<String> {
    [
        "jpg", "jpeg", "png", "gif", "webp", "svg", "bmp", "ico", "mp4", "webm", "mov", "avi",
        "mkv", "mp3", "wav", "ogg", "flac", "m4a", "pdf", "doc", "docx", "xls", "xlsx", "ppt",
        "pptx", "txt", "rtf", "odt", "epub", "zip", "rar", "7z", "tar", "gz", "html", "css", "js",
        "ts", "json", "xml", "py", "java", "cpp", "c", "rs",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_public_base_url() -> String {
    "/uploads".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_ten_megabytes() {
        let cfg = StorageConfig::default();
        assert_eq!(cfg.max_upload_size_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn empty_allow_list_accepts_everything() {
        let cfg = StorageConfig {
            allowed_extensions: Vec::new(),
            ..StorageConfig::default()
        };
        assert!(cfg.extension_allowed("exe"));
    }

    #[test]
    fn allow_list_is_exact_match() {
        let cfg = StorageConfig::default();
        assert!(cfg.extension_allowed("png"));
        assert!(!cfg.extension_allowed("exe"));
    }
}
