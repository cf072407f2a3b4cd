//! Upload progress tracking.

use std::collections::HashMap;

/// Ephemeral map from target directory path to percent complete.
///
/// An entry exists only while a batch is in flight for that directory;
/// it is removed when the batch resolves, success or failure. Concurrent
/// uploads to different directories track independent entries.
#[derive(Debug, Clone, Default)]
pub struct UploadProgressMap {
    entries: HashMap<String, u8>,
}

impl UploadProgressMap {
    /// Record the start of a batch for a directory.
    pub fn begin(&mut self, directory: &str) {
        self.entries.insert(directory.to_string(), 0);
    }

    /// Update the percent complete for an in-flight batch.
    pub fn set(&mut self, directory: &str, percent: u8) {
        if let Some(entry) = self.entries.get_mut(directory) {
            *entry = percent.min(100);
        }
    }

    /// Remove the entry once the batch resolves.
    pub fn finish(&mut self, directory: &str) {
        self.entries.remove(directory);
    }

    /// Percent complete for a directory, if a batch is in flight.
    pub fn percent(&self, directory: &str) -> Option<u8> {
        self.entries.get(directory).copied()
    }

    /// Whether a batch is in flight for a directory.
    pub fn is_uploading(&self, directory: &str) -> bool {
        self.entries.contains_key(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_lives_only_while_in_flight() {
        let mut map = UploadProgressMap::default();
        assert_eq!(map.percent("/photos"), None);

        map.begin("/photos");
        assert_eq!(map.percent("/photos"), Some(0));

        map.set("/photos", 60);
        assert_eq!(map.percent("/photos"), Some(60));

        map.finish("/photos");
        assert_eq!(map.percent("/photos"), None);
    }

    #[test]
    fn directories_track_independent_batches() {
        let mut map = UploadProgressMap::default();
        map.begin("/a");
        map.begin("/b");
        map.set("/a", 40);

        assert_eq!(map.percent("/a"), Some(40));
        assert_eq!(map.percent("/b"), Some(0));

        map.finish("/a");
        assert!(!map.is_uploading("/a"));
        assert!(map.is_uploading("/b"));
    }

    #[test]
    fn percent_is_clamped_to_one_hundred() {
        let mut map = UploadProgressMap::default();
        map.begin("/x");
        map.set("/x", 250);
        assert_eq!(map.percent("/x"), Some(100));
    }

    #[test]
    fn set_on_unknown_directory_is_ignored() {
        let mut map = UploadProgressMap::default();
        map.set("/nowhere", 50);
        assert_eq!(map.percent("/nowhere"), None);
    }
}
