//! The file browser state engine.
//!
//! [`FileBrowser`] owns all mutable state of the file manager view and
//! exposes one named transition per user action. Every operation follows
//! the same shape: idle, issue the request, then on success refresh the
//! listing and return to idle; on failure the prior state is kept and the
//! error propagates to the caller for display. There is no automatic
//! retry.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use mediahub_core::error::AppError;
use mediahub_core::types::sorting::{SortKey, SortOrder};
use mediahub_core::AppResult;
use mediahub_entity::directory::breadcrumb::{breadcrumbs, Breadcrumb};
use mediahub_entity::directory::model::ROOT_PATH;
use mediahub_entity::file::kind::FileKind;
use mediahub_entity::file::model::StoredFile;

use crate::api::{CatalogApi, Listing, StorageStats, UploadFile};
use crate::pipeline;
use crate::progress::UploadProgressMap;
use crate::selection::SelectionSet;
use crate::view::{Preview, ViewMode, ViewState};

/// Token identifying one listing fetch.
///
/// Rapid navigation can leave several fetches in flight at once; only the
/// response carrying the most recently issued token may update the
/// listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Client-side state of the file manager.
pub struct FileBrowser {
    api: Arc<dyn CatalogApi>,
    current_path: String,
    listing: Listing,
    /// Bumped whenever the listing is replaced; part of the display
    /// cache key.
    listing_revision: u64,
    /// Most recently issued fetch token.
    fetch_seq: u64,
    selection: SelectionSet,
    progress: UploadProgressMap,
    view: ViewState,
    stats: Option<StorageStats>,
    display_cache: Option<(u64, ViewState, Vec<StoredFile>)>,
}

impl FileBrowser {
    /// Creates a browser rooted at `/` with an empty listing. Call
    /// [`navigate`](Self::navigate) to load the initial view.
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            current_path: ROOT_PATH.to_string(),
            listing: Listing::default(),
            listing_revision: 0,
            fetch_seq: 0,
            selection: SelectionSet::default(),
            progress: UploadProgressMap::default(),
            view: ViewState::default(),
            stats: None,
            display_cache: None,
        }
    }

    /// The directory whose contents are displayed.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// The raw fetched listing, before the display pipeline.
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// The bulk-operation selection.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// In-flight upload progress, keyed by target directory.
    pub fn upload_progress(&self) -> &UploadProgressMap {
        &self.progress
    }

    /// The current view settings.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Last successfully fetched storage statistics, if any.
    pub fn stats(&self) -> Option<StorageStats> {
        self.stats
    }

    /// Breadcrumb trail for the current path.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        breadcrumbs(&self.current_path)
    }

    /// The viewer to open for a file preview.
    pub fn preview(&self, file: &StoredFile) -> Preview {
        Preview::for_file(file)
    }

    // --- view-state transitions -----------------------------------------

    /// Switch between grid and list layout.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.view_mode = mode;
    }

    /// Change the sort key. Re-selecting the current key flips direction.
    pub fn set_sort_key(&mut self, key: SortKey) {
        if self.view.sort_by == key {
            self.view.sort_order = self.view.sort_order.reversed();
        } else {
            self.view.sort_by = key;
            self.view.sort_order = SortOrder::Asc;
        }
    }

    /// Change the sort direction.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.view.sort_order = order;
    }

    /// Change the kind filter. `None` shows every file.
    pub fn set_filter_kind(&mut self, kind: Option<FileKind>) {
        self.view.filter_kind = kind;
    }

    /// Change the search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.search_query = query.into();
    }

    /// The files to display: the fetched listing run through the
    /// filter, search, and sort pipeline. Memoized on the listing
    /// revision and view state.
    pub fn display_files(&mut self) -> &[StoredFile] {
        let fresh = match &self.display_cache {
            Some((revision, view, _)) => *revision == self.listing_revision && *view == self.view,
            None => false,
        };
        if !fresh {
            let shown = pipeline::display_list(&self.listing.files, &self.view);
            self.display_cache = Some((self.listing_revision, self.view.clone(), shown));
        }
        match &self.display_cache {
            Some((_, _, shown)) => shown,
            None => &[],
        }
    }

    // --- selection transitions ------------------------------------------

    /// Flip one file's selected state.
    pub fn toggle_selection(&mut self, id: Uuid) {
        self.selection.toggle(id);
    }

    /// The select-all toggle against the full current listing.
    pub fn toggle_select_all(&mut self) {
        let ids: Vec<Uuid> = self.listing.files.iter().map(|f| f.id).collect();
        self.selection.toggle_all(&ids);
    }

    // --- navigation -----------------------------------------------------

    /// Begin navigating to a directory: the current path changes, the
    /// selection is cleared, and a fresh fetch token is issued. The
    /// caller fetches the listing and hands it to
    /// [`apply_listing`](Self::apply_listing) with the token.
    pub fn begin_navigation(&mut self, path: &str) -> FetchToken {
        self.current_path = path.to_string();
        self.selection.clear();
        self.next_token()
    }

    /// Apply a fetched listing. Returns `false` and leaves the state
    /// untouched if a newer fetch has been issued since `token`.
    pub fn apply_listing(&mut self, token: FetchToken, listing: Listing) -> bool {
        if token.0 != self.fetch_seq {
            return false;
        }
        self.listing = listing;
        self.listing_revision += 1;
        self.display_cache = None;
        true
    }

    /// Navigate to a directory and load its listing.
    pub async fn navigate(&mut self, path: &str) -> AppResult<()> {
        let token = self.begin_navigation(path);
        let listing = self.api.fetch_listing(path).await?;
        self.apply_listing(token, listing);
        Ok(())
    }

    /// Re-fetch the current directory's listing, keeping the selection.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let token = self.next_token();
        let listing = self.api.fetch_listing(&self.current_path.clone()).await?;
        self.apply_listing(token, listing);
        Ok(())
    }

    // --- operations -----------------------------------------------------

    /// Upload a batch of files into the current directory.
    ///
    /// A progress entry for the target path exists exactly while the
    /// request is in flight. On success the listing is re-fetched once
    /// and the stats panel refreshed best-effort.
    pub async fn upload(&mut self, files: Vec<UploadFile>) -> AppResult<Vec<StoredFile>> {
        let target = self.current_path.clone();
        self.progress.begin(&target);

        let result = self.api.upload_files(&target, files).await;
        self.progress.finish(&target);

        let created = result?;
        self.refresh().await?;
        self.refresh_stats().await;
        Ok(created)
    }

    /// Create a folder under the current directory. Blank names (after
    /// trimming) are ignored without issuing a request; the submit
    /// control is disabled for them anyway.
    pub async fn create_directory(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        self.api
            .create_directory(name, &self.current_path.clone())
            .await?;
        self.refresh().await?;
        self.refresh_stats().await;
        Ok(())
    }

    /// Delete a subdirectory. Whether a non-empty directory may be
    /// deleted is the server's policy; a rejection surfaces as an error.
    pub async fn delete_directory(&mut self, id: Uuid) -> AppResult<()> {
        self.api.delete_directory(id).await?;
        self.refresh().await?;
        self.refresh_stats().await;
        Ok(())
    }

    /// Rename a file. Its identifier and directory are unchanged.
    pub async fn rename_file(&mut self, id: Uuid, new_name: &str) -> AppResult<StoredFile> {
        let renamed = self.api.rename_file(id, new_name).await?;
        self.refresh().await?;
        Ok(renamed)
    }

    /// Move every selected file to a destination directory, then clear
    /// the selection.
    pub async fn move_selection(&mut self, destination: &str) -> AppResult<()> {
        if self.selection.is_empty() {
            return Err(AppError::validation("No files selected to move"));
        }
        let ids = self.selection.ids();
        self.api.move_files(&ids, destination).await?;
        self.selection.clear();
        self.refresh().await?;
        self.refresh_stats().await;
        Ok(())
    }

    /// Delete every selected file in one bulk request, then clear the
    /// selection.
    pub async fn delete_selection(&mut self) -> AppResult<()> {
        if self.selection.is_empty() {
            return Err(AppError::validation("No files selected to delete"));
        }
        let ids = self.selection.ids();
        self.api.delete_files(&ids).await?;
        self.selection.clear();
        self.refresh().await?;
        self.refresh_stats().await;
        Ok(())
    }

    /// Delete a single file from its row or tile action.
    pub async fn delete_file(&mut self, id: Uuid) -> AppResult<()> {
        self.api.delete_file(id).await?;
        if self.selection.contains(id) {
            self.selection.toggle(id);
        }
        self.refresh().await?;
        self.refresh_stats().await;
        Ok(())
    }

    /// Refresh the storage-stats panel. Best-effort: a failure is logged
    /// and the previous value kept, never blocking other operations.
    pub async fn refresh_stats(&mut self) {
        match self.api.fetch_stats().await {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => warn!(error = %e, "Failed to refresh storage stats"),
        }
    }

    fn next_token(&mut self) -> FetchToken {
        self.fetch_seq += 1;
        FetchToken(self.fetch_seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use mediahub_entity::directory::model::Directory;

    #[derive(Default)]
    struct CatalogState {
        listings: HashMap<String, Listing>,
        listing_fetches: HashMap<String, usize>,
        create_dir_calls: usize,
        delete_requests: Vec<Vec<Uuid>>,
        move_requests: Vec<(Vec<Uuid>, String)>,
        upload_calls: usize,
        fail_uploads: bool,
        fail_moves: bool,
        fail_stats: bool,
    }

    /// In-memory catalog recording every request it serves.
    struct FakeCatalog {
        state: Mutex<CatalogState>,
    }

    impl FakeCatalog {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                state: Mutex::new(CatalogState::default()),
            })
        }

        fn with_files(path: &str, names: &[&str]) -> Arc<Self> {
            let catalog = Self::new();
            {
                let mut state = catalog.state.lock().unwrap();
                let listing = Listing {
                    path: path.to_string(),
                    directories: Vec::new(),
                    files: names.iter().map(|n| stored_file(path, n)).collect(),
                };
                state.listings.insert(path.to_string(), listing);
            }
            catalog
        }

        fn fetches_for(&self, path: &str) -> usize {
            self.state
                .lock()
                .unwrap()
                .listing_fetches
                .get(path)
                .copied()
                .unwrap_or(0)
        }
    }

    fn stored_file(directory: &str, name: &str) -> StoredFile {
        StoredFile {
            id: Uuid::new_v4(),
            original_name: name.to_string(),
            size_bytes: 100,
            url: format!("/uploads{directory}/{name}"),
            directory: directory.to_string(),
            storage_path: format!("{directory}/{name}"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl CatalogApi for FakeCatalog {
        async fn fetch_listing(&self, path: &str) -> AppResult<Listing> {
            let mut state = self.state.lock().unwrap();
            *state.listing_fetches.entry(path.to_string()).or_insert(0) += 1;
            Ok(state.listings.get(path).cloned().unwrap_or(Listing {
                path: path.to_string(),
                ..Listing::default()
            }))
        }

        async fn create_directory(&self, name: &str, parent_path: &str) -> AppResult<Directory> {
            let mut state = self.state.lock().unwrap();
            state.create_dir_calls += 1;
            Ok(Directory {
                id: Uuid::new_v4(),
                path: format!("{}/{name}", parent_path.trim_end_matches('/')),
                name: name.to_string(),
                parent_path: Some(parent_path.to_string()),
                created_at: Utc::now(),
            })
        }

        async fn delete_directory(&self, _id: Uuid) -> AppResult<()> {
            Ok(())
        }

        async fn upload_files(
            &self,
            directory: &str,
            files: Vec<UploadFile>,
        ) -> AppResult<Vec<StoredFile>> {
            let mut state = self.state.lock().unwrap();
            state.upload_calls += 1;
            if state.fail_uploads {
                return Err(AppError::validation("File type '.exe' is not allowed"));
            }
            let created: Vec<StoredFile> = files
                .iter()
                .map(|f| stored_file(directory, &f.file_name))
                .collect();
            state
                .listings
                .entry(directory.to_string())
                .or_insert_with(|| Listing {
                    path: directory.to_string(),
                    ..Listing::default()
                })
                .files
                .extend(created.clone());
            Ok(created)
        }

        async fn rename_file(&self, id: Uuid, new_name: &str) -> AppResult<StoredFile> {
            let mut state = self.state.lock().unwrap();
            for listing in state.listings.values_mut() {
                if let Some(file) = listing.files.iter_mut().find(|f| f.id == id) {
                    file.original_name = new_name.to_string();
                    return Ok(file.clone());
                }
            }
            Err(AppError::not_found("File not found"))
        }

        async fn move_files(&self, file_ids: &[Uuid], destination: &str) -> AppResult<()> {
            let mut state = self.state.lock().unwrap();
            state
                .move_requests
                .push((file_ids.to_vec(), destination.to_string()));
            if state.fail_moves {
                return Err(AppError::conflict(format!(
                    "A file with the same name already exists in '{destination}'"
                )));
            }

            let mut moved = Vec::new();
            for listing in state.listings.values_mut() {
                let mut kept = Vec::new();
                for file in listing.files.drain(..) {
                    if file_ids.contains(&file.id) {
                        moved.push(file);
                    } else {
                        kept.push(file);
                    }
                }
                listing.files = kept;
            }
            for mut file in moved {
                file.directory = destination.to_string();
                state
                    .listings
                    .entry(destination.to_string())
                    .or_insert_with(|| Listing {
                        path: destination.to_string(),
                        ..Listing::default()
                    })
                    .files
                    .push(file);
            }
            Ok(())
        }

        async fn delete_files(&self, file_ids: &[Uuid]) -> AppResult<()> {
            let mut state = self.state.lock().unwrap();
            state.delete_requests.push(file_ids.to_vec());
            for listing in state.listings.values_mut() {
                listing.files.retain(|f| !file_ids.contains(&f.id));
            }
            Ok(())
        }

        async fn delete_file(&self, id: Uuid) -> AppResult<()> {
            self.delete_files(&[id]).await
        }

        async fn fetch_stats(&self) -> AppResult<StorageStats> {
            let state = self.state.lock().unwrap();
            if state.fail_stats {
                return Err(AppError::service_unavailable("stats offline"));
            }
            let total_files = state
                .listings
                .values()
                .map(|l| l.files.len() as i64)
                .sum::<i64>();
            Ok(StorageStats {
                total_files,
                total_size: total_files * 100,
                total_directories: 0,
                image_count: 0,
            })
        }
    }

    #[tokio::test]
    async fn navigate_loads_listing_and_clears_selection() {
        let catalog = FakeCatalog::with_files("/docs", &["a.pdf", "b.png"]);
        let mut browser = FileBrowser::new(catalog.clone());

        browser.navigate("/docs").await.unwrap();
        let id = browser.listing().files[0].id;
        browser.toggle_selection(id);
        assert_eq!(browser.selection().len(), 1);

        browser.navigate("/").await.unwrap();
        assert_eq!(browser.current_path(), "/");
        assert!(browser.selection().is_empty());
    }

    #[test]
    fn stale_listing_response_is_discarded() {
        let catalog = FakeCatalog::new();
        let mut browser = FileBrowser::new(catalog);

        let slow = browser.begin_navigation("/a");
        let current = browser.begin_navigation("/b");

        let listing_a = Listing {
            path: "/a".to_string(),
            ..Listing::default()
        };
        let listing_b = Listing {
            path: "/b".to_string(),
            directories: Vec::new(),
            files: vec![stored_file("/b", "kept.txt")],
        };

        // The response for /b arrives first, then the stale one for /a.
        assert!(browser.apply_listing(current, listing_b));
        assert!(!browser.apply_listing(slow, listing_a));

        assert_eq!(browser.current_path(), "/b");
        assert_eq!(browser.listing().path, "/b");
        assert_eq!(browser.listing().files.len(), 1);
    }

    #[tokio::test]
    async fn upload_refetches_listing_exactly_once() {
        let catalog = FakeCatalog::with_files("/photos", &[]);
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/photos").await.unwrap();
        assert_eq!(catalog.fetches_for("/photos"), 1);
        assert!(!browser.upload_progress().is_uploading("/photos"));

        let created = browser
            .upload(vec![UploadFile {
                file_name: "sunset.jpg".to_string(),
                data: bytes::Bytes::from_static(b"jpeg"),
            }])
            .await
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(catalog.fetches_for("/photos"), 2);
        assert!(!browser.upload_progress().is_uploading("/photos"));
        assert!(browser
            .listing()
            .files
            .iter()
            .any(|f| f.original_name == "sunset.jpg"));
    }

    #[tokio::test]
    async fn failed_upload_clears_progress_and_skips_refetch() {
        let catalog = FakeCatalog::with_files("/photos", &[]);
        catalog.state.lock().unwrap().fail_uploads = true;
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/photos").await.unwrap();

        let result = browser
            .upload(vec![UploadFile {
                file_name: "tool.exe".to_string(),
                data: bytes::Bytes::from_static(b"mz"),
            }])
            .await;

        assert!(result.is_err());
        assert!(!browser.upload_progress().is_uploading("/photos"));
        assert_eq!(catalog.fetches_for("/photos"), 1);
    }

    #[tokio::test]
    async fn blank_folder_name_issues_no_request() {
        let catalog = FakeCatalog::with_files("/docs", &[]);
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/docs").await.unwrap();

        browser.create_directory("   ").await.unwrap();
        browser.create_directory("").await.unwrap();

        assert_eq!(catalog.state.lock().unwrap().create_dir_calls, 0);
        assert_eq!(catalog.fetches_for("/docs"), 1);
    }

    #[tokio::test]
    async fn folder_creation_trims_name_and_refreshes() {
        let catalog = FakeCatalog::with_files("/docs", &[]);
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/docs").await.unwrap();

        browser.create_directory("  drafts  ").await.unwrap();

        assert_eq!(catalog.state.lock().unwrap().create_dir_calls, 1);
        assert_eq!(catalog.fetches_for("/docs"), 2);
    }

    #[tokio::test]
    async fn bulk_delete_sends_one_request_and_clears_selection() {
        let catalog = FakeCatalog::with_files("/docs", &["a.txt", "b.txt", "c.txt"]);
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/docs").await.unwrap();

        browser.toggle_select_all();
        let selected = browser.selection().ids();
        assert_eq!(selected.len(), 3);

        browser.delete_selection().await.unwrap();

        let state = catalog.state.lock().unwrap();
        assert_eq!(state.delete_requests.len(), 1);
        let mut requested = state.delete_requests[0].clone();
        let mut expected = selected.clone();
        requested.sort();
        expected.sort();
        assert_eq!(requested, expected);
        drop(state);

        assert!(browser.selection().is_empty());
        assert!(browser
            .listing()
            .files
            .iter()
            .all(|f| !selected.contains(&f.id)));
    }

    #[tokio::test]
    async fn delete_with_empty_selection_is_rejected_client_side() {
        let catalog = FakeCatalog::with_files("/docs", &["a.txt"]);
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/docs").await.unwrap();

        assert!(browser.delete_selection().await.is_err());
        assert!(catalog.state.lock().unwrap().delete_requests.is_empty());
    }

    #[tokio::test]
    async fn move_selection_reassigns_directory_and_clears_selection() {
        let catalog = FakeCatalog::with_files("/docs", &["a.txt", "b.txt"]);
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/docs").await.unwrap();

        browser.toggle_select_all();
        let moved_ids = browser.selection().ids();
        browser.move_selection("/archive").await.unwrap();

        let state = catalog.state.lock().unwrap();
        assert_eq!(state.move_requests.len(), 1);
        assert_eq!(state.move_requests[0].1, "/archive");
        let archived = &state.listings["/archive"];
        assert_eq!(archived.files.len(), 2);
        assert!(archived.files.iter().all(|f| f.directory == "/archive"));
        assert!(archived.files.iter().all(|f| moved_ids.contains(&f.id)));
        drop(state);

        assert!(browser.selection().is_empty());
        assert!(browser.listing().files.is_empty());
    }

    #[tokio::test]
    async fn move_into_name_collision_surfaces_conflict_and_keeps_selection() {
        let catalog = FakeCatalog::with_files("/docs", &["report.pdf"]);
        catalog.state.lock().unwrap().fail_moves = true;
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/docs").await.unwrap();

        browser.toggle_select_all();
        let err = browser.move_selection("/archive").await.unwrap_err();

        assert_eq!(err.kind, mediahub_core::error::ErrorKind::Conflict);
        assert!(err.message.contains("/archive"));
        assert_eq!(browser.selection().len(), 1);
        assert_eq!(catalog.fetches_for("/docs"), 1);
    }

    #[tokio::test]
    async fn rename_preserves_id_and_directory() {
        let catalog = FakeCatalog::with_files("/docs", &["old.txt"]);
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/docs").await.unwrap();
        let original = browser.listing().files[0].clone();

        let renamed = browser.rename_file(original.id, "new.txt").await.unwrap();

        assert_eq!(renamed.id, original.id);
        assert_eq!(renamed.directory, original.directory);
        assert_eq!(renamed.original_name, "new.txt");

        let refreshed = browser
            .listing()
            .files
            .iter()
            .find(|f| f.id == original.id)
            .cloned()
            .unwrap();
        assert_eq!(refreshed.original_name, "new.txt");
        assert_eq!(refreshed.directory, "/docs");
    }

    #[tokio::test]
    async fn select_all_toggles_between_full_and_empty() {
        let catalog = FakeCatalog::with_files("/docs", &["a.txt", "b.txt"]);
        let mut browser = FileBrowser::new(catalog);
        browser.navigate("/docs").await.unwrap();

        browser.toggle_select_all();
        assert_eq!(browser.selection().len(), 2);

        browser.toggle_select_all();
        assert!(browser.selection().is_empty());
    }

    #[tokio::test]
    async fn stats_failure_never_blocks_the_operation() {
        let catalog = FakeCatalog::with_files("/photos", &[]);
        catalog.state.lock().unwrap().fail_stats = true;
        let mut browser = FileBrowser::new(catalog.clone());
        browser.navigate("/photos").await.unwrap();

        browser
            .upload(vec![UploadFile {
                file_name: "ok.png".to_string(),
                data: bytes::Bytes::from_static(b"png"),
            }])
            .await
            .unwrap();

        assert!(browser.stats().is_none());
        assert_eq!(browser.listing().files.len(), 1);
    }

    #[tokio::test]
    async fn stats_refresh_after_upload_is_best_effort_success() {
        let catalog = FakeCatalog::with_files("/photos", &[]);
        let mut browser = FileBrowser::new(catalog);
        browser.navigate("/photos").await.unwrap();

        browser
            .upload(vec![UploadFile {
                file_name: "ok.png".to_string(),
                data: bytes::Bytes::from_static(b"png"),
            }])
            .await
            .unwrap();

        let stats = browser.stats().unwrap();
        assert_eq!(stats.total_files, 1);
    }

    #[tokio::test]
    async fn display_files_follows_view_state_changes() {
        let catalog = FakeCatalog::with_files("/docs", &["b.png", "a.pdf", "c.png"]);
        let mut browser = FileBrowser::new(catalog);
        browser.navigate("/docs").await.unwrap();

        assert_eq!(browser.display_files().len(), 3);

        browser.set_filter_kind(Some(FileKind::Image));
        let shown: Vec<String> = browser
            .display_files()
            .iter()
            .map(|f| f.original_name.clone())
            .collect();
        assert_eq!(shown, ["b.png", "c.png"]);

        browser.set_search_query("C.");
        let shown: Vec<String> = browser
            .display_files()
            .iter()
            .map(|f| f.original_name.clone())
            .collect();
        assert_eq!(shown, ["c.png"]);
    }

    #[tokio::test]
    async fn reselecting_sort_key_flips_direction() {
        let catalog = FakeCatalog::new();
        let mut browser = FileBrowser::new(catalog);

        browser.set_sort_key(SortKey::Size);
        assert_eq!(browser.view().sort_by, SortKey::Size);
        assert_eq!(browser.view().sort_order, SortOrder::Asc);

        browser.set_sort_key(SortKey::Size);
        assert_eq!(browser.view().sort_order, SortOrder::Desc);
    }

    #[tokio::test]
    async fn breadcrumbs_follow_the_current_path() {
        let catalog = FakeCatalog::new();
        let mut browser = FileBrowser::new(catalog);
        browser.navigate("/photos/events").await.unwrap();

        let trail = browser.breadcrumbs();
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[0].name, "Root");
        assert_eq!(trail[2].path, "/photos/events");
    }
}
