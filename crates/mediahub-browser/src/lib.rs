//! # mediahub-browser
//!
//! Client-side state engine for the MediaHub file browser. It owns the
//! current-directory listing, the selection set, the upload-progress map,
//! and the view state, and orchestrates every operation against an
//! abstract [`CatalogApi`].
//!
//! Design rules:
//! - State changes go through named transitions on [`FileBrowser`], never
//!   ad-hoc field mutation from the outside.
//! - The displayed list is a pure function of `(listing, view state)`,
//!   computed by [`pipeline::display_list`] and memoized on its inputs.
//! - Overlapping listing fetches are resolved with a monotonic fetch
//!   token; responses carrying a stale token are discarded.

pub mod api;
pub mod browser;
pub mod pipeline;
pub mod progress;
pub mod rest;
pub mod selection;
pub mod view;

pub use api::{CatalogApi, Listing, StorageStats, UploadFile};
pub use browser::{FetchToken, FileBrowser};
pub use progress::UploadProgressMap;
pub use rest::RestCatalogApi;
pub use selection::SelectionSet;
pub use view::{Preview, ViewMode, ViewState};
