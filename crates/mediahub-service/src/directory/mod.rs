//! Directory operations.

pub mod service;

pub use service::{CreateDirectoryRequest, DirectoryListing, DirectoryService};
