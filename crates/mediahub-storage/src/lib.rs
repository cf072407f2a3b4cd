//! # mediahub-storage
//!
//! Blob storage for uploaded file content. Metadata lives in the
//! database; this crate only moves bytes.

pub mod local;

pub use local::{mime_from_name, LocalBlobStore};
