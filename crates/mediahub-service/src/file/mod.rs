//! File operations.

pub mod service;
pub mod upload;

pub use service::{FileService, MoveFilesRequest, RenameFileRequest};
pub use upload::{UploadPart, UploadService};
