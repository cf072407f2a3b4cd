//! # mediahub-service
//!
//! Business logic for the MediaHub file-storage manager. Services
//! orchestrate repositories and the blob store; every mutation logs a
//! structured event and maps failures into [`mediahub_core::AppError`].

pub mod directory;
pub mod file;
pub mod stats;
