//! # mediahub-entity
//!
//! Domain entities shared by the server and the browser crate.

pub mod directory;
pub mod file;
