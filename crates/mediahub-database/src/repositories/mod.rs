//! Concrete repository implementations.

pub mod directory;
pub mod file;
