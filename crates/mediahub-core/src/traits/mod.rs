//! Abstract interfaces between MediaHub crates.

pub mod storage;

pub use storage::BlobStore;
