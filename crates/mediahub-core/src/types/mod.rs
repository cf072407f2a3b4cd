//! Shared value types.

pub mod pagination;
pub mod sorting;

pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortKey, SortOrder};
