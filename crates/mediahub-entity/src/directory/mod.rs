//! Directory entity.

pub mod breadcrumb;
pub mod model;

pub use breadcrumb::{breadcrumbs, Breadcrumb};
pub use model::{CreateDirectory, Directory};
