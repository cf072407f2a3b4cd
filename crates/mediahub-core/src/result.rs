//! Result alias for the unified error type.

use crate::error::AppError;

/// Application-wide result alias.
pub type AppResult<T> = Result<T, AppError>;
