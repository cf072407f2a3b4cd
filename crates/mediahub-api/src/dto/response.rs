//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Simple acknowledgement response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Creates an acknowledgement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status, `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database connectivity, `connected` or `unavailable`.
    pub database: String,
}
