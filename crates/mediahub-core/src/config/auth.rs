//! API token configuration.
//!
//! MediaHub sits behind an external login flow; the admin frontend stores
//! a bearer token and attaches it to every request. The server side only
//! verifies that token against a configured value.

use serde::{Deserialize, Serialize};

/// Bearer-token verification settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// The static API token expected in the `Authorization` header.
    /// An empty value disables the check (development only).
    #[serde(default)]
    pub api_token: String,
}

impl AuthConfig {
    /// Whether bearer-token verification is active.
    pub fn enabled(&self) -> bool {
        !self.api_token.is_empty()
    }
}
