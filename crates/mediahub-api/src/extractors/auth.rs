//! `ApiToken` extractor that verifies the bearer token on every request.
//!
//! MediaHub sits behind an external login flow; the admin frontend
//! attaches a static bearer token to each request, which is checked
//! against the configured `auth.api_token`. An empty configured token
//! disables the check (development only).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use mediahub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Marker proving the request carried a valid bearer token.
#[derive(Debug, Clone, Copy)]
pub struct ApiToken;

impl FromRequestParts<AppState> for ApiToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.config.auth.enabled() {
            return Ok(ApiToken);
        }

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        if token != state.config.auth.api_token {
            return Err(AppError::unauthorized("Invalid API token").into());
        }

        Ok(ApiToken)
    }
}
