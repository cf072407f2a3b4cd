//! Storage statistics handler.

use axum::extract::State;
use axum::Json;

use mediahub_service::stats::StorageStats;

use crate::error::ApiError;
use crate::extractors::ApiToken;
use crate::state::AppState;

/// GET /api/stats
pub async fn stats(
    State(state): State<AppState>,
    _auth: ApiToken,
) -> Result<Json<StorageStats>, ApiError> {
    let stats = state.stats_service.stats().await?;
    Ok(Json(stats))
}
