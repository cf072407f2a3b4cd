//! Directory listing and CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use mediahub_entity::directory::model::Directory;
use mediahub_service::directory::service::{CreateDirectoryRequest, DirectoryListing};

use crate::dto::request::{validate, CreateDirectoryBody, ListingQuery};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::ApiToken;
use crate::state::AppState;

/// GET /api/listing?path=/docs
pub async fn listing(
    State(state): State<AppState>,
    _auth: ApiToken,
    Query(query): Query<ListingQuery>,
) -> Result<Json<DirectoryListing>, ApiError> {
    let listing = state.directory_service.listing(&query.path).await?;
    Ok(Json(listing))
}

/// POST /api/directories
pub async fn create_directory(
    State(state): State<AppState>,
    _auth: ApiToken,
    Json(body): Json<CreateDirectoryBody>,
) -> Result<(StatusCode, Json<Directory>), ApiError> {
    validate(&body)?;

    let directory = state
        .directory_service
        .create(CreateDirectoryRequest {
            name: body.name,
            parent_path: body.parent_path,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(directory)))
}

/// DELETE /api/directories/{id}
pub async fn delete_directory(
    State(state): State<AppState>,
    _auth: ApiToken,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.directory_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Directory deleted")))
}
