//! File listing, upload, mutation, and download handlers.

use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use uuid::Uuid;

use mediahub_core::error::AppError;
use mediahub_core::types::pagination::PageResponse;
use mediahub_entity::file::model::StoredFile;
use mediahub_service::file::service::{MoveFilesRequest, RenameFileRequest};
use mediahub_service::file::upload::UploadPart;
use mediahub_storage::mime_from_name;

use crate::dto::request::{
    validate, BulkDeleteBody, FileListQuery, MoveFilesBody, RenameFileBody,
};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::ApiToken;
use crate::state::AppState;

/// GET /api/files?directory=/docs&page=1&per_page=25
pub async fn list_files(
    State(state): State<AppState>,
    _auth: ApiToken,
    Query(query): Query<FileListQuery>,
) -> Result<Json<PageResponse<StoredFile>>, ApiError> {
    let page = query.page_request();
    let result = state.file_service.list_files(&query.directory, page).await?;
    Ok(Json(result))
}

/// POST /api/files/upload accepts multipart input: a `directory` field plus one or
/// more `files` parts.
pub async fn upload_files(
    State(state): State<AppState>,
    _auth: ApiToken,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<StoredFile>>), ApiError> {
    let mut directory = "/".to_string();
    let mut parts: Vec<UploadPart> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "directory" => {
                directory = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?;
            }
            "files" | "file" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::validation("File part is missing a file name"))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?;
                parts.push(UploadPart { file_name, data });
            }
            _ => {}
        }
    }

    let created = state.upload_service.upload(&directory, parts).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/files/{id}/rename
pub async fn rename_file(
    State(state): State<AppState>,
    _auth: ApiToken,
    Path(id): Path<Uuid>,
    Json(body): Json<RenameFileBody>,
) -> Result<Json<StoredFile>, ApiError> {
    validate(&body)?;

    let renamed = state
        .file_service
        .rename_file(
            id,
            RenameFileRequest {
                new_name: body.new_name,
            },
        )
        .await?;

    Ok(Json(renamed))
}

/// PUT /api/files/bulk/move
pub async fn move_files(
    State(state): State<AppState>,
    _auth: ApiToken,
    Json(body): Json<MoveFilesBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate(&body)?;

    let moved = state
        .file_service
        .move_files(MoveFilesRequest {
            file_ids: body.file_ids,
            destination: body.destination,
        })
        .await?;

    Ok(Json(MessageResponse::new(format!("Moved {moved} files"))))
}

/// DELETE /api/files/bulk
pub async fn delete_files(
    State(state): State<AppState>,
    _auth: ApiToken,
    Json(body): Json<BulkDeleteBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate(&body)?;

    let count = body.file_ids.len();
    state.file_service.delete_files(&body.file_ids).await?;

    Ok(Json(MessageResponse::new(format!("Deleted {count} files"))))
}

/// DELETE /api/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    _auth: ApiToken,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.file_service.delete_file(id).await?;
    Ok(Json(MessageResponse::new("File deleted")))
}

/// GET /api/files/{id}/download
pub async fn download_file(
    State(state): State<AppState>,
    _auth: ApiToken,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let (file, data) = state.file_service.download(id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_from_name(&file.original_name))
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.original_name),
        )
        .header(header::CONTENT_LENGTH, data.len())
        .body(Body::from(data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}
