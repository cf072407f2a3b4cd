//! reqwest-backed [`CatalogApi`] implementation.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use mediahub_core::error::AppError;
use mediahub_core::AppResult;
use mediahub_entity::directory::model::Directory;
use mediahub_entity::file::model::StoredFile;

use crate::api::{CatalogApi, Listing, StorageStats, UploadFile};

/// HTTP client for the MediaHub REST surface.
#[derive(Debug, Clone)]
pub struct RestCatalogApi {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

/// Error payload shape returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl RestCatalogApi {
    /// Creates a client for the given base URL, optionally carrying a
    /// bearer token on every request.
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{path}", self.base_url));
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        Err(match status {
            StatusCode::BAD_REQUEST => AppError::validation(message),
            StatusCode::UNAUTHORIZED => AppError::unauthorized(message),
            StatusCode::NOT_FOUND => AppError::not_found(message),
            StatusCode::CONFLICT => AppError::conflict(message),
            StatusCode::SERVICE_UNAVAILABLE => AppError::service_unavailable(message),
            _ => AppError::internal(message),
        })
    }

    async fn json<T: serde::de::DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        self.send(builder).await?.json().await.map_err(decode_error)
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::with_source(
        mediahub_core::error::ErrorKind::ServiceUnavailable,
        format!("Request failed: {err}"),
        err,
    )
}

fn decode_error(err: reqwest::Error) -> AppError {
    AppError::with_source(
        mediahub_core::error::ErrorKind::Serialization,
        format!("Unexpected response body: {err}"),
        err,
    )
}

#[async_trait]
impl CatalogApi for RestCatalogApi {
    async fn fetch_listing(&self, path: &str) -> AppResult<Listing> {
        let builder = self
            .request(Method::GET, "/api/listing")
            .query(&[("path", path)]);
        self.json(builder).await
    }

    async fn create_directory(&self, name: &str, parent_path: &str) -> AppResult<Directory> {
        let builder = self
            .request(Method::POST, "/api/directories")
            .json(&json!({ "name": name, "parent_path": parent_path }));
        self.json(builder).await
    }

    async fn delete_directory(&self, id: Uuid) -> AppResult<()> {
        let builder = self.request(Method::DELETE, &format!("/api/directories/{id}"));
        self.send(builder).await.map(|_| ())
    }

    async fn upload_files(
        &self,
        directory: &str,
        files: Vec<UploadFile>,
    ) -> AppResult<Vec<StoredFile>> {
        let mut form = Form::new().text("directory", directory.to_string());
        for file in files {
            form = form.part(
                "files",
                Part::bytes(file.data.to_vec()).file_name(file.file_name),
            );
        }

        let builder = self
            .request(Method::POST, "/api/files/upload")
            .multipart(form);
        self.json(builder).await
    }

    async fn rename_file(&self, id: Uuid, new_name: &str) -> AppResult<StoredFile> {
        let builder = self
            .request(Method::PUT, &format!("/api/files/{id}/rename"))
            .json(&json!({ "new_name": new_name }));
        self.json(builder).await
    }

    async fn move_files(&self, file_ids: &[Uuid], destination: &str) -> AppResult<()> {
        let builder = self
            .request(Method::PUT, "/api/files/bulk/move")
            .json(&json!({ "file_ids": file_ids, "destination": destination }));
        self.send(builder).await.map(|_| ())
    }

    async fn delete_files(&self, file_ids: &[Uuid]) -> AppResult<()> {
        let builder = self
            .request(Method::DELETE, "/api/files/bulk")
            .json(&json!({ "file_ids": file_ids }));
        self.send(builder).await.map(|_| ())
    }

    async fn delete_file(&self, id: Uuid) -> AppResult<()> {
        let builder = self.request(Method::DELETE, &format!("/api/files/{id}"));
        self.send(builder).await.map(|_| ())
    }

    async fn fetch_stats(&self) -> AppResult<StorageStats> {
        let builder = self.request(Method::GET, "/api/stats");
        self.json(builder).await
    }
}
