//! Image Upload Handler
//!
//! Validates the incoming file, then forwards it synchronously to the
//! configured external upload endpoint. The remote returns `{url}` on
//! success or `{error}` on rejection; nothing is stored locally.

use axum::Json;
use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::ServerState;
use crate::utils::{AppError, ok_with_message};
use shared::ApiResponse;

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub original_name: String,
    pub size: usize,
}

/// What the external endpoint answers
#[derive(Debug, Deserialize)]
struct RemoteUploadResponse {
    url: Option<String>,
    error: Option<String>,
}

fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

/// Validate image payload (size and extension)
fn validate_image(data: &[u8], ext: &str) -> Result<(), AppError> {
    if data.is_empty() {
        return Err(AppError::validation("Empty file provided".to_string()));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {} bytes ({}MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }
    if !SUPPORTED_FORMATS.contains(&ext) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }
    Ok(())
}

/// Upload image handler
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, AppError> {
    let endpoint = state.config.upload_endpoint.clone().ok_or_else(|| {
        AppError::Unavailable("Image upload is not configured".to_string())
    })?;

    // Find the file field
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;

    while let Some(f) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {}", e)))?
    {
        let name = f.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            original_filename = f.file_name().map(|s| s.to_string());
            field_data = Some(f.bytes().await?.to_vec());
            break;
        }
    }

    let data = field_data.ok_or_else(|| {
        AppError::validation("No 'file' field found. Field name must be 'file'".to_string())
    })?;

    let filename = original_filename
        .ok_or_else(|| AppError::validation("No filename provided in file field".to_string()))?;

    let ext = PathBuf::from(&filename)
        .extension()
        .and_then(|ext| ext.to_str().map(|s| s.to_lowercase()))
        .ok_or_else(|| AppError::validation(format!("Invalid file extension for: {}", filename)))?;

    validate_image(&data, &ext)?;

    // Forward synchronously; the request blocks for the duration of the
    // outbound call (bounded by the client timeout).
    let size = data.len();
    let part = reqwest::multipart::Part::bytes(data)
        .file_name(filename.clone())
        .mime_str(content_type_for(&ext))
        .map_err(|e| AppError::internal(format!("Failed to build upload part: {}", e)))?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = state
        .http_client
        .post(&endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("Upload request failed: {}", e)))?;

    let remote: RemoteUploadResponse = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(format!("Invalid upload endpoint response: {}", e)))?;

    if let Some(error) = remote.error {
        return Err(AppError::Invalid(format!("Upload rejected: {}", error)));
    }
    let url = remote
        .url
        .ok_or_else(|| AppError::Upstream("Upload endpoint returned no url".to_string()))?;

    tracing::info!(
        original_name = %filename,
        size = %size,
        "Image uploaded"
    );

    Ok(ok_with_message(
        UploadResponse {
            url,
            original_name: filename,
            size,
        },
        "Image uploaded successfully",
    ))
}
