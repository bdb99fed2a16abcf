//! Image upload handler.
//!
//! Files are validated here (image content types only, bounded size) before
//! being forwarded to the backend's upload store.

use axum::{
    Json,
    extract::{Multipart, State},
};
use tracing::instrument;

use crate::backend::UploadFile;
use crate::error::{AppError, Result};
use crate::middleware::RequireStaff;
use crate::state::AppState;

/// Maximum size per uploaded file (5 MB).
const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// Accept a multipart image upload and forward it to the backend.
///
/// Returns the stored URL array.
#[instrument(skip(state, staff, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    mut multipart: Multipart,
) -> Result<Json<Vec<String>>> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Only image files can be uploaded.".to_string(),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;
        if bytes.len() > MAX_FILE_BYTES {
            return Err(AppError::BadRequest(
                "File too large; the limit is 5 MB.".to_string(),
            ));
        }

        files.push(UploadFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No files were uploaded.".to_string()));
    }

    let urls = state
        .backend()
        .upload_images(&staff.access_token, files)
        .await?;
    Ok(Json(urls))
}
