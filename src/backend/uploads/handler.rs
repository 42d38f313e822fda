/**
 * Image Upload Handler
 *
 * `PUT /post-image` accepts a multipart form with an `image` file field and
 * an optional `oldPath` text field. The stored path is later sent back as a
 * post's `imageUrl`.
 *
 * # Responses
 *
 * - `200 { "message": "no file" }` - no acceptable image in the form
 * - `201 { "message": "file stored", "filePath": "images/<file>" }`
 * - `400` - more than one image in the form
 * - `500` - the caller is not authenticated
 */

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::Auth;
use crate::backend::uploads::images::ImageStore;

/// Largest accepted upload body
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Upload response body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl From<MultipartError> for BackendError {
    fn from(err: MultipartError) -> Self {
        BackendError::bad_request(err.body_text())
    }
}

/// Store an uploaded post image
///
/// An unauthenticated caller is a hard failure (500) rather than a 401.
/// Files with a content type other than PNG or JPEG are ignored. When
/// `oldPath` is present alongside a stored file, the old image is cleared.
pub async fn upload_image(
    State(images): State<ImageStore>,
    Auth(auth): Auth,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), BackendError> {
    if !auth.is_auth {
        return Err(BackendError::internal("not authenticated"));
    }

    let mut file_path: Option<String> = None;
    let mut old_path = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let Some(extension) = ImageStore::extension_for(&content_type) else {
                    tracing::warn!("Ignoring upload with content type {:?}", content_type);
                    continue;
                };
                if let Some(stored) = file_path.take() {
                    images.clear(&stored).await;
                    return Err(BackendError::bad_request("only one image per upload"));
                }
                let bytes = field.bytes().await?;
                file_path = Some(images.save(&bytes, extension).await?);
            }
            Some("oldPath") => {
                old_path = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let Some(file_path) = file_path else {
        return Ok((
            StatusCode::OK,
            Json(UploadResponse {
                message: "no file".to_string(),
                file_path: None,
            }),
        ));
    };

    if let Some(old_path) = old_path.filter(|path| !path.is_empty()) {
        images.clear(&old_path).await;
    }

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "file stored".to_string(),
            file_path: Some(file_path),
        }),
    ))
}
