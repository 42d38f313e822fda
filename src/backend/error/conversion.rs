/**
 * Error Conversion
 *
 * Renders a `BackendError` as an HTTP response. The HTTP status mirrors the
 * error status and the body is the uniform error envelope:
 *
 * ```json
 * {
 *   "errors": [
 *     { "message": "invalid input", "status": 422, "data": [ ... ] }
 *   ]
 * }
 * ```
 *
 * `data` is omitted unless the error carries a field-error list.
 */

use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::backend::error::types::BackendError;
use crate::shared::error::FieldError;

/// One rendered error
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<FieldError>>,
}

/// Response body for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorPayload>,
}

impl From<&BackendError> for ErrorPayload {
    fn from(error: &BackendError) -> Self {
        Self {
            message: error.message(),
            status: error.status_code().as_u16(),
            data: error.data().map(<[FieldError]>::to_vec),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = ErrorEnvelope {
            errors: vec![ErrorPayload::from(&self)],
        };
        (status, Json(body)).into_response()
    }
}
