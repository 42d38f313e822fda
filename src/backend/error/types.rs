/**
 * Backend Error Types
 *
 * Every resolver returns `Result<T, BackendError>`. Domain failures carry
 * their own status code and message; infrastructure failures (store,
 * hashing, token signing, file I/O) collapse into a 500 whose details are
 * only logged.
 *
 * # Status Code Mapping
 *
 * - `InvalidInput` - 422, carries the field-error list
 * - `Unauthorized` - 401, not authenticated or bad credentials
 * - `Forbidden` - 403, authenticated but not the owner
 * - `NotFound` - 404, entity missing
 * - `UserExists` - 409, email already registered
 * - `BadRequest` - 400, undecodable request body
 * - everything else - 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::error::FieldError;

/// Message used for every 500 response
pub const INTERNAL_MESSAGE: &str = "an error occurred";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// One or more input fields failed validation
    #[error("invalid input")]
    InvalidInput(Vec<FieldError>),

    /// Caller is not authenticated or presented bad credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Caller is authenticated but does not own the resource
    #[error("not authorized")]
    Forbidden,

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Registration with an email that is already taken
    #[error("user exists already")]
    UserExists,

    /// Request body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// Hard failure with a caller-visible message
    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    /// Fail with the full list if any field failed validation
    pub fn check_input(errors: Vec<FieldError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self::InvalidInput(errors))
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UserExists => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_)
            | Self::Store(_)
            | Self::Token(_)
            | Self::Hashing(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the caller-visible error message
    ///
    /// Infrastructure errors are reported with a generic message so that
    /// driver or library details never reach the client.
    pub fn message(&self) -> String {
        match self {
            Self::Store(_) | Self::Token(_) | Self::Hashing(_) | Self::Io(_) => {
                INTERNAL_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }

    /// Field-error list, present only for `InvalidInput`
    pub fn data(&self) -> Option<&[FieldError]> {
        match self {
            Self::InvalidInput(errors) => Some(errors),
            _ => None,
        }
    }
}
