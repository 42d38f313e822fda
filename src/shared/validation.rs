//! Input Validators
//!
//! Pure functions over request fields. Each returns the full, ordered list of
//! failures instead of stopping at the first one; an empty list means the
//! input is acceptable.

use regex::Regex;
use std::sync::LazyLock;

use crate::shared::error::FieldError;

/// Minimum length, in characters, for passwords, titles and content
pub const MIN_TEXT_LENGTH: usize = 5;

static EMAIL_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Check whether a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_some_and(|regex| regex.is_match(email))
}

/// Non-empty and at least `min` characters long
pub fn has_min_length(value: &str, min: usize) -> bool {
    !value.is_empty() && value.chars().count() >= min
}

/// Validate registration input
///
/// Produces `invalid email` for a malformed address and `short password`
/// for an empty password or one shorter than [`MIN_TEXT_LENGTH`].
pub fn validate_user_input(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "invalid email"));
    }
    if !has_min_length(password, MIN_TEXT_LENGTH) {
        errors.push(FieldError::new("password", "short password"));
    }

    errors
}

/// Validate post title and content
pub fn validate_post_input(title: &str, content: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !has_min_length(title, MIN_TEXT_LENGTH) {
        errors.push(FieldError::new("title", "invalid title"));
    }
    if !has_min_length(content, MIN_TEXT_LENGTH) {
        errors.push(FieldError::new("content", "invalid content"));
    }

    errors
}
