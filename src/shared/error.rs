//! Shared Error Types
//!
//! This module defines the field-level validation error that travels from the
//! validators through the resolvers and out to the client unchanged.
//!
//! # Usage
//!
//! ```rust
//! use inkwell::shared::error::FieldError;
//!
//! let error = FieldError::new("email", "invalid email");
//! assert_eq!(error.message, "invalid email");
//! ```
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field validation failure
///
/// Validators return these in an ordered list; the list is attached to an
/// `InvalidInput` error and rendered verbatim in the `data` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The input field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
