//! Shared Module
//!
//! Types and pure functions that do not depend on the server runtime: the
//! request/response shapes of the operation API, the field-level validation
//! error, and the validators that produce it.

/// Shared error types
pub mod error;

/// Request inputs and response shapes
pub mod types;

/// Field-level input validators
pub mod validation;

/// Re-export commonly used types for convenience
pub use error::FieldError;
pub use types::{AuthData, CreatorView, PostInput, PostPage, PostView, UserInput, UserView};
