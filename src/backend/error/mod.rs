//! Backend Error Module
//!
//! Error taxonomy for the API boundary.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status mapping
//! └── conversion.rs - IntoResponse and the error envelope
//! ```
//!
//! Resolvers return `Result<T, BackendError>`; the error is rendered once,
//! at the HTTP boundary, into `{ "errors": [ { message, status, data? } ] }`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{ErrorEnvelope, ErrorPayload};
pub use types::BackendError;
