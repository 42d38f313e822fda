//! Backend Module
//!
//! Server-side code for the blog API.
//!
//! - **`server`** - configuration, state and app creation
//! - **`routes`** - router and middleware stack
//! - **`api`** - the operation endpoint and its dispatch
//! - **`resolvers`** - user and post operations
//! - **`auth`** - token service and password hashing
//! - **`middleware`** - request authentication
//! - **`store`** - persistence port with Postgres and in-memory adapters
//! - **`uploads`** - post image storage and the upload endpoint
//! - **`error`** - the error taxonomy and its HTTP rendering

/// Server initialization and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Operation endpoint
pub mod api;

/// User and post operations
pub mod resolvers;

/// Tokens and password hashing
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Persistence
pub mod store;

/// Post image uploads
pub mod uploads;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::create_app;
