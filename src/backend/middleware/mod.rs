//! Middleware Module
//!
//! HTTP middleware run before the handlers.
//!
//! - **`auth`** - annotates each request with an `AuthContext`; never rejects

pub mod auth;

pub use auth::{auth_middleware, authenticate, Auth, AuthContext};
