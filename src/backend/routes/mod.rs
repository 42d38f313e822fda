//! Route Configuration Module
//!
//! - **`router`** - router creation and the middleware stack
//! - **`api_routes`** - the operation endpoint, image upload and health check
//!
//! Stored images are served read-only under `/images`.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
