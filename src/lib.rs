//! Inkwell - Blog Backend Library
//!
//! Inkwell serves a small blogging API: users register and log in, and
//! authenticated users write, list, edit and delete posts with an optional
//! image.
//!
//! # Module Structure
//!
//! - **`shared`** - wire types, validation and field errors
//! - **`backend`** - Axum server, resolvers, persistence and uploads
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkwell::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Types shared between the API and its clients
pub mod shared;

/// Server-side code
pub mod backend;
