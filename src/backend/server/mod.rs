//! Server Module
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - environment configuration
//! - **`init`** - store selection and app creation

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, StartupError};
pub use state::AppState;
