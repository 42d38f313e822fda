/**
 * Server Initialization
 *
 * Builds the application from a [`ServerConfig`]:
 *
 * 1. Select the store (Postgres when `DATABASE_URL` is set, else in memory)
 * 2. Make sure the image directory exists
 * 3. Assemble the state and the router
 *
 * A configured database that cannot be reached or migrated is a startup
 * failure; the server does not silently fall back to memory.
 */

use axum::Router;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{BlogStore, MemoryStore, PgStore, StoreError};
use crate::backend::uploads::ImageStore;

/// Failure while bringing the server up
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("image directory unavailable: {0}")]
    Images(#[from] std::io::Error),
}

/// Open the store selected by the configuration
pub async fn load_store(config: &ServerConfig) -> Result<Arc<dyn BlogStore>, StoreError> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(PgStore::connect(url).await?)),
        None => {
            tracing::info!("Using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Build the state for `config` around an already opened store
pub async fn build_state(
    config: &ServerConfig,
    store: Arc<dyn BlogStore>,
) -> Result<AppState, StartupError> {
    let images = ImageStore::new(config.images_dir.clone());
    images.ensure_dir().await?;

    Ok(AppState::new(
        store,
        TokenService::new(&config.jwt_secret),
        PasswordHasher::new(config.bcrypt_cost),
        images,
    ))
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing blog backend");

    let store = load_store(config).await?;
    let state = build_state(config, store).await?;

    tracing::info!("Serving images from {}", state.images.dir().display());
    Ok(create_router(state))
}
