/**
 * Application State Management
 *
 * `AppState` is the only state shared between requests: the store handle,
 * the token service, the password hasher and the image store. None of it is
 * mutated after startup; the store handles its own synchronization.
 *
 * The `FromRef` implementations let handlers extract a single part of the
 * state, following Axum's recommended pattern.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::store::BlogStore;
use crate::backend::uploads::images::ImageStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Persistence for users and posts
    pub store: Arc<dyn BlogStore>,
    /// Token issuing and verification
    pub tokens: TokenService,
    /// Password hashing
    pub hasher: PasswordHasher,
    /// Post image files
    pub images: ImageStore,
}

impl AppState {
    pub fn new(
        store: Arc<dyn BlogStore>,
        tokens: TokenService,
        hasher: PasswordHasher,
        images: ImageStore,
    ) -> Self {
        Self {
            store,
            tokens,
            hasher,
            images,
        }
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for ImageStore {
    fn from_ref(state: &AppState) -> Self {
        state.images.clone()
    }
}
