/**
 * API Routes
 *
 * - `POST /graphql` - named queries and mutations
 * - `PUT /post-image` - multipart image upload (authenticated)
 * - `GET /health` - liveness probe
 */

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::backend::api::graphql_handler;
use crate::backend::server::state::AppState;
use crate::backend::uploads::{upload_image, MAX_UPLOAD_BYTES};

/// Add the API routes to `router`
///
/// Only the upload route accepts bodies larger than Axum's default limit.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/graphql", post(graphql_handler))
        .route(
            "/post-image",
            put(upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "ok"
}
