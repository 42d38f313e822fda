/**
 * Router Configuration
 *
 * Assembles the API routes, the static image directory and the middleware
 * stack into one Axum router.
 *
 * # Layers (outermost first)
 *
 * 1. Tracing of every request
 * 2. CORS: any origin, the usual methods, `Content-Type` and `Authorization`
 * 3. Security headers (`nosniff`, `SAMEORIGIN`)
 * 4. Gzip compression
 * 5. Authentication: attaches an `AuthContext`, never rejects
 */

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::backend::uploads::PUBLIC_PREFIX;

/// Create the Axum router with all routes and layers configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let router = configure_api_routes(Router::new());

    // Stored images are addressed by the path the upload endpoint returned
    let router = router.nest_service(
        &format!("/{PUBLIC_PREFIX}"),
        ServeDir::new(app_state.images.dir()),
    );

    router
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(from_fn_with_state(app_state.clone(), auth_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("SAMEORIGIN"),
                ))
                .layer(CompressionLayer::new()),
        )
        .with_state(app_state)
}
