use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::v1;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Image uploads may exceed axum's 2 MB default, so the configured limit
    // replaces it.
    let body_limit = RequestBodyLimitLayer::new(state.config.server.max_image_bytes);

    Router::new()
        .nest("/api/v1", v1::router::v1_router())
        .layer(DefaultBodyLimit::disable())
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
