use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::relay::handlers;
use crate::state::SharedState;

/// Builds the router; browser clients on any origin may call it.
///
/// `POST /post` takes bodies of any size, ids have no upper length bound.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::status_page))
        .route("/latest", get(handlers::get_latest))
        .route(
            "/post",
            post(handlers::post_via_body).layer(DefaultBodyLimit::disable()),
        )
        .route("/post/{id}", get(handlers::post_via_path))
        .route("/clear", get(handlers::clear))
        .with_state(state)
        .layer(CorsLayer::permissive())
}
