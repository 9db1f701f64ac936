//! HTTP route definitions

use crate::{handlers, middleware, AppState};
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Path of the object retrieval endpoint
pub const GET_OBJECT_PATH: &str = "/getObject";

/// Create the main router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(GET_OBJECT_PATH, get(handlers::get_object))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&state),
            middleware::access_log_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
