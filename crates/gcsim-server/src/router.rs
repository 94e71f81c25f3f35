use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Path of the health check endpoint.
pub const HEALTH: &str = "/health";

/// Build the axum router with all storage/v1 endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handler::health_handler))
        .route(
            "/storage/v1/b",
            get(handler::list_buckets_handler).post(handler::create_bucket_handler),
        )
        .route("/storage/v1/b/:bucket/o", get(handler::list_objects_handler))
        .route(
            "/storage/v1/b/:bucket/o/*object",
            get(handler::get_object_handler).delete(handler::delete_object_handler),
        )
        .route(
            "/upload/storage/v1/b/:bucket/o",
            post(handler::upload_object_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
