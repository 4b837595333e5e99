//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{api, app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/stream/:id", get(transport::stream::open_stream))
        .route("/users", get(api::list_clients))
        .route("/clients", get(api::list_clients))
        .route("/users/:user_id/publish/messages", post(api::publish_message))
        .route("/publish/status/:status", get(api::publish_status))
        .route("/publish/:client_id/status/:status", get(api::publish_status_to))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
