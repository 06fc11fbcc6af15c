use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::event::{publish_global_event, publish_room_event};
use crate::keyspace::{clear_all, get_room_snapshot};
use crate::shared::AppState;

/// Builds the HTTP surface over the shared application state
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/rooms/:room_id", get(get_room_snapshot))
        .route("/rooms/:room_id/events", post(publish_room_event))
        .route("/events/global", post(publish_global_event))
        .route("/admin/clear", post(clear_all))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
