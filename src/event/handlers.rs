use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::events::NewEvent;
use crate::shared::AppState;

/// Request body for publishing a global event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalEventRequest {
    #[serde(flatten)]
    pub event: NewEvent<Value>,
    #[serde(default)]
    pub room_id: Option<String>,
}

/// Outcome of a best-effort publish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    pub success: bool,
}

/// HTTP handler for publishing an event to one room
///
/// POST /rooms/:room_id/events
/// `success: false` means the publish did not go out; it is still a 200
/// since losing an event is not a request failure.
#[instrument(name = "publish_room_event", skip(state, event))]
pub async fn publish_room_event(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(event): Json<NewEvent<Value>>,
) -> Json<PublishResponse> {
    let kind = event.kind;
    let success = state.distributor.publish_to_room(&room_id, event).await;

    info!(room_id = %room_id, kind = %kind, success = success, "Room event publish requested");

    Json(PublishResponse { success })
}

/// HTTP handler for publishing an event to the global channel
///
/// POST /events/global
#[instrument(name = "publish_global_event", skip(state, request))]
pub async fn publish_global_event(
    State(state): State<AppState>,
    Json(request): Json<GlobalEventRequest>,
) -> Json<PublishResponse> {
    let kind = request.event.kind;
    let success = state
        .distributor
        .publish_global(request.event, request.room_id.as_deref())
        .await;

    info!(kind = %kind, success = success, "Global event publish requested");

    Json(PublishResponse { success })
}
