use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::types::{ClearAllResponse, RoomSnapshot};
use crate::shared::{AppError, AppState};

/// HTTP handler for the maintenance clear command
///
/// POST /admin/clear
/// Deletes every room, player, game and boards key and reports the counts
#[instrument(name = "clear_all", skip(state))]
pub async fn clear_all(State(state): State<AppState>) -> Result<Json<ClearAllResponse>, AppError> {
    info!("Clearing all key namespaces");

    let report = state.keyspace.clear_all().await?;
    let deleted_keys = report.deleted_keys;

    Ok(Json(ClearAllResponse {
        success: true,
        message: format!("Cleared {} keys", deleted_keys.total()),
        deleted_keys,
    }))
}

/// HTTP handler observers poll for a room's current state
///
/// GET /rooms/:room_id
#[instrument(name = "get_room_snapshot", skip(state))]
pub async fn get_room_snapshot(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomSnapshot>, AppError> {
    let snapshot = state
        .keyspace
        .room_snapshot(&room_id)
        .await
        .map_err(|e| AppError::StoreError(e.to_string()))?;

    if snapshot.is_empty() {
        return Err(AppError::NotFound(format!("Room {} not found", room_id)));
    }

    Ok(Json(snapshot))
}
