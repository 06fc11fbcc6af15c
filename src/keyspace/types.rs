use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::namespace::Namespace;

/// Number of keys deleted per namespace by a bulk clear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedKeys {
    pub rooms: u64,
    pub players: u64,
    pub games: u64,
    pub boards: u64,
}

impl DeletedKeys {
    pub fn record(&mut self, namespace: Namespace, count: u64) {
        match namespace {
            Namespace::Rooms => self.rooms = count,
            Namespace::Players => self.players = count,
            Namespace::Games => self.games = count,
            Namespace::Boards => self.boards = count,
        }
    }

    pub fn total(&self) -> u64 {
        self.rooms + self.players + self.games + self.boards
    }
}

/// Outcome of a successful `clear_all`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAllReport {
    pub deleted_keys: DeletedKeys,
}

/// Current durable state of a room, as read by polling observers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub room: Option<Value>,
    pub game: Option<Value>,
    pub boards: Option<Value>,
}

impl RoomSnapshot {
    /// True when none of the room's keys exist
    pub fn is_empty(&self) -> bool {
        self.room.is_none() && self.game.is_none() && self.boards.is_none()
    }
}

/// Response body of the maintenance clear command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAllResponse {
    pub success: bool,
    pub message: String,
    pub deleted_keys: DeletedKeys,
}
