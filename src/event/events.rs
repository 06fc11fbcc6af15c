use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{AsRefStr, EnumIter};

/// Sentinel room id carried by events that are not scoped to a room
pub const GLOBAL_ROOM_ID: &str = "global";

/// The kinds of room lifecycle events
///
/// Events represent facts about things that have already happened.
/// The set is closed: a new kind is a schema change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    // Lobby lifecycle events
    PlayerJoined,
    PlayerLeft,
    RoomUpdated,

    // Game lifecycle events
    GameStarted,
    NumberCalled,
    GameFinished,

    // Board selection
    BoardSelected,
    BoardDeselected,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// An event as produced by game logic, before the distributor stamps it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent<T> {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
}

impl<T> NewEvent<T> {
    pub fn new(kind: EventKind, data: T) -> Self {
        Self {
            kind,
            data,
            player_id: None,
        }
    }

    /// Attach the participant the event concerns
    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    /// Stamp the event for a room, taking the current time
    pub(crate) fn stamp(self, room_id: impl Into<String>) -> GameEvent<T> {
        GameEvent {
            kind: self.kind,
            room_id: room_id.into(),
            data: self.data,
            timestamp: Utc::now(),
            player_id: self.player_id,
        }
    }
}

/// The envelope sent over a channel
///
/// `data` is opaque to the distributor; its shape depends on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent<T = serde_json::Value> {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub room_id: String,
    pub data: T,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
}

impl<T> GameEvent<T> {
    pub fn is_global(&self) -> bool {
        self.room_id == GLOBAL_ROOM_ID
    }
}

/// A named broadcast address on the store's publish primitive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    Room(String),
    Global,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Room(room_id) => write!(f, "room:{}", room_id),
            Channel::Global => f.write_str("global"),
        }
    }
}
