use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use super::events::{Channel, GameEvent, NewEvent, GLOBAL_ROOM_ID};
use crate::store::{KeyValueStore, StoreError};

/// Reasons a publish did not go out
///
/// These never leave the distributor; they are logged and folded into
/// the boolean result.
#[derive(Debug, Error)]
enum PublishError {
    #[error("Room id must not be empty")]
    EmptyRoomId,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Publishes room events over the store's broadcast primitive
///
/// Delivery is best effort. A `true` result means the publish call
/// completed, not that anybody received the event; observers must poll
/// durable room state to stay consistent.
#[derive(Clone)]
pub struct EventDistributor {
    store: Arc<dyn KeyValueStore>,
}

impl EventDistributor {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stamps the event for `room_id` and publishes it on `room:<room_id>`
    #[instrument(skip(self, event), fields(kind = %event.kind))]
    pub async fn publish_to_room<T: Serialize>(&self, room_id: &str, event: NewEvent<T>) -> bool {
        if room_id.is_empty() {
            error!(error = %PublishError::EmptyRoomId, "Failed to publish room event");
            return false;
        }

        let channel = Channel::Room(room_id.to_string());
        match self.publish(&channel, event.stamp(room_id)).await {
            Ok(()) => true,
            Err(e) => {
                error!(room_id = %room_id, error = %e, "Failed to publish room event");
                false
            }
        }
    }

    /// Stamps the event and publishes it on the `global` channel
    ///
    /// The envelope's room id is `room_id` when given, otherwise `"global"`.
    /// An empty `room_id` counts as not given and also becomes `"global"`.
    #[instrument(skip(self, event), fields(kind = %event.kind))]
    pub async fn publish_global<T: Serialize>(
        &self,
        event: NewEvent<T>,
        room_id: Option<&str>,
    ) -> bool {
        let room_id = room_id
            .filter(|id| !id.is_empty())
            .unwrap_or(GLOBAL_ROOM_ID);

        match self.publish(&Channel::Global, event.stamp(room_id)).await {
            Ok(()) => true,
            Err(e) => {
                error!(room_id = %room_id, error = %e, "Failed to publish global event");
                false
            }
        }
    }

    /// Acknowledges interest in a room's events. This is NOT a live subscription.
    ///
    /// The store cannot keep a subscription connection open in this
    /// deployment, so `callback` is dropped without ever being called. The
    /// return value only says the call itself did not fail. Callers must
    /// poll room state (see `KeySpaceAdmin::room_snapshot`) on their own
    /// interval instead of waiting for pushed events.
    #[instrument(skip(self, callback))]
    pub fn subscribe_to_room<F>(&self, room_id: &str, callback: F) -> bool
    where
        F: Fn(GameEvent) + Send + Sync + 'static,
    {
        if room_id.is_empty() {
            error!(error = %PublishError::EmptyRoomId, "Failed to register room subscription");
            return false;
        }

        drop(callback);

        warn!(
            channel = %Channel::Room(room_id.to_string()),
            "Room subscription acknowledged but not live; observers must poll room state"
        );
        true
    }

    async fn publish<T: Serialize>(
        &self,
        channel: &Channel,
        event: GameEvent<T>,
    ) -> Result<(), PublishError> {
        let message = serde_json::to_string(&event)?;
        let channel_name = channel.to_string();

        let receivers = self.store.publish(&channel_name, &message).await?;

        if receivers == 0 {
            debug!(channel = %channel_name, kind = %event.kind, "Event published with no receivers");
        } else {
            info!(
                channel = %channel_name,
                kind = %event.kind,
                receivers = receivers,
                "Event published"
            );
        }

        Ok(())
    }
}
