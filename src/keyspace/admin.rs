use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use super::{
    namespace::Namespace,
    types::{ClearAllReport, DeletedKeys, RoomSnapshot},
};
use crate::store::{KeyValueStore, StoreError};

/// Errors from administrative key-space operations
///
/// Deletions committed before the failing call are not rolled back.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Failed to clear {namespace} keys: {source}")]
    Store {
        namespace: Namespace,
        #[source]
        source: StoreError,
    },

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl AdminError {
    /// Short category used in diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            AdminError::Store { .. } => "store",
            AdminError::Unexpected(_) => "unexpected",
        }
    }

    /// Message of the underlying cause
    pub fn details(&self) -> String {
        match self {
            AdminError::Store { source, .. } => source.to_string(),
            AdminError::Unexpected(msg) => msg.clone(),
        }
    }
}

/// Owns the key namespace convention and bulk maintenance over it
#[derive(Clone)]
pub struct KeySpaceAdmin {
    store: Arc<dyn KeyValueStore>,
}

impl KeySpaceAdmin {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Deletes every key under every namespace, one namespace at a time
    ///
    /// Each namespace is enumerated and then deleted with a single call.
    /// The first store error aborts the whole operation; namespaces already
    /// cleared stay cleared.
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> Result<ClearAllReport, AdminError> {
        let mut deleted_keys = DeletedKeys::default();

        for namespace in Namespace::all() {
            let count = self.clear_namespace(namespace).await.map_err(|e| {
                error!(namespace = %namespace, error = %e, "Bulk clear aborted");
                e
            })?;
            deleted_keys.record(namespace, count);
        }

        info!(
            rooms = deleted_keys.rooms,
            players = deleted_keys.players,
            games = deleted_keys.games,
            boards = deleted_keys.boards,
            "Cleared all key namespaces"
        );

        Ok(ClearAllReport { deleted_keys })
    }

    async fn clear_namespace(&self, namespace: Namespace) -> Result<u64, AdminError> {
        let store_error = |source: StoreError| AdminError::Store { namespace, source };

        let keys = self
            .store
            .keys(&namespace.pattern())
            .await
            .map_err(store_error)?;

        if keys.is_empty() {
            debug!(namespace = %namespace, "No keys to clear");
            return Ok(0);
        }

        let deleted = self.store.del(&keys).await.map_err(store_error)?;

        if deleted > keys.len() as u64 {
            return Err(AdminError::Unexpected(format!(
                "store reported {} {} keys deleted out of {} requested",
                deleted,
                namespace,
                keys.len()
            )));
        }

        debug!(namespace = %namespace, matched = keys.len(), deleted = deleted, "Cleared namespace");
        Ok(deleted)
    }

    /// Writes an entity under its namespace
    #[instrument(skip(self, value))]
    pub async fn put(&self, namespace: Namespace, id: &str, value: &str) -> Result<(), StoreError> {
        self.store.set(&namespace.key(id), value).await
    }

    /// Reads an entity from its namespace
    #[instrument(skip(self))]
    pub async fn fetch(&self, namespace: Namespace, id: &str) -> Result<Option<String>, StoreError> {
        self.store.get(&namespace.key(id)).await
    }

    /// Reads the durable state of a room
    ///
    /// Observers call this on an interval in place of a push subscription.
    #[instrument(skip(self))]
    pub async fn room_snapshot(&self, room_id: &str) -> Result<RoomSnapshot, StoreError> {
        let room = self.fetch(Namespace::Rooms, room_id).await?.map(parse_stored);
        let game = self.fetch(Namespace::Games, room_id).await?.map(parse_stored);
        let boards = self.fetch(Namespace::Boards, room_id).await?.map(parse_stored);

        Ok(RoomSnapshot {
            room_id: room_id.to_string(),
            room,
            game,
            boards,
        })
    }
}

/// Stored values are JSON when game logic wrote them; anything else is kept as text
fn parse_stored(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or_else(|_| Value::String(raw))
}
