use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, instrument};

use super::{glob, KeyValueStore, StoreError};

/// Default capacity of each in-memory channel
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// In-memory implementation of KeyValueStore for development and testing
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    /// Channel name -> sender
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<String>>>>,
    channel_capacity: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::with_channel_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    pub fn with_channel_capacity(channel_capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            channels: Arc::new(RwLock::new(HashMap::new())),
            channel_capacity: channel_capacity.max(1),
        }
    }

    /// Attach an in-process receiver to a channel
    ///
    /// Only in-process observers can listen here; a remote client gets
    /// nothing of the sort and must poll. A channel is dropped from the map
    /// by the first publish that finds all its receivers gone.
    pub async fn channel_receiver(&self, channel: &str) -> broadcast::Receiver<String> {
        let channels = self.channels.read().await;

        if let Some(sender) = channels.get(channel) {
            sender.subscribe()
        } else {
            debug!(channel = %channel, "Creating new in-memory channel for receiver");
            drop(channels);

            let mut channels = self.channels.write().await;
            channels
                .entry(channel.to_string())
                .or_insert_with(|| broadcast::channel(self.channel_capacity).0)
                .subscribe()
        }
    }

    /// Number of keys currently held
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    #[instrument(skip(self, keys), fields(key_count = keys.len()))]
    async fn del(&self, keys: &[String]) -> Result<u64, StoreError> {
        if keys.is_empty() {
            return Err(StoreError::command("del", "wrong number of arguments"));
        }

        let mut entries = self.entries.write().await;
        let deleted = keys
            .iter()
            .filter(|key| entries.remove(key.as_str()).is_some())
            .count() as u64;

        debug!(requested = keys.len(), deleted = deleted, "Deleted keys from memory");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().await;
        let mut matched: Vec<String> = entries
            .keys()
            .filter(|key| glob::matches(pattern, key))
            .cloned()
            .collect();
        matched.sort();
        Ok(matched)
    }

    #[instrument(skip(self, message))]
    async fn publish(&self, channel: &str, message: &str) -> Result<u64, StoreError> {
        let channels = self.channels.read().await;

        let receivers = match channels.get(channel) {
            // send only fails when there are no receivers
            Some(sender) => sender.send(message.to_string()).unwrap_or(0),
            None => 0,
        };
        let stale = receivers == 0 && channels.contains_key(channel);
        drop(channels);

        if stale {
            let mut channels = self.channels.write().await;
            // a receiver may have attached between the two locks
            if channels
                .get(channel)
                .is_some_and(|sender| sender.receiver_count() == 0)
            {
                channels.remove(channel);
                debug!(channel = %channel, "Removed in-memory channel with no receivers");
            }
        }

        debug!(channel = %channel, receivers = receivers, "Message published in memory");
        Ok(receivers as u64)
    }
}
