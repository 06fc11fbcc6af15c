use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use bingo_rooms::{InMemoryStore, KeyValueStore, StoreError};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Store wrapper that fails selected calls and records the rest
///
/// Successful calls go through to a real in-memory store so the effects of
/// a partially completed operation can be inspected afterwards.
#[derive(Clone)]
pub struct FaultyStore {
    inner: InMemoryStore,
    fail_del_prefix: Option<String>,
    fail_keys_pattern: Option<String>,
    fail_publish: bool,
    over_report_del: bool,
    del_calls: Arc<RwLock<Vec<Vec<String>>>>,
}

impl FaultyStore {
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            fail_del_prefix: None,
            fail_keys_pattern: None,
            fail_publish: false,
            over_report_del: false,
            del_calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fail any `del` whose first key starts with `prefix`
    pub fn failing_del_on(mut self, prefix: &str) -> Self {
        self.fail_del_prefix = Some(prefix.to_string());
        self
    }

    /// Fail `keys` for exactly this pattern
    pub fn failing_keys_on(mut self, pattern: &str) -> Self {
        self.fail_keys_pattern = Some(pattern.to_string());
        self
    }

    pub fn failing_publish(mut self) -> Self {
        self.fail_publish = true;
        self
    }

    /// Make `del` claim more deletions than keys it was given
    pub fn over_reporting_del(mut self) -> Self {
        self.over_report_del = true;
        self
    }

    pub async fn del_calls(&self) -> Vec<Vec<String>> {
        self.del_calls.read().await.clone()
    }
}

#[async_trait]
impl KeyValueStore for FaultyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(key, value).await
    }

    async fn del(&self, keys: &[String]) -> Result<u64, StoreError> {
        self.del_calls.write().await.push(keys.to_vec());

        if let (Some(prefix), Some(first)) = (&self.fail_del_prefix, keys.first()) {
            if first.starts_with(prefix.as_str()) {
                return Err(StoreError::Connection("connection reset".to_string()));
            }
        }
        let deleted = self.inner.del(keys).await?;
        if self.over_report_del {
            return Ok(deleted + 5);
        }
        Ok(deleted)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        if self.fail_keys_pattern.as_deref() == Some(pattern) {
            return Err(StoreError::command("keys", "scan timed out"));
        }
        self.inner.keys(pattern).await
    }

    async fn publish(&self, channel: &str, message: &str) -> Result<u64, StoreError> {
        if self.fail_publish {
            return Err(StoreError::Connection("broken pipe".to_string()));
        }
        self.inner.publish(channel, message).await
    }
}
