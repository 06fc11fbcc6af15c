// Key-value store abstraction
//
// Every component talks to the shared store through the `KeyValueStore`
// trait, so the production client and the in-memory store are
// interchangeable.

pub use memory::{InMemoryStore, DEFAULT_CHANNEL_CAPACITY};

mod glob;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a key-value store call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Command `{command}` failed: {message}")]
    Command { command: &'static str, message: String },
}

impl StoreError {
    /// Create a command error for the named store operation
    pub fn command(command: &'static str, message: impl Into<String>) -> Self {
        StoreError::Command {
            command,
            message: message.into(),
        }
    }
}

/// The request/response operations required of the backing store
///
/// Each call succeeds or fails as a whole. There is deliberately no
/// `subscribe`: the store cannot hold a subscription open on our behalf.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes the given keys and returns how many existed
    ///
    /// Callers must not pass an empty slice; some stores reject a bare `DEL`.
    async fn del(&self, keys: &[String]) -> Result<u64, StoreError>;

    /// Lists keys matching a glob pattern (`*` and `?`)
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError>;

    /// Broadcasts a message and returns the number of receivers it reached
    ///
    /// A count of zero is still a successful publish.
    async fn publish(&self, channel: &str, message: &str) -> Result<u64, StoreError>;
}
