// Library crate for the bingo room server
// This file exposes the public API for integration tests

pub mod config;
pub mod event;
pub mod keyspace;
pub mod routes;
pub mod shared;
pub mod store;

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use event::{Channel, EventDistributor, EventKind, GameEvent, NewEvent};
pub use keyspace::{AdminError, ClearAllReport, DeletedKeys, KeySpaceAdmin, Namespace};
pub use routes::build_router;
pub use shared::{AppError, AppState};
pub use store::{InMemoryStore, KeyValueStore, StoreError};
