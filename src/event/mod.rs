// Event distribution
//
// Room lifecycle events are stamped, serialized and published over the
// store's broadcast primitive. There is no live subscription behind it:
// observers poll durable room state instead.

// Public API - what other modules can use
pub use distributor::EventDistributor;
pub use events::{Channel, EventKind, GameEvent, NewEvent, GLOBAL_ROOM_ID};
pub use handlers::{publish_global_event, publish_room_event, GlobalEventRequest, PublishResponse};

// Internal modules
mod distributor;
mod events;
mod handlers;
