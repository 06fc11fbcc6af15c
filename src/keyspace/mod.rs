// Key-space administration
//
// Ephemeral room state lives in the shared store under the `room:`,
// `player:`, `game:` and `boards:` prefixes. This module owns that
// convention and the bulk maintenance that walks it.

// Public API - what other modules can use
pub use admin::{AdminError, KeySpaceAdmin};
pub use handlers::{clear_all, get_room_snapshot};
pub use namespace::Namespace;
pub use types::{ClearAllReport, ClearAllResponse, DeletedKeys, RoomSnapshot};

// Internal modules
mod admin;
mod handlers;
mod namespace;
mod types;
