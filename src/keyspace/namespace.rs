use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The entity kinds that partition the store's key space
///
/// Declaration order is the order bulk operations walk the namespaces in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Namespace {
    Rooms,
    Players,
    Games,
    Boards,
}

impl Namespace {
    /// All namespaces in processing order: rooms, players, games, boards
    pub fn all() -> impl Iterator<Item = Namespace> {
        Namespace::iter()
    }

    /// Key prefix without the trailing separator
    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Rooms => "room",
            Namespace::Players => "player",
            Namespace::Games => "game",
            Namespace::Boards => "boards",
        }
    }

    /// Key for a single entity, e.g. `room:abc`
    pub fn key(&self, id: &str) -> String {
        format!("{}:{}", self.prefix(), id)
    }

    /// Glob pattern matching every key in the namespace
    pub fn pattern(&self) -> String {
        format!("{}:*", self.prefix())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
