use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for every room: the room's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    /// Create an identifier from a room name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The room name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RoomId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RoomId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoomId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A navigable location.
///
/// The room's name is not stored here; it is the key under which the room
/// lives in the [`RoomGraph`](crate::RoomGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Short phrase completing "You are ...", e.g. "in a computing lab".
    pub description: String,
    exits: BTreeMap<String, RoomId>,
}

impl Room {
    /// Create a room with no exits.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            exits: BTreeMap::new(),
        }
    }

    /// Set (or replace) the exit in `direction`. The destination is not
    /// checked for existence.
    pub fn set_exit(&mut self, direction: impl Into<String>, destination: RoomId) {
        self.exits.insert(direction.into(), destination);
    }

    /// The destination of the exit in `direction`, if one is set.
    pub fn exit(&self, direction: &str) -> Option<&RoomId> {
        self.exits.get(direction)
    }

    /// Iterate over `(direction, destination)` pairs in direction order.
    pub fn exits(&self) -> impl Iterator<Item = (&str, &RoomId)> {
        self.exits.iter().map(|(dir, dest)| (dir.as_str(), dest))
    }

    /// The populated exit directions, formatted as `Exits: east west`.
    pub fn exit_string(&self) -> String {
        let mut out = String::from("Exits:");
        for direction in self.exits.keys() {
            out.push(' ');
            out.push_str(direction);
        }
        out
    }

    /// The full description: the room phrase followed by its exit line.
    ///
    /// Built from the current exits on every call.
    pub fn long_description(&self) -> String {
        format!("You are {}.\n{}", self.description, self.exit_string())
    }
}
