use std::collections::HashMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::room::{Room, RoomId};

/// The map of the game. Owns every room, keyed by room name.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: HashMap<RoomId, Room>,
}

impl RoomGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Room CRUD
    // -----------------------------------------------------------------------

    /// Insert a room with no exits, replacing any room already stored under `id`.
    pub fn create_room(&mut self, id: impl Into<RoomId>, description: impl Into<String>) {
        let id = id.into();
        let room = Room::new(description);
        debug!(room = %id, description = %room.description, "room created");
        if self.rooms.insert(id.clone(), room).is_some() {
            debug!(room = %id, "existing room replaced");
        }
    }

    /// Remove a room. Removing a room that does not exist is a no-op.
    ///
    /// Exits in other rooms that point at the removed room are left in place.
    pub fn remove_room(&mut self, id: &str) -> Option<Room> {
        let removed = self.rooms.remove(id);
        if removed.is_some() {
            debug!(room = id, "room removed");
        }
        removed
    }

    /// Get a room by name.
    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Whether a room with this name exists.
    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Set an exit on an existing room. The destination is stored as given,
    /// whether or not it exists.
    pub fn set_exit(
        &mut self,
        id: &str,
        direction: impl Into<String>,
        destination: impl Into<RoomId>,
    ) -> CoreResult<()> {
        let room = self
            .rooms
            .get_mut(id)
            .ok_or_else(|| CoreError::RoomNotFound(RoomId::new(id)))?;
        let direction = direction.into();
        let destination = destination.into();
        debug!(room = id, %direction, %destination, "exit set");
        room.set_exit(direction, destination);
        Ok(())
    }

    /// The destination of the exit in `direction`. `None` when the direction
    /// is unset or the room itself is missing.
    pub fn get_exit(&self, id: &str, direction: &str) -> Option<&RoomId> {
        self.rooms.get(id).and_then(|room| room.exit(direction))
    }

    /// Follow an exit, yielding the destination only if that room currently
    /// exists. A dangling exit resolves to `None`.
    pub fn travel(&self, id: &str, direction: &str) -> Option<&RoomId> {
        self.get_exit(id, direction)
            .filter(|dest| self.contains(dest.as_str()))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The full description of a room, generated from its current exits.
    pub fn describe(&self, id: &str) -> Option<String> {
        self.rooms.get(id).map(Room::long_description)
    }

    /// All room names, sorted.
    pub fn room_ids(&self) -> Vec<&RoomId> {
        let mut ids: Vec<&RoomId> = self.rooms.keys().collect();
        ids.sort();
        ids
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
