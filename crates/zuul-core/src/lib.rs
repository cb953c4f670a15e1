//! Core types for Zuul: rooms, directional exits, and the room graph.
//!
//! The graph is a plain in-memory map from room name to room record. Exits
//! store the destination name only, so they may dangle after a room is
//! removed; traversal treats a dangling exit the same as a missing one.

/// Error types used throughout the crate.
pub mod error;
/// The room graph that owns every room.
pub mod graph;
/// Room records, identifiers, and exits.
pub mod room;
/// The fixed starting map.
pub mod seed;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the room graph.
pub use graph::RoomGraph;
/// Re-export room types.
pub use room::{Room, RoomId};
/// Re-export the seed map entry points.
pub use seed::{START_ROOM, campus_map};
