//! Configuration for a game session.

use zuul_core::{RoomId, START_ROOM};

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Room the player starts in.
    pub start_room: RoomId,
    /// Prompt shown when reading a command or an answer.
    pub prompt: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_room: RoomId::new(START_ROOM),
            prompt: "> ".to_string(),
        }
    }
}

impl GameConfig {
    /// Set the starting room.
    pub fn with_start_room(mut self, room: impl Into<RoomId>) -> Self {
        self.start_room = room.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.start_room, "outside");
        assert_eq!(cfg.prompt, "> ");
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default().with_start_room("lab");
        assert_eq!(cfg.start_room, "lab");
        assert_eq!(cfg.prompt, "> ");
    }
}
