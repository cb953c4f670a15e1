//! Command parser and game engine for Zuul.
//!
//! A [`Game`] owns the room graph and the player's position. Each line of
//! input is parsed into a two-word [`Command`] and dispatched against that
//! state; the `add` and `destroy` commands rebuild the map while playing.

/// Session configuration.
pub mod config;
/// Error types for the game engine.
pub mod error;
/// Line-oriented input and output seams.
pub mod io;
/// Command parsing and command-word suggestions.
pub mod parser;
/// The game engine and dispatch loop.
pub mod session;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use io::{LineInput, LineOutput, ScriptedInput};
pub use parser::{Command, CommandWord, parse_command, read_command};
pub use session::{Game, Outcome};
