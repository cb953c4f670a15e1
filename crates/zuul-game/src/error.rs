//! Error types for the game engine.

use thiserror::Error;
use zuul_core::{CoreError, RoomId};

use crate::parser::CommandWord;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
///
/// Most variants are refusals aimed at the player: their text is printed and
/// the game carries on. See [`GameError::is_recoverable`].
#[derive(Debug, Error)]
pub enum GameError {
    /// The first word is not in the vocabulary.
    #[error("I don't know what you mean...{}", suggestion_hint(.suggestion))]
    UnknownCommand {
        /// Closest vocabulary word, if any is close enough.
        suggestion: Option<CommandWord>,
    },

    /// A command that needs a second word was given none.
    #[error("{}", missing_word_prompt(.0))]
    MissingSecondWord(CommandWord),

    /// `quit` was given a second word.
    #[error("Quit what?")]
    QuitWhat,

    /// No usable exit in that direction.
    #[error("There is no door!")]
    NoDoor,

    /// An `add` direction prompt was answered with nothing.
    #[error("Error: Empty direction! Please try again.")]
    EmptyDirection,

    /// The `add` description prompt was answered with nothing.
    #[error("Error: Empty description! Please try again.")]
    EmptyDescription,

    /// Attempted to destroy the room the player is in.
    #[error("Can't destroy the current room without dying!")]
    DestroyCurrentRoom,

    /// The configured start room is not on the map.
    #[error("start room not found: \"{0}\"")]
    StartRoomMissing(RoomId),

    /// Room graph error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading or writing a line failed.
    #[error("input/output error: {0}")]
    Input(#[from] std::io::Error),
}

impl GameError {
    /// Whether the error is a message for the player that leaves the game
    /// running, as opposed to a fault that ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::StartRoomMissing(_) | Self::Core(_) | Self::Input(_)
        )
    }

    /// Whether the error is the input running out.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Input(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

fn suggestion_hint(suggestion: &Option<CommandWord>) -> String {
    match suggestion {
        Some(word) => format!(" Did you mean '{}'?", word.name()),
        None => String::new(),
    }
}

fn missing_word_prompt(word: &CommandWord) -> &'static str {
    match word {
        CommandWord::Go => "Go where?",
        CommandWord::Add => "Add what?",
        CommandWord::Destroy => "Destroy what?",
        CommandWord::Help | CommandWord::Look | CommandWord::Quit | CommandWord::Unknown => {
            "What?"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_messages() {
        assert_eq!(
            GameError::MissingSecondWord(CommandWord::Go).to_string(),
            "Go where?"
        );
        assert_eq!(
            GameError::MissingSecondWord(CommandWord::Add).to_string(),
            "Add what?"
        );
        assert_eq!(
            GameError::MissingSecondWord(CommandWord::Destroy).to_string(),
            "Destroy what?"
        );
        assert_eq!(GameError::NoDoor.to_string(), "There is no door!");
    }

    #[test]
    fn unknown_command_hint() {
        let err = GameError::UnknownCommand { suggestion: None };
        assert_eq!(err.to_string(), "I don't know what you mean...");

        let err = GameError::UnknownCommand {
            suggestion: Some(CommandWord::Look),
        };
        assert_eq!(
            err.to_string(),
            "I don't know what you mean... Did you mean 'look'?"
        );
    }

    #[test]
    fn recoverable_split() {
        assert!(GameError::NoDoor.is_recoverable());
        assert!(GameError::DestroyCurrentRoom.is_recoverable());
        assert!(!GameError::StartRoomMissing(RoomId::new("nowhere")).is_recoverable());

        let eof = GameError::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(!eof.is_recoverable());
        assert!(eof.is_end_of_input());
    }
}
