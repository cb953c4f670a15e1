//! Command parsing and command-word suggestions.

mod command;
mod resolver;

pub use command::{Command, CommandWord, normalize, parse_command, read_command, vocabulary_listing};
pub use resolver::suggest_command_word;
