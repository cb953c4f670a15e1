//! Command parsing for player input.

use std::io;

use crate::io::LineInput;

/// The first word of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    /// Move through an exit.
    Go,
    /// End the game.
    Quit,
    /// Show the help text.
    Help,
    /// Describe the current room again.
    Look,
    /// Build a new room next to the current one.
    Add,
    /// Tear down a room.
    Destroy,
    /// Anything not in the vocabulary, including an empty line.
    Unknown,
}

impl CommandWord {
    /// Every recognised word, in the order the help text lists them.
    pub const VOCABULARY: [CommandWord; 6] = [
        Self::Go,
        Self::Quit,
        Self::Help,
        Self::Look,
        Self::Add,
        Self::Destroy,
    ];

    /// Parse a command word. Only exact vocabulary words match.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "go" => Some(Self::Go),
            "quit" => Some(Self::Quit),
            "help" => Some(Self::Help),
            "look" => Some(Self::Look),
            "add" => Some(Self::Add),
            "destroy" => Some(Self::Destroy),
            _ => None,
        }
    }

    /// The word as the player types it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Quit => "quit",
            Self::Help => "help",
            Self::Look => "look",
            Self::Add => "add",
            Self::Destroy => "destroy",
            Self::Unknown => "unknown",
        }
    }
}

/// A parsed line of player input: a command word plus an optional second word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The recognised command word.
    pub word: CommandWord,
    /// The first token exactly as typed (empty for a blank line).
    pub verb: String,
    /// The second token, if one was given.
    pub second_word: Option<String>,
}

impl Command {
    /// Whether the first word was not recognised.
    pub fn is_unknown(&self) -> bool {
        self.word == CommandWord::Unknown
    }

    /// Whether a second word was given.
    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }
}

/// Parse a line of player input into a command.
///
/// Only the first two whitespace-separated tokens matter; anything after them
/// is ignored. A blank line yields an unknown command.
pub fn parse_command(input: &str) -> Command {
    let mut tokens = input.split_whitespace();
    let verb = tokens.next().unwrap_or_default();
    let second_word = tokens.next().map(str::to_string);

    Command {
        word: CommandWord::parse(verb).unwrap_or(CommandWord::Unknown),
        verb: verb.to_string(),
        second_word,
    }
}

/// Prompt for a line of input and parse it.
pub fn read_command(input: &mut dyn LineInput, prompt: &str) -> io::Result<Command> {
    let line = input.read_line(prompt)?;
    Ok(parse_command(&line))
}

/// The vocabulary as a single space-separated line, for the help text.
pub fn vocabulary_listing() -> String {
    CommandWord::VOCABULARY
        .iter()
        .map(CommandWord::name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn normalize(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ScriptedInput;

    fn command(word: CommandWord, verb: &str, second: Option<&str>) -> Command {
        Command {
            word,
            verb: verb.to_string(),
            second_word: second.map(str::to_string),
        }
    }

    #[test]
    fn parse_single_word() {
        assert_eq!(parse_command("look"), command(CommandWord::Look, "look", None));
        assert_eq!(parse_command("help"), command(CommandWord::Help, "help", None));
        assert_eq!(parse_command("quit"), command(CommandWord::Quit, "quit", None));
    }

    #[test]
    fn parse_two_words() {
        assert_eq!(
            parse_command("go east"),
            command(CommandWord::Go, "go", Some("east"))
        );
        assert_eq!(
            parse_command("destroy pub"),
            command(CommandWord::Destroy, "destroy", Some("pub"))
        );
    }

    #[test]
    fn extra_tokens_ignored() {
        assert_eq!(
            parse_command("add library right now please"),
            command(CommandWord::Add, "add", Some("library"))
        );
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(
            parse_command("   go \t  west  "),
            command(CommandWord::Go, "go", Some("west"))
        );
    }

    #[test]
    fn command_word_is_case_sensitive() {
        let cmd = parse_command("GO east");
        assert!(cmd.is_unknown());
        assert_eq!(cmd.verb, "GO");
        assert_eq!(cmd.second_word.as_deref(), Some("east"));
        assert_eq!(CommandWord::parse("Look"), None);
    }

    #[test]
    fn second_word_kept_as_typed() {
        let cmd = parse_command("go East");
        assert_eq!(cmd.word, CommandWord::Go);
        assert_eq!(cmd.second_word.as_deref(), Some("East"));
    }

    #[test]
    fn unknown_word_keeps_second_word() {
        let cmd = parse_command("dance wildly");
        assert!(cmd.is_unknown());
        assert_eq!(cmd.verb, "dance");
        assert_eq!(cmd.second_word.as_deref(), Some("wildly"));
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(parse_command(""), command(CommandWord::Unknown, "", None));
        assert_eq!(parse_command("   "), command(CommandWord::Unknown, "", None));
    }

    #[test]
    fn every_vocabulary_word_round_trips() {
        for word in CommandWord::VOCABULARY {
            assert_eq!(CommandWord::parse(word.name()), Some(word));
        }
        assert_eq!(CommandWord::parse("unknown"), None);
    }

    #[test]
    fn vocabulary_listing_order() {
        assert_eq!(vocabulary_listing(), "go quit help look add destroy");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  a   quiet\tlibrary "), "a quiet library");
        assert_eq!(normalize(" \t "), "");
    }

    #[test]
    fn read_command_uses_prompt() {
        let mut input = ScriptedInput::new(["go south"]);
        let cmd = read_command(&mut input, "> ").unwrap();
        assert_eq!(cmd.word, CommandWord::Go);
        assert_eq!(input.prompts(), ["> "]);
    }
}
