//! The game engine: owns the map and the player's position, and dispatches
//! parsed commands against them.

use tracing::{debug, warn};
use zuul_core::{CoreError, RoomGraph, RoomId, campus_map};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::io::{LineInput, LineOutput};
use crate::parser::{
    Command, CommandWord, normalize, parse_command, read_command, suggest_command_word,
    vocabulary_listing,
};

const WELCOME: &[&str] = &[
    "",
    "Welcome to the World of Zuul!",
    "World of Zuul is a new, incredibly boring adventure game.",
    "Type 'help' if you need help.",
    "",
];

const FAREWELL: &str = "Thank you for playing.  Good bye.";

/// What the dispatch loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next command.
    Continue(String),
    /// Stop the loop.
    Quit,
}

/// A game session.
pub struct Game {
    /// The map being explored and rebuilt.
    graph: RoomGraph,
    /// Where the player stands. Always names a room in `graph`.
    current: RoomId,
    config: GameConfig,
}

impl Game {
    /// Start a game on the campus map.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let graph = campus_map()?;
        Self::with_graph(graph, config)
    }

    /// Start a game on a custom map. Fails if the configured start room is
    /// not part of it.
    pub fn with_graph(graph: RoomGraph, config: GameConfig) -> GameResult<Self> {
        if !graph.contains(config.start_room.as_str()) {
            return Err(GameError::StartRoomMissing(config.start_room.clone()));
        }

        Ok(Self {
            current: config.start_room.clone(),
            graph,
            config,
        })
    }

    /// The map.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// The room the player is in.
    pub fn current_room(&self) -> &RoomId {
        &self.current
    }

    /// Play until the player quits or input runs out.
    ///
    /// Prints the welcome banner and the starting room first and a farewell
    /// line last. Refusals are printed through [`LineOutput::write_error`]
    /// and never end the loop.
    pub fn run(
        &mut self,
        input: &mut dyn LineInput,
        output: &mut dyn LineOutput,
    ) -> GameResult<()> {
        for line in WELCOME {
            output.write_line(line)?;
        }
        output.write_line(&self.describe_current()?)?;

        loop {
            let command = match read_command(input, &self.config.prompt) {
                Ok(command) => command,
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    debug!("input closed, leaving game");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "failed to read command");
                    return Err(e.into());
                }
            };

            match self.execute(command, input) {
                Ok(Outcome::Continue(text)) => output.write_line(&text)?,
                Ok(Outcome::Quit) => break,
                Err(e) if e.is_recoverable() => output.write_error(&e.to_string())?,
                Err(e) if e.is_end_of_input() => {
                    debug!("input closed mid-command, leaving game");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        output.write_line(FAREWELL)?;
        Ok(())
    }

    /// Parse and execute one line of player input.
    pub fn process(&mut self, line: &str, input: &mut dyn LineInput) -> GameResult<Outcome> {
        self.execute(parse_command(line), input)
    }

    /// Execute a parsed command. `input` is only consulted by commands that
    /// ask follow-up questions.
    pub fn execute(&mut self, command: Command, input: &mut dyn LineInput) -> GameResult<Outcome> {
        debug!(word = command.word.name(), second = ?command.second_word, "dispatch");
        match command.word {
            CommandWord::Help => Ok(Outcome::Continue(self.do_help())),
            CommandWord::Go => self.do_go(command.second_word).map(Outcome::Continue),
            CommandWord::Look => self.describe_current().map(Outcome::Continue),
            CommandWord::Add => self.do_add(command.second_word, input).map(Outcome::Continue),
            CommandWord::Destroy => self.do_destroy(command.second_word).map(Outcome::Continue),
            CommandWord::Quit => self.do_quit(&command),
            CommandWord::Unknown => Err(GameError::UnknownCommand {
                suggestion: suggest_command_word(&command.verb),
            }),
        }
    }

    fn describe_current(&self) -> GameResult<String> {
        self.graph
            .describe(self.current.as_str())
            .ok_or_else(|| CoreError::RoomNotFound(self.current.clone()).into())
    }

    fn do_help(&self) -> String {
        format!(
            "You are lost. You are alone. You wander\n\
             around at the university.\n\
             \n\
             Your command words are:\n\
             {}",
            vocabulary_listing()
        )
    }

    fn do_go(&mut self, direction: Option<String>) -> GameResult<String> {
        let direction = direction.ok_or(GameError::MissingSecondWord(CommandWord::Go))?;

        let next = self
            .graph
            .travel(self.current.as_str(), &direction)
            .cloned()
            .ok_or(GameError::NoDoor)?;

        debug!(from = %self.current, to = %next, %direction, "moved");
        self.current = next;
        self.describe_current()
    }

    fn do_add(&mut self, name: Option<String>, input: &mut dyn LineInput) -> GameResult<String> {
        let name = name.ok_or(GameError::MissingSecondWord(CommandWord::Add))?;
        let current = self.current.clone();

        // Ask everything before touching the graph.
        let way_in = self.ask(
            input,
            &format!("Which direction is the exit from {current} to {name}? (For example, 'east')"),
        )?;
        if way_in.is_empty() {
            return Err(GameError::EmptyDirection);
        }

        let way_out = self.ask(
            input,
            &format!(
                "Which direction is the exit from {name} to {current}?\n\
                 (Usually the opposite of the direction you just entered. For example,\n\
                 if you just entered 'east' to get into the new room, you could enter\n\
                 'west' to get back from the new room into the room you're currently in.)"
            ),
        )?;
        if way_out.is_empty() {
            return Err(GameError::EmptyDirection);
        }

        let description = self.ask(
            input,
            &format!("What is the description of {name}? (For example, 'in an empty room')"),
        )?;
        if description.is_empty() {
            return Err(GameError::EmptyDescription);
        }

        self.graph.create_room(name.as_str(), description);
        self.graph.set_exit(current.as_str(), way_in, name.as_str())?;
        self.graph.set_exit(&name, way_out, current)?;

        self.describe_current()
    }

    fn do_destroy(&mut self, name: Option<String>) -> GameResult<String> {
        let name = name.ok_or(GameError::MissingSecondWord(CommandWord::Destroy))?;

        if self.current == name.as_str() {
            debug!(room = %name, "refused to destroy current room");
            return Err(GameError::DestroyCurrentRoom);
        }

        // Reported as destroyed whether or not the room existed.
        self.graph.remove_room(&name);
        Ok(format!(
            "{name} has been destroyed!\n{}",
            self.describe_current()?
        ))
    }

    fn do_quit(&self, command: &Command) -> GameResult<Outcome> {
        if command.has_second_word() {
            return Err(GameError::QuitWhat);
        }
        Ok(Outcome::Quit)
    }

    fn ask(&self, input: &mut dyn LineInput, question: &str) -> GameResult<String> {
        let line = input.read_line(&format!("{question}\n{}", self.config.prompt))?;
        Ok(normalize(&line))
    }
}
