//! Line-oriented input and output seams.
//!
//! The engine never touches a terminal directly. A frontend hands it a
//! [`LineInput`] to ask questions with and a [`LineOutput`] to print to.

use std::collections::VecDeque;
use std::io;

/// Supplies raw lines of player input.
pub trait LineInput {
    /// Show `prompt` and block until a line is entered. Returns the line as
    /// typed, without the trailing newline. Running out of input is reported
    /// as [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Receives every line of text shown to the player.
pub trait LineOutput {
    /// Print one line (which may itself contain newlines).
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Print a refusal or error message. Defaults to [`write_line`](Self::write_line).
    fn write_error(&mut self, text: &str) -> io::Result<()> {
        self.write_line(text)
    }
}

impl LineOutput for Vec<String> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

/// A [`LineInput`] that replays a fixed list of lines, then reports end of
/// input. Records every prompt it was shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Create an input that will answer with `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted input"))
    }
}
