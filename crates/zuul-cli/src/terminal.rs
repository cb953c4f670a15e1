//! Stdin/stdout adapters for the game's line input and output.

use std::io::{self, BufRead, StdinLock, Write};

use colored::Colorize;

use zuul_game::{LineInput, LineOutput};

/// Reads player input from standard input.
pub struct StdinInput {
    reader: StdinLock<'static>,
    line: String,
}

impl Default for StdinInput {
    fn default() -> Self {
        Self {
            reader: io::stdin().lock(),
            line: String::new(),
        }
    }
}

impl LineInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            // Finish the prompt line before the farewell.
            println!();
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(self.line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prints game text to standard output, refusals in yellow.
pub struct StdoutOutput;

impl LineOutput for StdoutOutput {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")
    }

    fn write_error(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text.yellow())
    }
}
