//! Terminal frontend for Zuul, a small text adventure on a university campus.

mod terminal;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zuul_game::{Game, GameConfig};

use crate::terminal::{StdinInput, StdoutOutput};

#[derive(Parser)]
#[command(
    name = "zuul",
    about = "World of Zuul: walk around a campus and rebuild it as you go",
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut game = Game::new(GameConfig::default()).map_err(|e| e.to_string())?;
    tracing::info!(start = %game.current_room(), "starting game");

    let mut input = StdinInput::default();
    let mut output = StdoutOutput;
    game.run(&mut input, &mut output).map_err(|e| e.to_string())
}
