//! Bowling scoreboard runner (default binary).
//!
//! Builds one game - random rolls by default, or rolls read from a file
//! holding one line of comma separated pin counts - scores it, and
//! prints the two-row scoreboard. Any validation failure exits non-zero
//! with its message.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use cli_bowling::core::{game_from_rolls, parse_roll_line, random_game, Game};
use cli_bowling::term::render_scoreboard;

#[derive(Parser)]
#[command(name = "cli-bowling")]
#[command(about = "Play a game of ten-pin bowling")]
#[command(version)]
struct Cli {
    /// Input file with one line of comma separated pin counts (0-10)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seed for the randomly generated game (ignored with --file)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let game = match &cli.file {
        Some(path) => game_from_file(path)?,
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            debug!(seed = ?cli.seed, "generating random game");
            random_game(&mut rng)
        }
    };

    let score = game.score();
    println!("{}", render_scoreboard(&game, score));
    Ok(())
}

fn game_from_file(path: &Path) -> Result<Game> {
    if !path.is_file() {
        bail!(
            "file '{}' does not exist - provide a valid file name",
            path.display()
        );
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    // Only the first line carries roll values.
    let line = contents.lines().next().unwrap_or("");
    let values = parse_roll_line(line)?;
    debug!(count = values.len(), "parsed roll values");
    Ok(game_from_rolls(&values)?)
}
