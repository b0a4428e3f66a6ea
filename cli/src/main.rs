use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use lights_out_core::{
    BoardConfig, ClickOutcome, Coord, DEFAULT_COLS, DEFAULT_LIGHT_CHANCE, DEFAULT_ROWS,
    GameSession,
};
use web_time::{SystemTime, UNIX_EPOCH};

use command::{Command, ParseCommandError};

mod command;

/// Turn every light off. Clicking a cell toggles it and its four neighbors.
#[derive(Parser, Debug)]
#[command(name = "lights-out", version, about)]
struct Cli {
    /// Number of rows on the board
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: Coord,

    /// Number of columns on the board
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: Coord,

    /// Chance, between 0 and 1, that each light starts on
    #[arg(long, default_value_t = DEFAULT_LIGHT_CHANCE)]
    chance: f64,

    /// JSON board config, overrides --rows, --cols and --chance
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for dealing boards, defaults to one taken from the clock
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Cli {
    fn board_config(&self) -> Result<BoardConfig> {
        match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid board config {}", path.display()))
            }
            None => BoardConfig::uniform((self.rows, self.cols), self.chance)
                .context("invalid board settings"),
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = cli.board_config()?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::debug!("Starting {:?} board with seed {}", config.size(), seed);

    let mut session = GameSession::new(config, seed);
    play(&mut session, io::stdin().lock(), io::stdout().lock())
}

/// Reads one command per line from `input` until `quit` or end of input, printing the board after each.
fn play(session: &mut GameSession, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "Lights Out")?;
    show(session, &mut out)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Reset => session.reset(),
            Command::Click(coords) => match session.click(coords) {
                Ok(ClickOutcome::NoChange) => {
                    writeln!(out, "Board already solved, enter `r` to play again")?;
                    continue;
                }
                Ok(_) => {}
                Err(err) => {
                    writeln!(out, "{err}: {} {}", coords.0, coords.1)?;
                    continue;
                }
            },
        }
        show(session, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn show(session: &GameSession, out: &mut impl Write) -> Result<()> {
    if session.is_won() {
        writeln!(out, "You won! ({} moves)", session.move_count())?;
    } else {
        writeln!(out, "{}", session.grid())?;
        writeln!(out, "moves: {}", session.move_count())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lights_out_core::Grid;

    fn run(board: &str, input: &str) -> (GameSession, String) {
        let grid: Grid = board.parse().unwrap();
        let config = BoardConfig::uniform(grid.size(), 0.0).unwrap();
        let mut session = GameSession::from_grid(config, grid, 0).unwrap();
        let mut out = Vec::new();
        play(&mut session, input.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn solving_prints_win_message() {
        let (session, out) = run(". O\nO O", "1 1\n");

        assert!(session.is_won());
        assert!(out.contains(". O\nO O\nmoves: 0"));
        assert!(out.ends_with("You won! (1 moves)\n"));
    }

    #[test]
    fn bad_input_is_reported_and_skipped() {
        let (session, out) = run("O O\nO O", "\nhello\n5 5\n0,0\n");

        assert_eq!(session.move_count(), 1);
        assert!(out.contains("Could not parse \"hello\""));
        assert!(out.contains("Invalid coordinates: 5 5"));
        assert!(out.contains(". .\n. O\nmoves: 1"));
    }

    #[test]
    fn clicks_after_winning_are_ignored() {
        let (session, out) = run("O", "0 0\n0 0\n");

        assert!(session.is_won());
        assert_eq!(session.move_count(), 1);
        assert!(out.contains("Board already solved"));
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = run("O O O", "q\n0 1\n");

        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn reset_deals_board_from_config() {
        let (session, out) = run("O O\nO O", "r\n");

        assert!(session.is_won());
        assert!(out.ends_with("You won! (0 moves)\n"));
    }

    #[test]
    fn cli_builds_uniform_config() {
        let cli = Cli::parse_from(["lights-out", "--rows", "2", "--cols", "5", "--chance", "0.5"]);

        assert_eq!(cli.board_config().unwrap(), BoardConfig::uniform((2, 5), 0.5).unwrap());
    }

    #[test]
    fn cli_rejects_invalid_settings() {
        let cli = Cli::parse_from(["lights-out", "--rows", "0"]);

        assert!(cli.board_config().is_err());
    }
}
