use std::str::FromStr;

use lights_out_core::Coord2;
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Click(Coord2),
    Reset,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Could not parse {0:?}, expected `row col`, `r` to reset or `q` to quit")]
    Unrecognized(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "r" | "reset" => Ok(Command::Reset),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => parse_coords(line)
                .map(Command::Click)
                .ok_or_else(|| ParseCommandError::Unrecognized(line.to_owned())),
        }
    }
}

/// Accepts `row col`, `row,col` or `row, col`.
fn parse_coords(line: &str) -> Option<Coord2> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}
