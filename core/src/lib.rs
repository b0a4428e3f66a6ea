#![no_std]

extern crate alloc;

pub use chance::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod chance;
mod config;
mod engine;
mod error;
mod generator;
mod grid;
mod types;

/// Next board after a click at `coords`: the clicked light and its in-bounds orthogonal neighbors are toggled.
///
/// `grid` is not modified. Fails only when `coords` is off the board.
pub fn flip(grid: &Grid, coords: Coord2) -> Result<Grid> {
    grid.flipped(coords)
}

/// Whether every light on `grid` is off.
pub fn has_won(grid: &Grid) -> bool {
    grid.is_dark()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    NoChange,
    Flipped,
    Won,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            Flipped => true,
            Won => true,
        }
    }
}
