use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
}

impl SessionState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    fn of(grid: &Grid) -> Self {
        if has_won(grid) {
            Self::Won
        } else {
            Self::Playing
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A single game: the current board plus the randomness used to deal new boards on reset.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: BoardConfig,
    grid: Grid,
    state: SessionState,
    move_count: u32,
    rng: SmallRng,
}

impl GameSession {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = deal(&config, &mut rng);
        Self::start(config, grid, rng)
    }

    /// Starts from a known board instead of a random one. Later resets still deal random boards from `seed`.
    pub fn from_grid(config: BoardConfig, grid: Grid, seed: u64) -> Result<Self> {
        if grid.size() != config.size() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self::start(config, grid, SmallRng::seed_from_u64(seed)))
    }

    fn start(config: BoardConfig, grid: Grid, rng: SmallRng) -> Self {
        let state = SessionState::of(&grid);
        if state.is_won() {
            log::debug!("Dealt a board with every light already off");
        }
        Self {
            config,
            grid,
            state,
            move_count: 0,
            rng,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Clicks that changed the board since the last reset.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.state.is_won() {
            log::debug!("Ignoring click at {:?}, board already solved", coords);
            return Ok(ClickOutcome::NoChange);
        }

        self.grid = flip(&self.grid, coords)?;
        self.move_count = self.move_count.saturating_add(1);
        self.state = SessionState::of(&self.grid);

        log::debug!(
            "Click at {:?}, {} lights on after {} moves",
            coords,
            self.grid.lit_count(),
            self.move_count
        );

        Ok(if self.state.is_won() {
            log::info!("Board solved in {} moves", self.move_count);
            ClickOutcome::Won
        } else {
            ClickOutcome::Flipped
        })
    }

    pub fn reset(&mut self) {
        self.grid = deal(&self.config, &mut self.rng);
        self.state = SessionState::of(&self.grid);
        self.move_count = 0;
        log::debug!("Reset board, state is now {:?}", self.state);
    }
}

fn deal(config: &BoardConfig, rng: &mut SmallRng) -> Grid {
    RandomBoardGenerator::new(rng.random::<u64>()).generate(config)
}
