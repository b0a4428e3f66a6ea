use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: &BoardConfig) -> Grid;
}

/// Builds a `size` board where each light starts on with the matching chance in `chance`.
///
/// Fails when either dimension is zero or when `chance` does not cover exactly `size`.
pub fn initialize(size: Coord2, chance: &LitProbabilityMap, seed: u64) -> Result<Grid> {
    let config = BoardConfig::new(size, chance.clone())?;
    Ok(RandomBoardGenerator::new(seed).generate(&config))
}
