use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::{array_from_rows, array_size, array_to_rows, validate_size};
use crate::*;

/// Per-cell chance, between 0 and 1, that a light starts switched on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct LitProbabilityMap {
    chances: Array2<f64>,
}

impl LitProbabilityMap {
    /// Same chance for every cell of a `size` board.
    pub fn uniform(size: Coord2, chance: f64) -> Result<Self> {
        let size = validate_size(size)?;
        let chance = validate_chance(chance)?;
        Ok(Self::filled(size, chance))
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let chances = array_from_rows(rows)?;
        for &chance in &chances {
            validate_chance(chance)?;
        }
        Ok(Self { chances })
    }

    /// Caller guarantees a non-empty size and a chance within `[0, 1]`.
    pub(crate) fn filled(size: Coord2, chance: f64) -> Self {
        Self {
            chances: Array2::from_elem(size.to_nd_index(), chance),
        }
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.chances)
    }
}

fn validate_chance(chance: f64) -> Result<f64> {
    if chance.is_finite() && (0.0..=1.0).contains(&chance) {
        Ok(chance)
    } else {
        Err(GameError::InvalidProbability)
    }
}

impl Index<Coord2> for LitProbabilityMap {
    type Output = f64;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.chances[coords.to_nd_index()]
    }
}

impl TryFrom<Vec<Vec<f64>>> for LitProbabilityMap {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<LitProbabilityMap> for Vec<Vec<f64>> {
    fn from(map: LitProbabilityMap) -> Self {
        array_to_rows(&map.chances)
    }
}
