use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_ROWS: Coord = 4;
pub const DEFAULT_COLS: Coord = 4;
pub const DEFAULT_LIGHT_CHANCE: f64 = 0.25;

/// Board dimensions together with the chance of each light starting on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfigRepr", into = "BoardConfigRepr")]
pub struct BoardConfig {
    size: Coord2,
    chance: LitProbabilityMap,
}

impl BoardConfig {
    pub fn new(size: Coord2, chance: LitProbabilityMap) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        if chance.size() != size {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { size, chance })
    }

    pub fn uniform(size: Coord2, chance: f64) -> Result<Self> {
        Self::new(size, LitProbabilityMap::uniform(size, chance)?)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn chance(&self) -> &LitProbabilityMap {
        &self.chance
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        let size = (DEFAULT_ROWS, DEFAULT_COLS);
        Self {
            size,
            chance: LitProbabilityMap::filled(size, DEFAULT_LIGHT_CHANCE),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct BoardConfigRepr {
    nrows: Coord,
    ncols: Coord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chance_light_starts_on: Option<LitProbabilityMap>,
}

impl TryFrom<BoardConfigRepr> for BoardConfig {
    type Error = GameError;

    fn try_from(repr: BoardConfigRepr) -> Result<Self> {
        let size = (repr.nrows, repr.ncols);
        match repr.chance_light_starts_on {
            Some(chance) => Self::new(size, chance),
            None => Self::uniform(size, DEFAULT_LIGHT_CHANCE),
        }
    }
}

impl From<BoardConfig> for BoardConfigRepr {
    fn from(config: BoardConfig) -> Self {
        Self {
            nrows: config.size.0,
            ncols: config.size.1,
            chance_light_starts_on: Some(config.chance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_is_four_by_four_quarter_chance() {
        let config = BoardConfig::default();

        assert_eq!(config.size(), (4, 4));
        assert_eq!(config.total_cells(), 16);
        assert_eq!(config.chance()[(3, 3)], 0.25);
        assert_eq!(config, BoardConfig::uniform((4, 4), 0.25).unwrap());
    }

    #[test]
    fn new_rejects_zero_size() {
        let chance = LitProbabilityMap::uniform((1, 1), 0.5).unwrap();

        assert_eq!(BoardConfig::new((0, 1), chance.clone()), Err(GameError::InvalidSize));
        assert_eq!(BoardConfig::new((1, 0), chance), Err(GameError::InvalidSize));
    }

    #[test]
    fn new_rejects_mismatched_chance_map() {
        let chance = LitProbabilityMap::uniform((3, 4), 0.5).unwrap();

        assert_eq!(
            BoardConfig::new((4, 3), chance),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn deserializes_with_explicit_chances() {
        let config: BoardConfig = serde_json::from_str(
            r#"{"nrows": 1, "ncols": 2, "chance_light_starts_on": [[0.0, 1.0]]}"#,
        )
        .unwrap();

        assert_eq!(config.size(), (1, 2));
        assert_eq!(
            config.chance(),
            &LitProbabilityMap::from_rows(vec![vec![0.0, 1.0]]).unwrap()
        );
    }

    #[test]
    fn deserializes_with_default_chance() {
        let config: BoardConfig = serde_json::from_str(r#"{"nrows": 2, "ncols": 3}"#).unwrap();

        assert_eq!(config, BoardConfig::uniform((2, 3), DEFAULT_LIGHT_CHANCE).unwrap());
    }

    #[test]
    fn deserialize_rejects_invalid_configs() {
        assert!(serde_json::from_str::<BoardConfig>(r#"{"nrows": 0, "ncols": 3}"#).is_err());
        assert!(
            serde_json::from_str::<BoardConfig>(
                r#"{"nrows": 2, "ncols": 2, "chance_light_starts_on": [[0.5, 0.5]]}"#
            )
            .is_err()
        );
    }
}
