use ndarray::Array2;

use super::*;

/// Independent per-cell draws: a light starts on when a uniform sample in `[0, 1)` falls below its chance.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &BoardConfig) -> Grid {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let chance = config.chance();
        let cells = Array2::from_shape_fn(config.size().to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            rng.random::<f64>() < chance[coords]
        });
        let grid = Grid::from_cells(cells);

        log::debug!(
            "Generated {}x{} board with {} of {} lights on",
            config.size().0,
            config.size().1,
            grid.lit_count(),
            config.total_cells()
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn generated_board_matches_config_size() {
        for size in [(1, 1), (1, 7), (4, 4), (9, 3)] {
            let config = BoardConfig::uniform(size, 0.5).unwrap();
            let grid = RandomBoardGenerator::new(7).generate(&config);

            assert_eq!(grid.size(), size);
            assert_eq!(grid.rows().count(), usize::from(size.0));
            assert!(grid.rows().all(|row| row.len() == usize::from(size.1)));
        }
    }

    #[test]
    fn zero_chance_is_always_dark() {
        let config = BoardConfig::uniform((6, 6), 0.0).unwrap();

        for seed in 0..20 {
            assert!(RandomBoardGenerator::new(seed).generate(&config).is_dark());
        }
    }

    #[test]
    fn full_chance_is_always_lit() {
        let config = BoardConfig::uniform((5, 3), 1.0).unwrap();

        for seed in 0..20 {
            let grid = RandomBoardGenerator::new(seed).generate(&config);
            assert_eq!(grid.lit_count(), 15);
        }
    }

    #[test]
    fn chances_apply_per_cell() {
        let chance = LitProbabilityMap::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let grid = initialize((2, 2), &chance, 42).unwrap();

        assert_eq!(grid, "O .\n. O".parse::<Grid>().unwrap());
    }

    #[test]
    fn same_seed_gives_same_board() {
        let config = BoardConfig::uniform((8, 8), 0.5).unwrap();

        let first = RandomBoardGenerator::new(1234).generate(&config);
        let second = RandomBoardGenerator::new(1234).generate(&config);

        assert_eq!(first, second);
    }

    #[test]
    fn initialize_rejects_mismatched_chance_map() {
        let chance = LitProbabilityMap::uniform((4, 4), 0.25).unwrap();

        assert_eq!(initialize((3, 4), &chance, 0), Err(GameError::InvalidBoardShape));
        assert_eq!(initialize((0, 4), &chance, 0), Err(GameError::InvalidSize));
    }
}
