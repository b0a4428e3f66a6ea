use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::types::{array_from_rows, array_size, array_to_rows, validate_size};
use crate::*;

/// Lit/unlit state of every cell on the board, indexed by `(row, col)`.
///
/// A grid is never edited in place once built: every click produces a new grid through [`Grid::flipped`], so a
/// caller holding the previous grid can still compare against it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    cells: Array2<bool>,
}

impl Grid {
    /// A board of the given size with every light off.
    pub fn dark(size: Coord2) -> Result<Self> {
        let size = validate_size(size)?;
        Ok(Self::from_cells(Array2::default(size.to_nd_index())))
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        array_from_rows(rows).map(Self::from_cells)
    }

    pub(crate) fn from_cells(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.cells)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// State of the cell at `coords`, or `None` when it is off the board.
    pub fn cell(&self, coords: Coord2) -> Option<bool> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Whether every light is off.
    pub fn is_dark(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, bool>> {
        self.cells.rows().into_iter()
    }

    /// Cells toggled by a click at `coords`: the cell itself followed by its in-bounds orthogonal neighbors.
    pub fn toggle_targets(&self, coords: Coord2) -> Result<impl Iterator<Item = Coord2> + use<>> {
        let coords = self.validate_coords(coords)?;
        Ok(core::iter::once(coords).chain(self.cells.iter_neighbors(coords)))
    }

    /// Returns a new grid where the cell at `coords` and its orthogonal neighbors are inverted.
    ///
    /// Neighbors that would fall off the board are skipped. `self` is left untouched.
    pub fn flipped(&self, coords: Coord2) -> Result<Grid> {
        let mut cells = self.cells.clone();
        for pos in self.toggle_targets(coords)? {
            let cell = &mut cells[pos.to_nd_index()];
            *cell = !*cell;
        }
        Ok(Self::from_cells(cells))
    }
}

impl Index<Coord2> for Grid {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GameError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        array_to_rows(&grid.cells)
    }
}

const LIT: char = 'O';
const UNLIT: char = '.';

/// One line per row, cells separated by a space: `O` is lit, `.` is unlit.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                f.write_str("\n")?;
            }
            for (col_index, &lit) in row.iter().enumerate() {
                if col_index > 0 {
                    f.write_str(" ")?;
                }
                let symbol = if lit { LIT } else { UNLIT };
                fmt::Write::write_char(f, symbol)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        LIT | 'o' => Ok(true),
                        UNLIT => Ok(false),
                        other => Err(GameError::InvalidCell(other)),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }
}
