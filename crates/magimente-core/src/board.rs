//! The puzzle board.

use crate::{CellState, Position};

/// Error describing why a cell cannot accept a player value.
///
/// Every variant is a normal, expected outcome of an invalid drop target
/// rather than a fault; callers are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FillError {
    /// The position lies outside the board.
    #[display("position is outside the board")]
    OutOfBounds,
    /// The cell is puzzle-given and immutable.
    #[display("cell is fixed by the puzzle")]
    FixedCell,
    /// The cell already holds a player value.
    #[display("cell is already filled")]
    OccupiedCell,
}

/// An `N × N` grid of cells.
///
/// Fixed cells come from the puzzle and never change; empty cells accept
/// exactly one player value via [`fill`](Board::fill). A previously
/// fixed or filled cell is never mutated, which is the board's anti-cheat
/// invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Builds a board from a square grid of optional values.
    ///
    /// Present values become [`CellState::Fixed`], absent ones
    /// [`CellState::Empty`]. The grid is expected to be square; ragged
    /// input must be rejected upstream by
    /// [`Puzzle::new`](crate::Puzzle::new).
    #[must_use]
    pub fn from_rows(rows: &[Vec<Option<f64>>]) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            debug_assert_eq!(row.len(), size);
            for value in row {
                cells.push(value.map_or(CellState::Empty, CellState::Fixed));
            }
        }
        Self { size, cells }
    }

    /// Returns the side length `N`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&CellState> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    /// Checks whether `pos` can accept a player value right now.
    ///
    /// # Errors
    ///
    /// Returns the [`FillError`] describing the violated precondition.
    pub fn check_fill(&self, pos: Position) -> Result<(), FillError> {
        let index = self.index_of(pos).ok_or(FillError::OutOfBounds)?;
        match self.cells[index] {
            CellState::Fixed(_) => Err(FillError::FixedCell),
            CellState::Filled(_) => Err(FillError::OccupiedCell),
            CellState::Empty => Ok(()),
        }
    }

    /// Fills the empty cell at `pos` with a player value.
    ///
    /// # Errors
    ///
    /// Returns the [`FillError`] describing the violated precondition;
    /// the board is left unchanged in that case.
    pub fn fill(&mut self, pos: Position, value: f64) -> Result<(), FillError> {
        let index = self.index_of(pos).ok_or(FillError::OutOfBounds)?;
        match self.cells[index] {
            CellState::Fixed(_) => Err(FillError::FixedCell),
            CellState::Filled(_) => Err(FillError::OccupiedCell),
            CellState::Empty => {
                self.cells[index] = CellState::Filled(value);
                Ok(())
            }
        }
    }

    /// Returns whether every cell holds a value.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    /// Iterates over the cells of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &CellState> {
        debug_assert!(col < self.size);
        self.cells.iter().skip(col).step_by(self.size)
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        (pos.row() < self.size && pos.col() < self.size).then(|| pos.row() * self.size + pos.col())
    }
}
