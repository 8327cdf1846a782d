//! The puzzle record supplied by a puzzle source.

use crate::{Level, Operation};

/// Error describing a malformed puzzle at the source boundary.
///
/// Sources are trusted for the deep guarantees (target achievability,
/// bank/grid multiset equality), but the cheap structural checks are
/// enforced here so a malformed record can never reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidPuzzle {
    /// The grid has fewer than two rows.
    #[display("grid has {rows} rows, need at least 2")]
    TooSmall {
        /// Number of rows supplied.
        rows: usize,
    },
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Expected length (the number of rows).
        expected: usize,
    },
    /// The bank size does not match the number of empty cells.
    #[display("bank holds {bank_len} numbers for {empty_cells} empty cells")]
    BankMismatch {
        /// Number of empty cells in the grid.
        empty_cells: usize,
        /// Number of bank entries supplied.
        bank_len: usize,
    },
    /// A grid or bank number is NaN or infinite.
    #[display("puzzle contains a non-finite number")]
    NonFiniteNumber,
}

/// A pre-solved puzzle: a partially revealed grid, the target value, the
/// operation, and the bank of numbers covering the hidden cells.
///
/// Immutable once constructed; [`Puzzle::new`] validates the structural
/// invariants, so every `Puzzle` in circulation is square, at least 2×2,
/// finite, and has one bank number per empty cell.
///
/// # Examples
///
/// ```
/// use magimente_core::{Level, Operation, Puzzle};
///
/// let puzzle = Puzzle::new(
///     "e1_add",
///     vec![
///         vec![Some(8.0), None, Some(6.0)],
///         vec![None, Some(5.0), None],
///         vec![Some(4.0), None, Some(2.0)],
///     ],
///     15.0,
///     Operation::Add,
///     Level::Easy,
///     vec![1.0, 3.0, 7.0, 9.0],
/// )
/// .unwrap();
/// assert_eq!(puzzle.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    id: String,
    grid: Vec<Vec<Option<f64>>>,
    target_value: f64,
    operation: Operation,
    level: Level,
    bank_numbers: Vec<f64>,
}

impl Puzzle {
    /// Creates a validated puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPuzzle`] when the grid is smaller than 2×2 or not
    /// square, when the bank size does not match the empty-cell count, or
    /// when any number is non-finite.
    pub fn new(
        id: impl Into<String>,
        grid: Vec<Vec<Option<f64>>>,
        target_value: f64,
        operation: Operation,
        level: Level,
        bank_numbers: Vec<f64>,
    ) -> Result<Self, InvalidPuzzle> {
        let rows = grid.len();
        if rows < 2 {
            return Err(InvalidPuzzle::TooSmall { rows });
        }
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != rows {
                return Err(InvalidPuzzle::NotSquare {
                    row,
                    len: cells.len(),
                    expected: rows,
                });
            }
        }

        let empty_cells = grid
            .iter()
            .flatten()
            .filter(|value| value.is_none())
            .count();
        if empty_cells != bank_numbers.len() {
            return Err(InvalidPuzzle::BankMismatch {
                empty_cells,
                bank_len: bank_numbers.len(),
            });
        }

        let grid_finite = grid.iter().flatten().flatten().all(|v| v.is_finite());
        if !grid_finite || !bank_numbers.iter().all(|v| v.is_finite()) || !target_value.is_finite()
        {
            return Err(InvalidPuzzle::NonFiniteNumber);
        }

        Ok(Self {
            id: id.into(),
            grid,
            target_value,
            operation,
            level,
            bank_numbers,
        })
    }

    /// Returns the puzzle's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the partially revealed grid.
    #[must_use]
    pub fn grid(&self) -> &[Vec<Option<f64>>] {
        &self.grid
    }

    /// Returns the side length `N`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    /// Returns the common row/column target value.
    #[must_use]
    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    /// Returns the operation the puzzle is played under.
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the difficulty level the puzzle belongs to.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the bank numbers as supplied, order preserved.
    #[must_use]
    pub fn bank_numbers(&self) -> &[f64] {
        &self.bank_numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> Vec<Vec<Option<f64>>> {
        vec![
            vec![Some(8.0), None, Some(6.0)],
            vec![None, Some(5.0), None],
            vec![Some(4.0), None, Some(2.0)],
        ]
    }

    #[test]
    fn accepts_well_formed_puzzle() {
        let puzzle = Puzzle::new(
            "p",
            grid_3x3(),
            15.0,
            Operation::Add,
            Level::Easy,
            vec![1.0, 3.0, 7.0, 9.0],
        )
        .unwrap();
        assert_eq!(puzzle.size(), 3);
        assert_eq!(puzzle.bank_numbers().len(), 4);
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut grid = grid_3x3();
        grid[1].pop();
        let err = Puzzle::new("p", grid, 15.0, Operation::Add, Level::Easy, vec![0.0; 3])
            .unwrap_err();
        assert_eq!(
            err,
            InvalidPuzzle::NotSquare {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn rejects_non_square_grid() {
        let grid = vec![vec![None, None, None], vec![None, None, None]];
        let err = Puzzle::new("p", grid, 1.0, Operation::Add, Level::Easy, vec![0.0; 6])
            .unwrap_err();
        assert!(matches!(err, InvalidPuzzle::NotSquare { row: 0, .. }));
    }

    #[test]
    fn rejects_tiny_grid() {
        let err = Puzzle::new(
            "p",
            vec![vec![Some(1.0)]],
            1.0,
            Operation::Add,
            Level::Easy,
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, InvalidPuzzle::TooSmall { rows: 1 });
    }

    #[test]
    fn rejects_bank_count_mismatch() {
        let err = Puzzle::new(
            "p",
            grid_3x3(),
            15.0,
            Operation::Add,
            Level::Easy,
            vec![1.0, 3.0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            InvalidPuzzle::BankMismatch {
                empty_cells: 4,
                bank_len: 2
            }
        );
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let err = Puzzle::new(
            "p",
            grid_3x3(),
            f64::NAN,
            Operation::Add,
            Level::Easy,
            vec![1.0, 3.0, 7.0, 9.0],
        )
        .unwrap_err();
        assert_eq!(err, InvalidPuzzle::NonFiniteNumber);
    }
}
