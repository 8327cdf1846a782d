//! Derived row/column aggregates and win detection.

use magimente_core::{Board, CellState, Operation};

/// Absolute tolerance for comparing an aggregate against the target.
///
/// Absorbs floating-point error in fractional (division) puzzles. Fixed
/// by design: making it configurable would make "solved" ambiguous.
pub const WIN_TOLERANCE: f64 = 0.001;

/// Identifies one line of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// The row with the given index.
    Row(usize),
    /// The column with the given index.
    Column(usize),
}

/// The per-line aggregates of a board under one operation.
///
/// A line's aggregate is `None` until every cell in that line holds a
/// value. Computation is pure and is repeated from scratch after every
/// board change; the memory of previous aggregates (used for
/// line-completion cues) lives in the engine, not here.
///
/// # Examples
///
/// ```
/// use magimente_core::{Board, Operation};
/// use magimente_game::LineAggregates;
///
/// let board = Board::from_rows(&[
///     vec![Some(8.0), Some(1.0), Some(6.0)],
///     vec![None, Some(5.0), None],
///     vec![Some(4.0), None, Some(2.0)],
/// ]);
/// let aggregates = LineAggregates::compute(&board, Operation::Add);
/// assert_eq!(aggregates.rows()[0], Some(15.0));
/// assert_eq!(aggregates.rows()[1], None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineAggregates {
    rows: Vec<Option<f64>>,
    cols: Vec<Option<f64>>,
}

impl LineAggregates {
    /// Computes the aggregates of every row and column of `board` under
    /// `operation`.
    #[must_use]
    pub fn compute(board: &Board, operation: Operation) -> Self {
        let rows = board
            .rows()
            .map(|row| fold_line(row.iter(), operation))
            .collect();
        let cols = (0..board.size())
            .map(|col| fold_line(board.column(col), operation))
            .collect();
        Self { rows, cols }
    }

    /// Returns the row aggregates, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Option<f64>] {
        &self.rows
    }

    /// Returns the column aggregates, left to right.
    #[must_use]
    pub fn cols(&self) -> &[Option<f64>] {
        &self.cols
    }

    /// Returns whether every line aggregate is present and within
    /// [`WIN_TOLERANCE`] of `target`.
    #[must_use]
    pub fn is_solved(&self, target: f64) -> bool {
        self.rows
            .iter()
            .chain(&self.cols)
            .all(|aggregate| aggregate.is_some_and(|value| at_target(value, target)))
    }

    /// Returns, per line, whether its aggregate is present and at the
    /// target. Used by the engine for line-completion edge detection.
    #[must_use]
    pub(crate) fn target_hits(&self, target: f64) -> LineHits {
        let hit = |aggregate: &Option<f64>| aggregate.is_some_and(|value| at_target(value, target));
        LineHits {
            rows: self.rows.iter().map(hit).collect(),
            cols: self.cols.iter().map(hit).collect(),
        }
    }
}

/// Per-line "aggregate is at the target" flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct LineHits {
    pub(crate) rows: Vec<bool>,
    pub(crate) cols: Vec<bool>,
}

impl LineHits {
    /// Lines that are hits in `self` but not in `prev`.
    pub(crate) fn newly_hit(&self, prev: &LineHits) -> Vec<Line> {
        let prev_row = |i: usize| prev.rows.get(i).copied().unwrap_or_default();
        let prev_col = |i: usize| prev.cols.get(i).copied().unwrap_or_default();

        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(i, &hit)| hit && !prev_row(i))
            .map(|(i, _)| Line::Row(i));
        let cols = self
            .cols
            .iter()
            .enumerate()
            .filter(|&(i, &hit)| hit && !prev_col(i))
            .map(|(i, _)| Line::Column(i));
        rows.chain(cols).collect()
    }
}

fn at_target(value: f64, target: f64) -> bool {
    (value - target).abs() < WIN_TOLERANCE
}

fn fold_line<'a>(cells: impl Iterator<Item = &'a CellState>, operation: Operation) -> Option<f64> {
    let mut acc = operation.identity();
    for cell in cells {
        acc = operation.fold(acc, cell.value()?);
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use magimente_core::Position;

    use super::*;

    fn full_add_board() -> Board {
        // The classic 3×3 magic square, every line sums to 15.
        Board::from_rows(&[
            vec![Some(8.0), Some(1.0), Some(6.0)],
            vec![Some(3.0), Some(5.0), Some(7.0)],
            vec![Some(4.0), Some(9.0), Some(2.0)],
        ])
    }

    #[test]
    fn partial_lines_have_no_aggregate() {
        let board = Board::from_rows(&[
            vec![Some(8.0), None, Some(6.0)],
            vec![Some(3.0), Some(5.0), Some(7.0)],
            vec![Some(4.0), Some(9.0), Some(2.0)],
        ]);

        let aggregates = LineAggregates::compute(&board, Operation::Add);
        assert_eq!(aggregates.rows(), &[None, Some(15.0), Some(15.0)]);
        assert_eq!(aggregates.cols(), &[Some(15.0), None, Some(15.0)]);
    }

    #[test]
    fn add_board_solves_at_target_15() {
        let aggregates = LineAggregates::compute(&full_add_board(), Operation::Add);
        assert_eq!(aggregates.rows(), &[Some(15.0), Some(15.0), Some(15.0)]);
        assert_eq!(aggregates.cols(), &[Some(15.0), Some(15.0), Some(15.0)]);
        assert!(aggregates.is_solved(15.0));
        assert!(!aggregates.is_solved(16.0));
    }

    #[test]
    fn divide_rows_aggregate_by_product() {
        let board = Board::from_rows(&[
            vec![Some(10.0), Some(0.5), Some(4.0)],
            vec![Some(2.0), Some(1.0), Some(10.0)],
            vec![Some(1.0), Some(40.0), Some(0.5)],
        ]);
        let aggregates = LineAggregates::compute(&board, Operation::Divide);
        assert_eq!(aggregates.rows(), &[Some(20.0), Some(20.0), Some(20.0)]);
        assert_eq!(aggregates.cols(), &[Some(20.0), Some(20.0), Some(20.0)]);
        assert!(aggregates.is_solved(20.0));
    }

    #[test]
    fn tolerance_is_strictly_less_than_a_thousandth() {
        let board = Board::from_rows(&[
            vec![Some(1.0), Some(1.0)],
            vec![Some(1.0), Some(1.0)],
        ]);
        let aggregates = LineAggregates::compute(&board, Operation::Add);
        assert!(aggregates.is_solved(2.0 + 0.000_9));
        assert!(!aggregates.is_solved(2.0 + 0.002));
    }

    #[test]
    fn newly_hit_reports_edges_only() {
        let mut board = Board::from_rows(&[
            vec![Some(8.0), None, Some(6.0)],
            vec![Some(3.0), Some(5.0), Some(7.0)],
            vec![Some(4.0), Some(9.0), Some(2.0)],
        ]);

        let before = LineAggregates::compute(&board, Operation::Add).target_hits(15.0);
        board.fill(Position::new(0, 1), 1.0).unwrap();
        let after = LineAggregates::compute(&board, Operation::Add).target_hits(15.0);

        let newly = after.newly_hit(&before);
        assert_eq!(newly, vec![Line::Row(0), Line::Column(1)]);

        // No change, no edges.
        assert!(after.newly_hit(&after).is_empty());
    }
}
