//! One game session's mutable state: board plus bank.

use magimente_core::{Bank, Board, FillError, Position, Puzzle};

/// Error describing why a placement was not applied.
///
/// A rejection is the normal outcome of an invalid drop target, not a
/// fault: callers are free to ignore it silently, and the engine does
/// exactly that. The session is left unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceRejection {
    /// The target position lies outside the board.
    #[display("position is outside the board")]
    OutOfBounds,
    /// The target cell is puzzle-given.
    #[display("cell is fixed by the puzzle")]
    FixedCell,
    /// The target cell already holds a player value.
    #[display("cell is already filled")]
    OccupiedCell,
    /// The value is not currently in the bank.
    #[display("value is not in the bank")]
    NotInBank,
}

impl From<FillError> for PlaceRejection {
    fn from(err: FillError) -> Self {
        match err {
            FillError::OutOfBounds => Self::OutOfBounds,
            FillError::FixedCell => Self::FixedCell,
            FillError::OccupiedCell => Self::OccupiedCell,
        }
    }
}

/// The board and bank of one game in progress.
///
/// A `Game` value doubles as a history snapshot: it is cheap to clone and
/// never mutated once committed to [`History`](crate::History).
///
/// # Examples
///
/// ```
/// use magimente_core::{Level, Operation, Position, Puzzle};
/// use magimente_game::Game;
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
///
/// let mut game = Game::new(&puzzle);
/// assert!(game.place(Position::new(0, 1), 1.0).is_ok());
/// assert!(!game.bank().contains(1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    bank: Bank,
}

impl Game {
    /// Creates the initial state for a puzzle: given values become fixed
    /// cells, the bank is the puzzle's bank list verbatim.
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        Self {
            board: Board::from_rows(puzzle.grid()),
            bank: Bank::new(puzzle.bank_numbers().to_vec()),
        }
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the bank.
    #[must_use]
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Returns whether every board cell holds a value.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Places `value` from the bank into the empty cell at `pos`.
    ///
    /// On success the cell becomes filled and exactly one occurrence of
    /// `value` (matched bit-for-bit) leaves the bank, preserving the
    /// conservation law between bank and filled cells.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceRejection`] when the position is out of bounds,
    /// the cell is fixed or already filled, or the value is not in the
    /// bank. Board and bank are unchanged in every rejection case.
    pub fn place(&mut self, pos: Position, value: f64) -> Result<(), PlaceRejection> {
        self.board.check_fill(pos)?;
        if !self.bank.take(value) {
            return Err(PlaceRejection::NotInBank);
        }
        self.board.fill(pos, value)?;
        Ok(())
    }
}
