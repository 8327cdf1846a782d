//! The puzzle source boundary.

use magimente_core::{InvalidPuzzle, Level, Operation, Puzzle};

/// Error returned when a puzzle source cannot deliver a puzzle.
///
/// Every variant is retryable from the engine's point of view: the
/// engine stays in its previous state and the caller decides on a retry
/// or backoff policy.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SourceError {
    /// The source has no puzzle for the requested level at all.
    #[display("no puzzle available for level {level}")]
    NoPuzzle {
        /// The level that came up empty.
        level: Level,
    },
    /// The source produced a structurally malformed puzzle.
    #[display("source produced a malformed puzzle: {_0}")]
    Malformed(InvalidPuzzle),
    /// The source could not be reached or failed internally.
    #[display("puzzle source unavailable: {reason}")]
    Unavailable {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Supplies pre-solved puzzles to the engine.
///
/// A source may be a static catalog lookup or a remote generator; the
/// engine does not care. Implementations guarantee on success that the
/// grid is square, that the bank matches the empty cells, and that the
/// target is achievable under the declared operation — the first two are
/// enforced by [`Puzzle::new`], the last is trusted.
///
/// When no puzzle exists for the exact `(level, operation)` pairing, the
/// source falls back to the Add operation at the same level. This is a
/// documented fallback, not a failure; it is observable through the
/// returned puzzle's operation field.
pub trait PuzzleSource {
    /// Fetches a puzzle for the given level and operation.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when no puzzle can be delivered; the
    /// failure is retryable.
    fn fetch(&mut self, level: Level, operation: Operation) -> Result<Puzzle, SourceError>;
}
