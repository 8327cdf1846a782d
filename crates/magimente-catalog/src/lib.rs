//! The static puzzle catalog.
//!
//! Ships a hand-curated set of pre-solved puzzles per level and
//! operation, and exposes it to the engine through
//! [`PuzzleSource`](magimente_game::PuzzleSource) with the documented
//! fall-back to Add when a `(level, operation)` pairing has no entry.

pub use self::catalog::StaticCatalog;

mod catalog;
mod puzzles;
