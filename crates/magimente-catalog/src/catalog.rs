//! [`PuzzleSource`] implementation over the baked-in data.

use std::fmt;

use log::info;
use magimente_core::{Level, Operation, Puzzle};
use magimente_game::{PuzzleSource, SourceError};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::puzzles;

/// A puzzle source backed by the compiled-in catalog.
///
/// Picks uniformly among the catalog entries matching the requested
/// level and operation. When the pairing has no entry, it falls back to
/// the Add puzzles of the same level, so a request can only fail for a
/// level with no puzzles at all.
pub struct StaticCatalog {
    rng: Pcg64Mcg,
}

impl StaticCatalog {
    /// Creates a catalog seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Creates a catalog with a fixed seed, for reproducible picks.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StaticCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCatalog").finish_non_exhaustive()
    }
}

impl PuzzleSource for StaticCatalog {
    fn fetch(&mut self, level: Level, operation: Operation) -> Result<Puzzle, SourceError> {
        let pool = puzzles::catalog(level);

        let mut candidates: Vec<&Puzzle> = pool
            .iter()
            .filter(|puzzle| puzzle.operation() == operation)
            .collect();
        if candidates.is_empty() {
            info!("no {operation} puzzle at level {level}, falling back to {}", Operation::Add);
            candidates = pool
                .iter()
                .filter(|puzzle| puzzle.operation() == Operation::Add)
                .collect();
        }

        if candidates.is_empty() {
            return Err(SourceError::NoPuzzle { level });
        }
        let index = self.rng.random_range(0..candidates.len());
        Ok(candidates[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pairing_yields_a_puzzle() {
        let mut catalog = StaticCatalog::from_seed(0);
        for level in Level::ALL {
            for operation in Operation::ALL {
                let puzzle = catalog.fetch(level, operation).unwrap();
                assert_eq!(puzzle.level(), level);
            }
        }
    }

    #[test]
    fn matching_operation_is_preferred() {
        let mut catalog = StaticCatalog::from_seed(7);
        let puzzle = catalog.fetch(Level::Hard, Operation::Divide).unwrap();
        assert_eq!(puzzle.operation(), Operation::Divide);
    }

    #[test]
    fn missing_pairing_falls_back_to_add() {
        // No Medium division puzzle exists in the catalog.
        let mut catalog = StaticCatalog::from_seed(7);
        let puzzle = catalog.fetch(Level::Medium, Operation::Divide).unwrap();
        assert_eq!(puzzle.operation(), Operation::Add);
        assert_eq!(puzzle.level(), Level::Medium);
    }

    #[test]
    fn seeded_catalogs_pick_the_same_sequence() {
        let mut a = StaticCatalog::from_seed(42);
        let mut b = StaticCatalog::from_seed(42);
        for _ in 0..16 {
            let x = a.fetch(Level::Easy, Operation::Add).unwrap();
            let y = b.fetch(Level::Easy, Operation::Add).unwrap();
            assert_eq!(x.id(), y.id());
        }
    }
}
