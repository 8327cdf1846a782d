//! Linear, branch-discarding undo/redo history.

use std::{collections::VecDeque, num::NonZero};

use crate::Game;

/// An ordered sequence of immutable [`Game`] snapshots plus a cursor.
///
/// The history is never empty: it is created from the initial snapshot of
/// a session, so [`current`](History::current) is total. Undo and redo
/// only move the cursor; committing a new snapshot truncates any
/// redoable future first (the standard branch-discard rule), and the
/// oldest entry is evicted once the capacity is reached.
///
/// # Examples
///
/// ```
/// use magimente_core::{Level, Operation, Position, Puzzle};
/// use magimente_game::{Game, History};
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
/// let mut history = History::new(game.clone());
/// game.place(Position::new(0, 1), 1.0).unwrap();
/// history.commit(game.clone());
///
/// assert!(history.can_undo());
/// history.undo();
/// assert_eq!(history.current().bank().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Game>,
    cursor: usize,
    capacity: NonZero<usize>,
}

impl History {
    /// Default maximum number of retained snapshots.
    #[must_use]
    pub const fn default_capacity() -> NonZero<usize> {
        NonZero::new(1000).unwrap()
    }

    /// Creates a history containing only `initial`, cursor at 0.
    #[must_use]
    pub fn new(initial: Game) -> Self {
        Self::with_capacity(initial, Self::default_capacity())
    }

    /// Creates a history with an explicit snapshot capacity.
    #[must_use]
    pub fn with_capacity(initial: Game, capacity: NonZero<usize>) -> Self {
        let mut snapshots = VecDeque::new();
        snapshots.push_back(initial);
        Self {
            snapshots,
            cursor: 0,
            capacity,
        }
    }

    /// Returns the snapshot at the cursor.
    ///
    /// # Panics
    ///
    /// Never panics: the history is non-empty and the cursor stays in
    /// range by construction.
    #[must_use]
    pub fn current(&self) -> &Game {
        &self.snapshots[self.cursor]
    }

    /// Returns the number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; provided for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the cursor index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Discards everything and restarts from `initial`.
    pub fn reset(&mut self, initial: Game) {
        self.snapshots.clear();
        self.snapshots.push_back(initial);
        self.cursor = 0;
    }

    /// Commits a new snapshot after a successful placement.
    ///
    /// Entries beyond the cursor are discarded first, so redo is only
    /// possible until the next edit. When the capacity is reached the
    /// oldest snapshot is evicted.
    pub fn commit(&mut self, snapshot: Game) {
        self.snapshots.truncate(self.cursor + 1);
        if self.snapshots.len() == self.capacity.get() {
            self.snapshots.pop_front();
        } else {
            self.cursor += 1;
        }
        self.snapshots.push_back(snapshot);
        debug_assert_eq!(self.cursor, self.snapshots.len() - 1);
    }

    /// Returns whether the cursor can move backwards.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Moves the cursor one step back. No-op at the beginning.
    ///
    /// Returns whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the cursor can move forwards.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Moves the cursor one step forward. No-op at the end.
    ///
    /// Returns whether the cursor moved.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }
}
