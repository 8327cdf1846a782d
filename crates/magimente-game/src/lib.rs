//! The Magimente puzzle state engine.
//!
//! The engine is the composition root of one game session: it owns the
//! board and bank (via [`Game`]), the linear undo/redo [`History`], the
//! derived row/column [`LineAggregates`], and the one-shot win latch. It
//! reacts to exactly two kinds of external events — "place a number at a
//! cell" and "undo/redo/reset/new-game" — and exposes the derived state
//! to a presentation layer through [`EngineView`].
//!
//! Puzzles arrive through the [`PuzzleSource`] trait and discrete
//! feedback cues leave through the [`FeedbackSink`] trait; both are
//! injected capabilities, so the engine has no hidden global state and is
//! trivially testable with doubles.

pub use self::{
    aggregate::{Line, LineAggregates, WIN_TOLERANCE},
    engine::{Engine, EngineView, FetchOutcome, FetchTicket},
    feedback::{FeedbackSink, GameEvent, NullSink},
    game::{Game, PlaceRejection},
    history::History,
    source::{PuzzleSource, SourceError},
};

mod aggregate;
mod engine;
mod feedback;
mod game;
mod history;
mod source;
