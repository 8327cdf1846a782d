//! Core data types for the Magimente puzzle.
//!
//! This crate holds the pure data model shared by the game engine and the
//! puzzle catalog: the board grid with its fixed/filled/empty cells, the
//! bank of placeable numbers, the arithmetic operation and difficulty
//! level, and the validated [`Puzzle`] record handed over by a puzzle
//! source.
//!
//! Numbers are plain `f64` values: subtraction puzzles encode negative
//! operands and division puzzles encode fractional operands directly in
//! the data, so a single signed/fractional fold covers all four
//! operations.

pub use self::{
    bank::Bank,
    board::{Board, FillError},
    cell::CellState,
    operation::{Level, Operation, ParseLevelError, ParseOperationError},
    position::Position,
    puzzle::{InvalidPuzzle, Puzzle},
};

mod bank;
mod board;
mod cell;
mod operation;
mod position;
mod puzzle;
