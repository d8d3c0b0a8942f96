//! Core data structures for the sudocheck service.
//!
//! This crate provides the puzzle representation and the placement rules that
//! both the solver and the HTTP boundary build on. It has no knowledge of
//! transport concerns; everything here is a pure, per-call computation.
//!
//! # Overview
//!
//! - [`board`]: the 9x9 [`Board`] together with the 81-character puzzle-string
//!   codec and the row/column/region placement predicates
//! - [`conflict`]: [`Conflict`] categories and the [`ConflictSet`] reported
//!   for an invalid placement
//! - [`coordinate`]: [`Coordinate`], the `A1`-style cell address used by the
//!   check endpoint
//!
//! # Examples
//!
//! ```
//! use sudocheck_core::{Board, Conflict};
//!
//! let puzzle = ".".repeat(81);
//! let mut board = Board::from_puzzle(&puzzle)?;
//! board.set(0, 0, 5);
//!
//! // 5 already appears in row 0, so placing it again conflicts.
//! assert!(!board.row_valid(0, 3, 5));
//! assert!(board.conflicts(0, 3, 5).contains(Conflict::Row));
//! # Ok::<(), sudocheck_core::PuzzleParseError>(())
//! ```

pub mod board;
pub mod conflict;
pub mod coordinate;

// Re-export commonly used types
pub use self::{
    board::{Board, PuzzleParseError},
    conflict::{Conflict, ConflictSet},
    coordinate::{Coordinate, CoordinateParseError},
};
