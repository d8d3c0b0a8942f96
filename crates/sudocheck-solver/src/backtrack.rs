//! Depth-first backtracking search.

use derive_more::{Display, Error, From};
use sudocheck_core::{Board, PuzzleParseError};

/// Error returned when a puzzle cannot be solved.
///
/// The display strings are the user-facing messages of the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolveError {
    /// The puzzle string failed format validation.
    #[display("{_0}")]
    #[from]
    Parse(PuzzleParseError),
    /// No assignment of the empty cells satisfies the constraints.
    #[display("Puzzle cannot be solved")]
    Unsolvable,
}

/// Solves a puzzle string, returning the encoded solution.
///
/// Decodes the puzzle, runs the backtracking search, and encodes the filled
/// board. No partial result is returned on failure. The input string is
/// never mutated; the solver works on its own board.
///
/// # Errors
///
/// Returns [`SolveError::Parse`] if the puzzle string is malformed and
/// [`SolveError::Unsolvable`] if no valid completion exists.
pub fn solve(puzzle: &str) -> Result<String, SolveError> {
    let mut board = Board::from_puzzle(puzzle)?;
    if !solve_board(&mut board) {
        log::debug!("puzzle has no valid completion");
        return Err(SolveError::Unsolvable);
    }
    Ok(board.to_puzzle())
}

/// Fills all empty cells of `board` in place.
///
/// Returns `true` on success, leaving the board complete. Returns `false`
/// if no completion exists; the board is restored to its input state in
/// that case. An already-complete board succeeds immediately.
///
/// Candidates are tried in ascending order at the first empty cell in
/// row-major order, making the search fully deterministic.
pub fn solve_board(board: &mut Board) -> bool {
    let Some((row, col)) = find_empty(board) else {
        return true;
    };
    for value in 1..=9 {
        if board.row_valid(row, col, value)
            && board.col_valid(row, col, value)
            && board.region_valid(row, col, value)
        {
            board.set(row, col, value);
            if solve_board(board) {
                return true;
            }
            board.set(row, col, 0);
        }
    }
    false
}

/// Returns the first empty cell in row-major order, if any.
fn find_empty(board: &Board) -> Option<(usize, usize)> {
    (0..9)
        .flat_map(|row| (0..9).map(move |col| (row, col)))
        .find(|&(row, col)| board.get(row, col) == 0)
}
