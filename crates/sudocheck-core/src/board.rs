//! The 9x9 board, its puzzle-string codec, and the placement predicates.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::conflict::{Conflict, ConflictSet};

/// Error returned when a puzzle string fails format validation.
///
/// The length of the cleaned string is checked before its alphabet, so a
/// string that is both too long and contains a stray character reports
/// [`Length`](Self::Length).
///
/// The display strings are the user-facing messages of the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PuzzleParseError {
    /// The cleaned string is not exactly 81 characters long.
    #[display("Expected puzzle to be 81 characters long")]
    Length,
    /// The string contains a character outside `1-9` and `.`.
    #[display("Invalid characters in puzzle")]
    Alphabet,
}

/// A 9x9 sudoku board.
///
/// Cells hold values in the range 0-9, with 0 denoting an empty cell. Boards
/// are built fresh from a puzzle string per operation and never shared across
/// requests.
///
/// # Examples
///
/// ```
/// use sudocheck_core::Board;
///
/// let puzzle =
///     "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3";
/// let board = Board::from_puzzle(puzzle)?;
///
/// assert_eq!(board.get(0, 0), 5);
/// assert_eq!(board.get(0, 1), 0); // '.' decodes to an empty cell
/// assert_eq!(board.to_puzzle(), puzzle);
/// # Ok::<(), sudocheck_core::PuzzleParseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; 9]; 9],
}

impl Board {
    /// Decodes an 81-character puzzle string into a board.
    ///
    /// Whitespace is stripped before validation. Digits map to themselves and
    /// `.` maps to an empty cell, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleParseError::Length`] if the cleaned string is not
    /// exactly 81 characters, and [`PuzzleParseError::Alphabet`] if it
    /// contains a character outside `1-9` and `.`.
    pub fn from_puzzle(puzzle: &str) -> Result<Self, PuzzleParseError> {
        let cleaned: String = puzzle.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.chars().count() != 81 {
            return Err(PuzzleParseError::Length);
        }
        let mut board = Self::default();
        for (i, c) in cleaned.chars().enumerate() {
            board.cells[i / 9][i % 9] = match c {
                '.' => 0,
                '1'..='9' => c as u8 - b'0',
                _ => return Err(PuzzleParseError::Alphabet),
            };
        }
        Ok(board)
    }

    /// Encodes the board back into an 81-character puzzle string.
    ///
    /// Empty cells encode as `.`. This is the exact inverse of
    /// [`from_puzzle`](Self::from_puzzle) for any valid input.
    #[must_use]
    pub fn to_puzzle(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| if v == 0 { '.' } else { char::from(b'0' + v) })
            .collect()
    }

    /// Returns the value at `(row, col)`, 0 for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Sets the cell at `(row, col)` to `value` (0 clears it).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8, or if `value` is
    /// greater than 9.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(value <= 9, "cell value must be 0-9, got {value}");
        self.cells[row][col] = value;
    }

    /// Returns `true` if `value` does not yet appear in `row`.
    ///
    /// Values outside 1-9 are rejected up front. The scan covers the whole
    /// row, including the target cell itself; callers that want to re-assert
    /// a cell's current value must short-circuit before calling this.
    #[must_use]
    pub fn row_valid(&self, row: usize, _col: usize, value: u8) -> bool {
        if !(1..=9).contains(&value) {
            return false;
        }
        !self.cells[row].contains(&value)
    }

    /// Returns `true` if `value` does not yet appear in `col`.
    ///
    /// Same bound check and whole-house scan as [`row_valid`](Self::row_valid).
    #[must_use]
    pub fn col_valid(&self, _row: usize, col: usize, value: u8) -> bool {
        if !(1..=9).contains(&value) {
            return false;
        }
        !self.cells.iter().any(|r| r[col] == value)
    }

    /// Returns `true` if `value` does not yet appear in the 3x3 region
    /// containing `(row, col)`.
    ///
    /// Same bound check and whole-house scan as [`row_valid`](Self::row_valid).
    #[must_use]
    pub fn region_valid(&self, row: usize, col: usize, value: u8) -> bool {
        if !(1..=9).contains(&value) {
            return false;
        }
        let (top, left) = (row - row % 3, col - col % 3);
        !self.cells[top..top + 3]
            .iter()
            .any(|r| r[left..left + 3].contains(&value))
    }

    /// Collects every constraint category that placing `value` at
    /// `(row, col)` would violate.
    ///
    /// All three predicates are evaluated; a placement can conflict with its
    /// row, column, and region at the same time.
    #[must_use]
    pub fn conflicts(&self, row: usize, col: usize, value: u8) -> ConflictSet {
        let mut set = ConflictSet::EMPTY;
        if !self.row_valid(row, col, value) {
            set.insert(Conflict::Row);
        }
        if !self.col_valid(row, col, value) {
            set.insert(Conflict::Column);
        }
        if !self.region_valid(row, col, value) {
            set.insert(Conflict::Region);
        }
        set
    }
}

impl FromStr for Board {
    type Err = PuzzleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_puzzle(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_puzzle())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str =
        "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3";

    #[test]
    fn test_decode_valid_puzzle() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        assert_eq!(board.get(0, 0), 5);
        assert_eq!(board.get(0, 1), 0);
        assert_eq!(board.get(0, 3), 9);
        assert_eq!(board.get(8, 8), 3);
    }

    #[test]
    fn test_decode_strips_whitespace() {
        let spaced = format!("  {} \n", PUZZLE.replace('3', "3 "));
        let board = Board::from_puzzle(&spaced).unwrap();
        assert_eq!(board, Board::from_puzzle(PUZZLE).unwrap());
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert_eq!(
            Board::from_puzzle(&PUZZLE[..80]),
            Err(PuzzleParseError::Length)
        );
        assert_eq!(
            Board::from_puzzle(&format!("{PUZZLE}.")),
            Err(PuzzleParseError::Length)
        );
        assert_eq!(Board::from_puzzle(""), Err(PuzzleParseError::Length));
    }

    #[test]
    fn test_decode_rejects_bad_alphabet() {
        let bad = PUZZLE.replacen('.', "A", 1);
        assert_eq!(Board::from_puzzle(&bad), Err(PuzzleParseError::Alphabet));
        let zero = PUZZLE.replacen('.', "0", 1);
        assert_eq!(Board::from_puzzle(&zero), Err(PuzzleParseError::Alphabet));
    }

    #[test]
    fn test_length_error_takes_priority() {
        // 85 characters with an invalid character still reports length
        let long = format!("{PUZZLE}...X");
        assert_eq!(long.len(), 85);
        assert_eq!(Board::from_puzzle(&long), Err(PuzzleParseError::Length));
    }

    #[test]
    fn test_round_trip_fixture() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        assert_eq!(board.to_puzzle(), PUZZLE);
        assert_eq!(board.to_string(), PUZZLE);
        assert_eq!(PUZZLE.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_row_placement() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        assert!(board.row_valid(0, 2, 6));
        assert!(!board.row_valid(0, 2, 1));
        assert!(!board.row_valid(0, 2, 5));
    }

    #[test]
    fn test_col_placement() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        assert!(board.col_valid(2, 0, 1));
        assert!(!board.col_valid(2, 0, 6));
    }

    #[test]
    fn test_region_placement() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        assert!(board.region_valid(1, 1, 1));
        assert!(!board.region_valid(1, 1, 5));
    }

    #[test]
    fn test_predicates_reject_out_of_range_values() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        for value in [0, 10, 255] {
            assert!(!board.row_valid(0, 0, value));
            assert!(!board.col_valid(0, 0, value));
            assert!(!board.region_valid(0, 0, value));
        }
    }

    #[test]
    fn test_predicates_do_not_exclude_target_cell() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        // (0, 0) already holds 5; the scan still sees it.
        assert!(!board.row_valid(0, 0, 5));
        assert!(!board.col_valid(0, 0, 5));
        assert!(!board.region_valid(0, 0, 5));
    }

    #[test]
    fn test_conflicts_single_category() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        let set = board.conflicts(0, 0, 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Conflict::Row]);
    }

    #[test]
    fn test_conflicts_all_categories() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        let set = board.conflicts(0, 1, 5);
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Conflict::Row, Conflict::Column, Conflict::Region]
        );
    }

    #[test]
    fn test_conflicts_empty_for_legal_placement() {
        let board = Board::from_puzzle(PUZZLE).unwrap();
        assert!(board.conflicts(0, 2, 6).is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::default();
        assert_eq!(board.get(4, 4), 0);
        board.set(4, 4, 9);
        assert_eq!(board.get(4, 4), 9);
        board.set(4, 4, 0);
        assert_eq!(board.get(4, 4), 0);
    }

    #[test]
    #[should_panic(expected = "cell value must be 0-9")]
    fn test_set_rejects_out_of_range_value() {
        let mut board = Board::default();
        board.set(0, 0, 10);
    }

    proptest! {
        #[test]
        fn prop_round_trip(puzzle in "[1-9.]{81}") {
            let board = Board::from_puzzle(&puzzle).unwrap();
            prop_assert_eq!(board.to_puzzle(), puzzle.clone());
            prop_assert_eq!(Board::from_puzzle(&board.to_puzzle()).unwrap(), board);
        }

        #[test]
        fn prop_wrong_length_rejected(puzzle in "[1-9.]{0,80}") {
            prop_assert_eq!(Board::from_puzzle(&puzzle), Err(PuzzleParseError::Length));
        }
    }
}
