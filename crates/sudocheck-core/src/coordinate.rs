//! `A1`-style cell addresses.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// Error returned when a coordinate string is malformed.
///
/// The display string is the user-facing message of the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid coordinate")]
pub struct CoordinateParseError;

/// A cell address on the board.
///
/// Parsed from a two-character string: a row letter `A`-`I`
/// (case-insensitive) followed by a column digit `1`-`9`. Both components
/// map to 0-based indices.
///
/// # Examples
///
/// ```
/// use sudocheck_core::Coordinate;
///
/// let coordinate: Coordinate = "C7".parse()?;
/// assert_eq!(coordinate.row(), 2);
/// assert_eq!(coordinate.col(), 6);
/// assert_eq!(coordinate.to_string(), "C7");
///
/// assert!("K1".parse::<Coordinate>().is_err());
/// assert!("A10".parse::<Coordinate>().is_err());
/// # Ok::<(), sudocheck_core::CoordinateParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Creates a coordinate from 0-based row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the 0-based row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the 0-based column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row), Some(col), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CoordinateParseError);
        };
        let row = match row.to_ascii_lowercase() {
            c @ 'a'..='i' => c as u8 - b'a',
            _ => return Err(CoordinateParseError),
        };
        let col = match col {
            c @ '1'..='9' => c as u8 - b'1',
            _ => return Err(CoordinateParseError),
        };
        Ok(Self { row, col })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'A' + self.row), self.col + 1)
    }
}
