//! Constraint categories violated by a candidate placement.

use derive_more::Display;

/// A constraint category a placement can violate.
///
/// Displays as the lowercase category name used in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(u8)]
pub enum Conflict {
    /// The value already appears in the target row.
    #[display("row")]
    Row = 0,
    /// The value already appears in the target column.
    #[display("column")]
    Column = 1,
    /// The value already appears in the target 3x3 region.
    #[display("region")]
    Region = 2,
}

impl Conflict {
    /// All categories in reporting order: row, column, region.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Region];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of [`Conflict`] categories, represented as a bitmask.
///
/// Iteration always yields categories in the fixed reporting order of
/// [`Conflict::ALL`], regardless of insertion order.
///
/// # Examples
///
/// ```
/// use sudocheck_core::{Conflict, ConflictSet};
///
/// let mut set = ConflictSet::EMPTY;
/// set.insert(Conflict::Region);
/// set.insert(Conflict::Row);
///
/// assert_eq!(set.len(), 2);
/// assert!(!set.contains(Conflict::Column));
/// assert_eq!(
///     set.iter().collect::<Vec<_>>(),
///     vec![Conflict::Row, Conflict::Region]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConflictSet {
    bits: u8,
}

impl ConflictSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a category to the set.
    pub fn insert(&mut self, conflict: Conflict) {
        self.bits |= conflict.bit();
    }

    /// Returns `true` if the category is in the set.
    #[must_use]
    pub const fn contains(self, conflict: Conflict) -> bool {
        self.bits & conflict.bit() != 0
    }

    /// Returns `true` if no category is in the set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the number of categories in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterates the contained categories in row, column, region order.
    pub fn iter(self) -> impl Iterator<Item = Conflict> {
        Conflict::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Conflict> for ConflictSet {
    fn from_iter<I: IntoIterator<Item = Conflict>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for conflict in iter {
            set.insert(conflict);
        }
        set
    }
}
