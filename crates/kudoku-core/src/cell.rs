//! Cell indices for the 9x9 grid.

use std::fmt::{self, Display};

use crate::topology::{self, Group};

/// A cell of the 9x9 grid, identified by its row-major index 0-80.
///
/// # Examples
///
/// ```
/// use kudoku_core::Cell;
///
/// let cell = Cell::from_row_col(4, 7);
/// assert_eq!(cell.index(), 43);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 7);
/// assert_eq!(cell.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// All 81 cells in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[inline]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81, "cell index out of range");
        Self(index)
    }

    /// Creates a cell from row and column coordinates (each 0-8).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "cell coordinates out of range");
        Self(row * 9 + col)
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-8).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column (0-8).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the 3x3 box index (0-8, left to right, top to bottom).
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        (self.0 / 27) * 3 + (self.0 % 9) / 3
    }

    /// Returns the up-to-20 peers of this cell (cells sharing a row,
    /// column, or box with it, deduplicated, in index order).
    #[must_use]
    #[inline]
    pub fn peers(self) -> &'static [Cell; 20] {
        &topology::PEERS[self.index()]
    }

    /// Returns the indices into [`topology::GROUPS`] of this cell's row,
    /// column, and box groups.
    #[must_use]
    #[inline]
    pub fn group_indices(self) -> [usize; 3] {
        topology::CELL_GROUPS[self.index()]
    }

    /// Returns this cell's row, column, and box groups.
    #[must_use]
    pub fn groups(self) -> [&'static Group; 3] {
        self.group_indices().map(|i| &topology::GROUPS[i])
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.col() + 1)
    }
}
