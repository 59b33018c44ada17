//! Grid state: one candidate mask per cell.
//!
//! [`Board`] is the mutable solving state shared by every technique and by
//! the search controller. Each of the 81 cells holds a [`DigitSet`]; an
//! empty set is a contradiction, a single-element set is a determined cell.
//!
//! The board deliberately does *not* run deductions: placing a digit only
//! intersects the peers' masks. Everything smarter lives in the solver
//! crate.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error, From};

use crate::{
    cell::Cell,
    digit::Digit,
    sets::{DigitSet, SlotSet},
    topology::{GROUPS, Group},
};

/// A cell's candidate mask became empty.
///
/// This is a normal event during search (it triggers backtracking); it is
/// only surfaced to callers when no decision remains to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no candidates left at {cell}")]
pub struct Contradiction {
    /// The cell whose mask became empty.
    pub cell: Cell,
}

/// The supplied clues violate the one-digit-per-group invariant.
///
/// Detected before any search begins, per the error-handling contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("clue {digit} at {cell} duplicates a clue in the same group")]
pub struct InvalidInput {
    /// The offending cell.
    pub cell: Cell,
    /// The duplicated digit.
    pub digit: Digit,
}

/// Errors from parsing the 81-character board format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum ParseBoardError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {len}")]
    InvalidLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// A character other than `1-9`, `.`, `0`, or `_` was found.
    #[display("invalid character {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The clues violate the one-digit-per-group invariant.
    Invalid(InvalidInput),
}

/// The solving state: 81 candidate masks in row-major order.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Board, Cell, Digit};
///
/// let mut board = Board::empty();
/// board.place(Cell::from_row_col(4, 4), Digit::D5)?;
///
/// // 5 is no longer a candidate anywhere in row 4
/// assert!(!board.candidates(Cell::from_row_col(4, 0)).contains(Digit::D5));
/// # Ok::<(), kudoku_core::Contradiction>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates a board with every digit possible in every cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Creates a board from a set of given clues.
    ///
    /// Clue cells become single-candidate masks; all other cells keep the
    /// full mask. Peer propagation is left to the deduction engine.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if two clues place the same digit in one
    /// group. The check runs before any solving can start.
    pub fn from_clues<I>(clues: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = (Cell, Digit)>,
    {
        let mut board = Self::empty();
        for (cell, digit) in clues {
            board.cells[cell.index()] = DigitSet::from_elem(digit);
        }
        board.check_clue_groups()?;
        Ok(board)
    }

    /// Verifies that no digit is determined twice within any group.
    fn check_clue_groups(&self) -> Result<(), InvalidInput> {
        for group in &GROUPS {
            let mut seen = DigitSet::EMPTY;
            for &cell in group.cells() {
                let Some(digit) = self.digit_at(cell) else {
                    continue;
                };
                if !seen.insert(digit) {
                    return Err(InvalidInput { cell, digit });
                }
            }
        }
        Ok(())
    }

    /// Returns the candidate mask of a cell.
    #[must_use]
    #[inline]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Returns the digit held by a determined cell, `None` if undetermined.
    #[must_use]
    #[inline]
    pub fn digit_at(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()].as_single()
    }

    /// Returns `true` if the cell's mask has exactly one candidate.
    #[must_use]
    #[inline]
    pub fn is_determined(&self, cell: Cell) -> bool {
        self.cells[cell.index()].len() == 1
    }

    /// Fixes a digit at a cell and intersects every peer's mask with the
    /// digit's complement.
    ///
    /// Placing a digit the cell already holds is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the digit is not a candidate at the
    /// cell, or if removing it empties any peer's mask. The board is left
    /// partially updated on error; callers restore from a snapshot.
    pub fn place(&mut self, cell: Cell, digit: Digit) -> Result<(), Contradiction> {
        if !self.cells[cell.index()].contains(digit) {
            return Err(Contradiction { cell });
        }
        self.cells[cell.index()] = DigitSet::from_elem(digit);
        for &peer in cell.peers() {
            let mask = &mut self.cells[peer.index()];
            if mask.remove(digit) && mask.is_empty() {
                return Err(Contradiction { cell: peer });
            }
        }
        Ok(())
    }

    /// Removes a candidate from a cell. Returns `true` if the mask changed.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the removal empties the cell's mask.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> Result<bool, Contradiction> {
        let mask = &mut self.cells[cell.index()];
        let changed = mask.remove(digit);
        if mask.is_empty() {
            return Err(Contradiction { cell });
        }
        Ok(changed)
    }

    /// Returns the in-group positions where `digit` is still a candidate.
    #[must_use]
    pub fn digit_slots(&self, group: &Group, digit: Digit) -> SlotSet {
        let mut slots = SlotSet::EMPTY;
        for (i, &cell) in (0..).zip(group.cells()) {
            if self.cells[cell.index()].contains(digit) {
                slots.insert(i);
            }
        }
        slots
    }

    /// Returns the in-group positions of undetermined cells.
    #[must_use]
    pub fn undetermined_slots(&self, group: &Group) -> SlotSet {
        let mut slots = SlotSet::EMPTY;
        for (i, &cell) in (0..).zip(group.cells()) {
            if !self.is_determined(cell) {
                slots.insert(i);
            }
        }
        slots
    }

    /// Returns an iterator over the undetermined cells in index order.
    pub fn undetermined_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL
            .into_iter()
            .filter(|&cell| !self.is_determined(cell))
    }

    /// Returns the number of determined cells.
    #[must_use]
    pub fn determined_count(&self) -> usize {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.is_determined(cell))
            .count()
    }

    /// Returns `true` if every cell is determined and every group contains
    /// each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        if self.cells.iter().any(|mask| mask.len() != 1) {
            return false;
        }
        GROUPS.iter().all(|group| {
            let mut seen = DigitSet::EMPTY;
            for &cell in group.cells() {
                if let Some(digit) = self.digit_at(cell) {
                    seen.insert(digit);
                }
            }
            seen == DigitSet::FULL
        })
    }
}

impl fmt::Display for Board {
    /// Writes the 81-character line format: determined cells as their
    /// digit, undetermined cells as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::ALL {
            match self.digit_at(cell) {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the 81-character format: `1-9` for clues, `.`, `0`, or `_`
    /// for empty cells. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut clues = Vec::new();
        let mut len = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            match ch {
                '.' | '0' | '_' => {}
                '1'..='9' => {
                    if len < 81 {
                        #[expect(clippy::cast_possible_truncation)]
                        let cell = Cell::new(len as u8);
                        let digit = Digit::from_value(ch as u8 - b'0');
                        clues.push((cell, digit));
                    }
                }
                ch => return Err(ParseBoardError::InvalidCharacter { ch }),
            }
            len += 1;
        }
        if len != 81 {
            return Err(ParseBoardError::InvalidLength { len });
        }
        Ok(Self::from_clues(clues)?)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_board_has_all_candidates() {
        let board = Board::empty();
        for cell in Cell::ALL {
            assert_eq!(board.candidates(cell), DigitSet::FULL);
        }
    }

    #[test]
    fn test_place_removes_from_peers() {
        let mut board = Board::empty();
        let cell = Cell::from_row_col(4, 4);
        board.place(cell, Digit::D5).unwrap();

        assert_eq!(board.digit_at(cell), Some(Digit::D5));
        for &peer in cell.peers() {
            assert!(!board.candidates(peer).contains(Digit::D5));
        }
        // Unrelated cells keep all candidates.
        assert_eq!(board.candidates(Cell::from_row_col(0, 0)).len(), 9);
    }

    #[test]
    fn test_place_is_idempotent() {
        let mut board = Board::empty();
        let cell = Cell::from_row_col(2, 7);
        board.place(cell, Digit::D3).unwrap();
        let snapshot = board.clone();

        board.place(cell, Digit::D3).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_place_rejects_absent_candidate() {
        let mut board = Board::empty();
        let cell = Cell::from_row_col(0, 0);
        board.eliminate(cell, Digit::D1).unwrap();
        assert!(board.place(cell, Digit::D1).is_err());
    }

    #[test]
    fn test_place_detects_emptied_peer() {
        let mut board = Board::empty();
        let target = Cell::from_row_col(0, 1);
        // Leave the peer with only D4.
        for digit in Digit::ALL {
            if digit != Digit::D4 {
                board.eliminate(target, digit).unwrap();
            }
        }
        // Placing D4 in the same row empties it.
        let err = board.place(Cell::from_row_col(0, 0), Digit::D4).unwrap_err();
        assert_eq!(err.cell, target);
    }

    #[test]
    fn test_eliminate_detects_contradiction() {
        let mut board = Board::empty();
        let cell = Cell::from_row_col(3, 3);
        for digit in Digit::ALL {
            let result = board.eliminate(cell, digit);
            if digit == Digit::D9 {
                assert!(result.is_err());
            } else {
                assert!(result.unwrap());
            }
        }
    }

    #[test]
    fn test_from_clues_rejects_duplicate_in_row() {
        let clues = [
            (Cell::from_row_col(0, 0), Digit::D7),
            (Cell::from_row_col(0, 5), Digit::D7),
        ];
        let err = Board::from_clues(clues).unwrap_err();
        assert_eq!(err.digit, Digit::D7);
    }

    #[test]
    fn test_from_clues_rejects_duplicate_in_box() {
        let clues = [
            (Cell::from_row_col(0, 0), Digit::D2),
            (Cell::from_row_col(2, 2), Digit::D2),
        ];
        assert!(Board::from_clues(clues).is_err());
    }

    #[test]
    fn test_from_clues_accepts_valid_clues() {
        let clues = [
            (Cell::from_row_col(0, 0), Digit::D1),
            (Cell::from_row_col(0, 1), Digit::D2),
            (Cell::from_row_col(1, 0), Digit::D3),
        ];
        let board = Board::from_clues(clues).unwrap();
        assert_eq!(board.determined_count(), 3);
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let text = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(board.determined_count(), 30);
    }

    #[test]
    fn test_parse_accepts_whitespace_and_aliases() {
        let board: Board = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        assert_eq!(board.determined_count(), 30);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(matches!(
            "123".parse::<Board>(),
            Err(ParseBoardError::InvalidLength { len: 3 })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let text = "x".repeat(81);
        assert!(matches!(
            text.parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter { ch: 'x' })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_clue() {
        let mut text = vec!['.'; 81];
        text[0] = '9';
        text[8] = '9'; // same row
        let text: String = text.into_iter().collect();
        assert!(matches!(
            text.parse::<Board>(),
            Err(ParseBoardError::Invalid(_))
        ));
    }

    #[test]
    fn test_is_solved() {
        let solved: Board =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
                .parse()
                .unwrap();
        assert!(solved.is_solved());
        assert!(!Board::empty().is_solved());
    }

    proptest! {
        #[test]
        fn prop_single_placement_keeps_group_slots_consistent(
            index in 0u8..81,
            value in 1u8..=9,
        ) {
            let cell = Cell::new(index);
            let digit = Digit::from_value(value);
            let mut board = Board::empty();
            board.place(cell, digit).unwrap();

            for group in cell.groups() {
                // The digit remains possible in exactly one cell per group.
                prop_assert_eq!(board.digit_slots(group, digit).len(), 1);
            }
        }
    }
}
