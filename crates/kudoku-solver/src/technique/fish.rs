use kudoku_core::{
    Board, Digit, SlotSet,
    topology::{GROUPS, col_group, row_group},
};
use tinyvec::ArrayVec;

use crate::{
    SolveError,
    technique::{BoxedTechnique, Technique, next_combination},
};

/// Removes candidates using basic fish patterns.
///
/// When a digit's candidates in `size` rows are confined to the same `size`
/// columns, the digit cannot appear anywhere else in those columns (and
/// symmetrically with rows and columns swapped). Size 2 is the X-Wing,
/// 3 the Swordfish, 4 the Jellyfish.
#[derive(Debug, Clone, Copy)]
pub struct Fish {
    size: usize,
}

impl Fish {
    /// Creates a fish search of the given size (2-4).
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range 2-4.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!((2..=4).contains(&size), "fish size out of range");
        Self { size }
    }

    fn sweep(
        &self,
        board: &mut Board,
        digit: Digit,
        rows_are_base: bool,
    ) -> Result<bool, SolveError> {
        let base = |i: u8| {
            if rows_are_base {
                &GROUPS[row_group(i)]
            } else {
                &GROUPS[col_group(i)]
            }
        };
        let cover = |i: u8| {
            if rows_are_base {
                &GROUPS[col_group(i)]
            } else {
                &GROUPS[row_group(i)]
            }
        };

        // Base lines where the digit is still open in 2..=size positions.
        let mut eligible: ArrayVec<[(u8, SlotSet); 9]> = ArrayVec::new();
        for line in 0..9 {
            let group = base(line);
            let slots = board.digit_slots(group, digit) & board.undetermined_slots(group);
            if slots.len() >= 2 && slots.len() <= self.size {
                eligible.push((line, slots));
            }
        }
        if eligible.len() < self.size {
            return Ok(false);
        }

        let mut changed = false;
        let mut idx: Vec<usize> = (0..self.size).collect();
        loop {
            let mut lines = SlotSet::EMPTY;
            let mut covers = SlotSet::EMPTY;
            for &i in &idx {
                let (line, slots) = eligible[i];
                lines.insert(line);
                covers |= slots;
            }
            if covers.len() == self.size {
                for cover_slot in covers {
                    let group = cover(cover_slot);
                    let open = board.digit_slots(group, digit) & board.undetermined_slots(group);
                    for slot in open.difference(lines) {
                        let cell = group.cells()[slot as usize];
                        changed |= board.eliminate(cell, digit)?;
                    }
                }
            }
            if !next_combination(&mut idx, eligible.len()) {
                break;
            }
        }
        Ok(changed)
    }
}

impl Technique for Fish {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "X-Wing",
            3 => "Swordfish",
            4 => "Jellyfish",
            _ => unreachable!("fish size out of range"),
        }
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolveError> {
        let mut changed = false;
        for digit in Digit::ALL {
            changed |= self.sweep(board, digit, true)?;
            changed |= self.sweep(board, digit, false)?;
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use kudoku_core::Cell;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_x_wing_on_rows() {
        let mut tester = TechniqueTester::from_str(&".".repeat(81));
        // Confine 6 in rows 1 and 7 to columns 2 and 6.
        for row in [1, 7] {
            for col in 0..9 {
                if col != 2 && col != 6 {
                    tester.eliminate(Cell::from_row_col(row, col), Digit::D6);
                }
            }
        }

        tester
            .apply_once(&Fish::new(2))
            // 6 removed from the rest of columns 2 and 6.
            .assert_eliminated(Cell::from_row_col(0, 2), [Digit::D6])
            .assert_eliminated(Cell::from_row_col(4, 6), [Digit::D6])
            // The fish cells keep the candidate.
            .assert_no_change(Cell::from_row_col(1, 2));
    }

    #[test]
    fn test_x_wing_on_columns() {
        let mut tester = TechniqueTester::from_str(&".".repeat(81));
        // Confine 8 in columns 0 and 5 to rows 3 and 8.
        for col in [0, 5] {
            for row in 0..9 {
                if row != 3 && row != 8 {
                    tester.eliminate(Cell::from_row_col(row, col), Digit::D8);
                }
            }
        }

        tester
            .apply_once(&Fish::new(2))
            .assert_eliminated(Cell::from_row_col(3, 1), [Digit::D8])
            .assert_eliminated(Cell::from_row_col(8, 7), [Digit::D8]);
    }

    #[test]
    fn test_swordfish_with_two_candidate_rows() {
        // A size-3 fish whose base rows each hold only two of the three
        // cover columns.
        let mut tester = TechniqueTester::from_str(&".".repeat(81));
        let keep = [(0, [1, 4]), (3, [4, 7]), (6, [1, 7])];
        for (row, cols) in keep {
            for col in 0..9 {
                if !cols.contains(&col) {
                    tester.eliminate(Cell::from_row_col(row, col), Digit::D2);
                }
            }
        }

        tester
            .apply_once(&Fish::new(3))
            .assert_eliminated(Cell::from_row_col(2, 1), [Digit::D2])
            .assert_eliminated(Cell::from_row_col(5, 4), [Digit::D2])
            .assert_eliminated(Cell::from_row_col(8, 7), [Digit::D2]);
    }

    #[test]
    fn test_no_change_on_empty_board() {
        TechniqueTester::from_str(&".".repeat(81))
            .apply_once_expect_no_progress(&Fish::new(2))
            .apply_once_expect_no_progress(&Fish::new(3))
            .apply_once_expect_no_progress(&Fish::new(4));
    }
}
