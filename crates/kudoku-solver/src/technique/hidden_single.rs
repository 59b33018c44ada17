use kudoku_core::{Board, Digit, topology::GROUPS};

use crate::{
    SolveError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Hidden Single";

/// Fixes digits that have only one possible position within a group.
///
/// A "hidden single" occurs when a digit's candidates within a row, column,
/// or box are confined to a single cell, even though that cell may still
/// carry other candidates.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolveError> {
        let mut changed = false;
        for group in &GROUPS {
            for digit in Digit::ALL {
                let Some(slot) = board.digit_slots(group, digit).as_single() else {
                    continue;
                };
                let cell = group.cells()[slot as usize];
                if !board.is_determined(cell) {
                    board.place(cell, digit)?;
                    changed = true;
                }
            }
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
    fn test_finds_hidden_single_in_row() {
        let mut tester = TechniqueTester::from_str(&".".repeat(81));
        // Remove 4 from every cell of row 5 except r6c8.
        for col in 0..9 {
            if col != 7 {
                tester.eliminate(Cell::from_row_col(5, col), Digit::D4);
            }
        }

        tester
            .apply_once(&HiddenSingle::new())
            .assert_placed(Cell::from_row_col(5, 7), Digit::D4);
    }

    #[test]
    fn test_finds_hidden_single_in_box() {
        let mut tester = TechniqueTester::from_str(&".".repeat(81));
        // Remove 2 from every cell of box 0 except r2c3.
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (1, 2) {
                    tester.eliminate(Cell::from_row_col(row, col), Digit::D2);
                }
            }
        }

        tester
            .apply_once(&HiddenSingle::new())
            .assert_placed(Cell::from_row_col(1, 2), Digit::D2);
    }

    #[test]
    fn test_skips_already_determined_cells() {
        let mut text = vec!['.'; 81];
        text[0] = '1';
        let text: String = text.into_iter().collect();

        // The determined clue is the sole position for 1 in its groups,
        // but nothing new can be deduced from that.
        TechniqueTester::from_str(&text)
            .apply_once(&crate::technique::NakedSingle::new())
            .apply_once_expect_no_progress(&HiddenSingle::new());
    }

    #[test]
    fn test_no_change_on_empty_board() {
        TechniqueTester::from_str(&".".repeat(81))
            .apply_once_expect_no_progress(&HiddenSingle::new());
    }
}
