use kudoku_core::{Board, Cell};

use crate::{
    SolveError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Naked Single";

/// Fixes cells whose mask has exactly one candidate and propagates the
/// digit to their peers.
///
/// This technique is the engine's propagation mechanism: other techniques
/// only narrow masks, and any cell they determine is propagated here when
/// control returns to the front of the pass order. A cell counts as
/// pending exactly while some peer still carries its digit, so re-applying
/// the technique to an already propagated board is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Technique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolveError> {
        let mut changed = false;
        for cell in Cell::ALL {
            let Some(digit) = board.digit_at(cell) else {
                continue;
            };
            let pending = cell
                .peers()
                .iter()
                .any(|&peer| board.candidates(peer).contains(digit));
            if pending {
                board.place(cell, digit)?;
                changed = true;
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use kudoku_core::Digit;

    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_propagates_determined_cell() {
        let mut text = vec!['.'; 81];
        text[40] = '5'; // r5c5
        let text: String = text.into_iter().collect();

        TechniqueTester::from_str(&text)
            .apply_once(&NakedSingle::new())
            // 5 removed from the row, column, and box of r5c5.
            .assert_eliminated(Cell::from_row_col(4, 0), [Digit::D5])
            .assert_eliminated(Cell::from_row_col(0, 4), [Digit::D5])
            .assert_eliminated(Cell::from_row_col(3, 3), [Digit::D5])
            // Unrelated cells untouched.
            .assert_no_change(Cell::from_row_col(0, 0));
    }

    #[test]
    fn test_cascades_within_one_sweep_or_two() {
        // Eight clues in row 0 leave its last cell with only 9 once they
        // propagate; the following sweep fixes it.
        let text = "12345678.".to_owned() + &".".repeat(72);

        let tester = TechniqueTester::from_str(&text).apply_until_stuck(&NakedSingle::new());
        tester.assert_placed(Cell::from_row_col(0, 8), Digit::D9);
    }

    #[test]
    fn test_no_change_on_empty_board() {
        let text = ".".repeat(81);
        TechniqueTester::from_str(&text)
            .apply_once_expect_no_progress(&NakedSingle::new())
            .assert_no_change(Cell::from_row_col(4, 4));
    }

    #[test]
    fn test_idempotent_after_propagation() {
        let mut text = vec!['.'; 81];
        text[0] = '3';
        let text: String = text.into_iter().collect();

        TechniqueTester::from_str(&text)
            .apply_once(&NakedSingle::new())
            .apply_once_expect_no_progress(&NakedSingle::new());
    }
}
