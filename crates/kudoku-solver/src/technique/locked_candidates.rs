use kudoku_core::{Board, Cell, Digit, topology::INTERSECTIONS};

use crate::{
    SolveError,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "Locked Candidates";

/// Removes candidates using locked candidates (pointing and claiming).
///
/// For each of the 54 line/box intersections and each digit:
///
/// - **Pointing**: the digit's candidates within the box all lie in the
///   shared cells, so it is removed from the rest of the line.
/// - **Claiming**: the digit's candidates within the line all lie in the
///   shared cells, so it is removed from the rest of the box.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates;

impl LockedCandidates {
    /// Creates a new `LockedCandidates` technique.
    #[must_use]
    pub const fn new() -> Self {
        LockedCandidates
    }
}

fn any_open_candidate(board: &Board, cells: &[Cell], digit: Digit) -> bool {
    cells
        .iter()
        .any(|&cell| !board.is_determined(cell) && board.candidates(cell).contains(digit))
}

fn eliminate_from(board: &mut Board, cells: &[Cell], digit: Digit) -> Result<bool, SolveError> {
    let mut changed = false;
    for &cell in cells {
        changed |= board.eliminate(cell, digit)?;
    }
    Ok(changed)
}

impl Technique for LockedCandidates {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolveError> {
        let mut changed = false;
        for inter in &INTERSECTIONS {
            for digit in Digit::ALL {
                if !any_open_candidate(board, &inter.shared, digit) {
                    continue;
                }
                if !any_open_candidate(board, &inter.rest_of_box, digit) {
                    // Pointing: confined to the shared cells within the box.
                    changed |= eliminate_from(board, &inter.rest_of_line, digit)?;
                } else if !any_open_candidate(board, &inter.rest_of_line, digit) {
                    // Claiming: confined to the shared cells within the line.
                    changed |= eliminate_from(board, &inter.rest_of_box, digit)?;
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    #[test]
    fn test_pointing_eliminates_from_row() {
        let mut tester = TechniqueTester::from_str(&".".repeat(81));
        // Confine 5's candidates in box 0 to row 0.
        for row in 1..3 {
            for col in 0..3 {
                tester.eliminate(Cell::from_row_col(row, col), Digit::D5);
            }
        }

        tester
            .apply_once(&LockedCandidates::new())
            // 5 removed from the rest of row 0 outside the box.
            .assert_eliminated(Cell::from_row_col(0, 3), [Digit::D5])
            .assert_eliminated(Cell::from_row_col(0, 8), [Digit::D5])
            // Shared cells keep the candidate.
            .assert_no_change(Cell::from_row_col(0, 0));
    }

    #[test]
    fn test_claiming_eliminates_from_box() {
        let mut tester = TechniqueTester::from_str(&".".repeat(81));
        // Confine 7's candidates in row 0 to box 0.
        for col in 3..9 {
            tester.eliminate(Cell::from_row_col(0, col), Digit::D7);
        }

        tester
            .apply_once(&LockedCandidates::new())
            // 7 removed from the rest of box 0 outside row 0.
            .assert_eliminated(Cell::from_row_col(1, 0), [Digit::D7])
            .assert_eliminated(Cell::from_row_col(2, 2), [Digit::D7]);
    }

    #[test]
    fn test_pointing_eliminates_from_column() {
        let mut tester = TechniqueTester::from_str(&".".repeat(81));
        // Confine 3's candidates in box 4 to column 4.
        for row in 3..6 {
            for col in [3, 5] {
                tester.eliminate(Cell::from_row_col(row, col), Digit::D3);
            }
        }

        tester
            .apply_once(&LockedCandidates::new())
            .assert_eliminated(Cell::from_row_col(0, 4), [Digit::D3])
            .assert_eliminated(Cell::from_row_col(8, 4), [Digit::D3]);
    }

    #[test]
    fn test_no_change_on_empty_board() {
        TechniqueTester::from_str(&".".repeat(81))
            .apply_once_expect_no_progress(&LockedCandidates::new());
    }
}
