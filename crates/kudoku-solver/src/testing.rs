//! Test support for deduction techniques.
//!
//! [`TechniqueTester`] wraps a board, remembers the state a technique was
//! applied to, and offers assertions about what the application changed.
//! Intended for unit tests; panics instead of returning errors.

use kudoku_core::{Board, Cell, Digit, DigitSet};

use crate::technique::Technique;

/// A fluent harness for exercising a single technique against a board.
#[derive(Debug, Clone)]
pub struct TechniqueTester {
    before: Board,
    board: Board,
}

impl TechniqueTester {
    /// Creates a tester from an 81-character board text.
    ///
    /// # Panics
    ///
    /// Panics if the text does not parse.
    #[must_use]
    pub fn from_str(text: &str) -> Self {
        let board: Board = text.parse().expect("board text must parse");
        Self {
            before: board.clone(),
            board,
        }
    }

    /// Removes a candidate to set up the pattern under test.
    ///
    /// Setup eliminations are part of the baseline, so they do not count as
    /// changes for [`assert_no_change`](Self::assert_no_change).
    ///
    /// # Panics
    ///
    /// Panics if the removal empties the cell.
    #[track_caller]
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) {
        self.board
            .eliminate(cell, digit)
            .expect("setup elimination must not empty a cell");
        self.before = self.board.clone();
    }

    /// Applies the technique once and asserts that it made progress.
    ///
    /// # Panics
    ///
    /// Panics if the technique errors or reports no change.
    #[track_caller]
    #[must_use]
    pub fn apply_once(mut self, technique: &dyn Technique) -> Self {
        self.before = self.board.clone();
        let changed = technique
            .apply(&mut self.board)
            .unwrap_or_else(|e| panic!("{} failed: {e}", technique.name()));
        assert!(changed, "{} made no progress", technique.name());
        self
    }

    /// Applies the technique once and asserts that it found nothing.
    ///
    /// # Panics
    ///
    /// Panics if the technique errors or changes the board.
    #[track_caller]
    #[must_use]
    pub fn apply_once_expect_no_progress(mut self, technique: &dyn Technique) -> Self {
        self.before = self.board.clone();
        let changed = technique
            .apply(&mut self.board)
            .unwrap_or_else(|e| panic!("{} failed: {e}", technique.name()));
        assert!(!changed, "{} unexpectedly made progress", technique.name());
        self
    }

    /// Applies the technique repeatedly until it reports no change.
    ///
    /// # Panics
    ///
    /// Panics if the technique errors.
    #[track_caller]
    #[must_use]
    pub fn apply_until_stuck(mut self, technique: &dyn Technique) -> Self {
        self.before = self.board.clone();
        loop {
            let changed = technique
                .apply(&mut self.board)
                .unwrap_or_else(|e| panic!("{} failed: {e}", technique.name()));
            if !changed {
                return self;
            }
        }
    }

    /// Applies the technique once and asserts that it detects an
    /// inconsistent board.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns `Ok`.
    #[track_caller]
    pub fn apply_expect_error(mut self, technique: &dyn Technique) {
        assert!(
            technique.apply(&mut self.board).is_err(),
            "{} did not detect the inconsistency",
            technique.name()
        );
    }

    /// Returns the current candidates of a cell.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.board.candidates(cell)
    }

    /// Asserts that the cell is determined to the given digit.
    #[track_caller]
    pub fn assert_placed(&self, cell: Cell, digit: Digit) -> &Self {
        assert_eq!(
            self.board.digit_at(cell),
            Some(digit),
            "expected {digit} placed at {cell}, candidates are {:?}",
            self.board.candidates(cell)
        );
        self
    }

    /// Asserts that the digits were present before the last application and
    /// are absent now.
    #[track_caller]
    pub fn assert_eliminated<I>(&self, cell: Cell, digits: I) -> &Self
    where
        I: IntoIterator<Item = Digit>,
    {
        for digit in digits {
            assert!(
                self.before.candidates(cell).contains(digit),
                "{digit} was already absent at {cell} before the technique ran"
            );
            assert!(
                !self.board.candidates(cell).contains(digit),
                "{digit} still a candidate at {cell}"
            );
        }
        self
    }

    /// Asserts that the cell holds exactly the given candidates.
    #[track_caller]
    pub fn assert_candidates<I>(&self, cell: Cell, digits: I) -> &Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let expected: DigitSet = digits.into_iter().collect();
        assert_eq!(
            self.board.candidates(cell),
            expected,
            "candidate mismatch at {cell}"
        );
        self
    }

    /// Asserts that the last application left the cell untouched.
    #[track_caller]
    pub fn assert_no_change(&self, cell: Cell) -> &Self {
        assert_eq!(
            self.board.candidates(cell),
            self.before.candidates(cell),
            "candidates at {cell} changed"
        );
        self
    }
}
