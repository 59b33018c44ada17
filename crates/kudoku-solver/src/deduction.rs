//! Fixed-point driver for the deduction techniques.

use kudoku_core::Board;

use crate::{
    SolveError,
    config::TechniqueSet,
    technique::{BoxedTechnique, techniques_for},
};

/// Result of running the deduction engine to a fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionOutcome {
    /// Every cell is determined and the grid is consistent.
    Solved,
    /// No selected technique can make further progress.
    Stalled,
}

/// Applies a fixed roster of techniques until none makes progress.
///
/// Techniques are ordered from cheapest to most expensive, and the engine
/// restarts from the front after every successful application. An expensive
/// technique therefore only runs on boards the cheaper ones have already
/// exhausted.
#[derive(Debug, Clone)]
pub struct DeductionEngine {
    techniques: Vec<BoxedTechnique>,
    counts: Vec<u64>,
}

impl DeductionEngine {
    /// Creates an engine running the techniques selected by `set`.
    #[must_use]
    pub fn new(set: &TechniqueSet) -> Self {
        let techniques = techniques_for(set);
        let counts = vec![0; techniques.len()];
        Self { techniques, counts }
    }

    /// Applies the first technique that makes progress.
    ///
    /// Returns the name of the technique that progressed, or `None` when
    /// the board is at a fixed point.
    ///
    /// # Errors
    ///
    /// Returns an error if a technique detects an inconsistent state.
    pub fn step(&mut self, board: &mut Board) -> Result<Option<&'static str>, SolveError> {
        for (i, technique) in self.techniques.iter().enumerate() {
            if technique.apply(board)? {
                self.counts[i] += 1;
                log::trace!("applied {}", technique.name());
                return Ok(Some(technique.name()));
            }
        }
        Ok(None)
    }

    /// Runs [`step`](Self::step) until the board is at a fixed point.
    ///
    /// # Errors
    ///
    /// Returns an error if a technique detects an inconsistent state.
    pub fn run(&mut self, board: &mut Board) -> Result<DeductionOutcome, SolveError> {
        while self.step(board)?.is_some() {}
        if board.is_solved() {
            Ok(DeductionOutcome::Solved)
        } else {
            Ok(DeductionOutcome::Stalled)
        }
    }

    /// Returns how often each technique has made progress, in pass order.
    pub fn applications(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.techniques
            .iter()
            .map(|t| t.name())
            .zip(self.counts.iter().copied())
    }
}
