use kudoku_core::{Board, Cell, DigitSet};

use crate::{
    SolveError,
    config::TechniqueSet,
    technique::{BoxedTechnique, Technique, techniques_for},
};

/// Applies `techniques` to `board` until none of them makes progress.
///
/// Any progress restarts from the front of the roster, so a cell fixed by a
/// later technique is propagated by the singles before anything else runs.
///
/// Returns `Err` if the board turns out to be inconsistent.
fn settle(board: &mut Board, techniques: &[BoxedTechnique]) -> Result<(), SolveError> {
    'restart: loop {
        for technique in techniques {
            if technique.apply(board)? {
                continue 'restart;
            }
        }
        return Ok(());
    }
}

/// Tries every candidate of every undetermined cell on a scratch copy of the
/// board, settles each copy with `techniques`, and keeps what all branches
/// agree on.
///
/// Two deductions fall out of the trials for a cell:
///
/// - a candidate whose branch reaches a contradiction is eliminated;
/// - a digit eliminated somewhere in *every* surviving branch is eliminated
///   unconditionally, since one of the branches must hold.
fn common_eliminations(
    board: &mut Board,
    techniques: &[BoxedTechnique],
) -> Result<bool, SolveError> {
    let mut changed = false;
    let cells: Vec<_> = board.undetermined_cells().collect();
    for cell in cells {
        // Candidate masks surviving in each non-contradicted branch,
        // unioned per cell.
        let mut survivors = [DigitSet::EMPTY; 81];
        let mut any_branch = false;
        let mut contradicted = DigitSet::EMPTY;

        for digit in board.candidates(cell) {
            let mut trial = board.clone();
            if trial.place(cell, digit).is_err() || settle(&mut trial, techniques).is_err() {
                contradicted.insert(digit);
                continue;
            }
            any_branch = true;
            for other in Cell::ALL {
                survivors[other.index()] |= trial.candidates(other);
            }
        }

        for digit in contradicted {
            changed |= board.eliminate(cell, digit)?;
        }
        if !any_branch {
            continue;
        }
        for other in Cell::ALL {
            if board.is_determined(other) {
                continue;
            }
            for digit in board.candidates(other).difference(survivors[other.index()]) {
                changed |= board.eliminate(other, digit)?;
            }
        }
        if changed {
            // Restart from cheaper techniques before trying more cells.
            return Ok(true);
        }
    }
    Ok(false)
}

/// Eliminates candidates by one-step trial propagation.
///
/// Each candidate of each undetermined cell is placed on a copy of the
/// board and followed up with singles only. Contradicted candidates and
/// eliminations common to all surviving trials are applied to the real
/// board.
#[derive(Debug, Clone)]
pub struct OneStepChain {
    techniques: Vec<BoxedTechnique>,
}

impl Default for OneStepChain {
    fn default() -> Self {
        Self::new()
    }
}

impl OneStepChain {
    /// Creates a new `OneStepChain` technique.
    #[must_use]
    pub fn new() -> Self {
        Self {
            techniques: techniques_for(&TechniqueSet::singles_only()),
        }
    }
}

impl Technique for OneStepChain {
    fn name(&self) -> &'static str {
        "One-Step Commonality"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(self.clone())
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolveError> {
        common_eliminations(board, &self.techniques)
    }
}

/// Eliminates candidates by two-step trial propagation.
///
/// Like [`OneStepChain`], but each trial is settled with locked candidates
/// and subsets in addition to the singles, so deeper consequences of a
/// placement are seen.
#[derive(Debug, Clone)]
pub struct TwoStepChain {
    techniques: Vec<BoxedTechnique>,
}

impl Default for TwoStepChain {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoStepChain {
    /// Creates a new `TwoStepChain` technique.
    #[must_use]
    pub fn new() -> Self {
        let set = TechniqueSet::singles_only()
            .with_locked_candidates(true)
            .with_subsets(true);
        Self {
            techniques: techniques_for(&set),
        }
    }
}

impl Technique for TwoStepChain {
    fn name(&self) -> &'static str {
        "Two-Step Commonality"
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(self.clone())
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolveError> {
        common_eliminations(board, &self.techniques)
    }
}
