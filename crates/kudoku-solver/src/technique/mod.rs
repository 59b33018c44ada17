//! Deduction techniques.
//!
//! Each technique examines a [`Board`] and either fixes cells, eliminates
//! candidates, or does nothing. Techniques never guess; guided guessing
//! lives in the search controller.

use std::fmt::Debug;

use kudoku_core::Board;

pub use self::{
    chains::{OneStepChain, TwoStepChain},
    fish::Fish,
    hidden_single::HiddenSingle,
    locked_candidates::LockedCandidates,
    naked_single::NakedSingle,
    subsets::{HiddenSubset, NakedSubset},
};
use crate::{SolveError, config::TechniqueSet};

mod chains;
mod fish;
mod hidden_single;
mod locked_candidates;
mod naked_single;
mod subsets;

/// A deduction technique.
///
/// Applying a technique sweeps the whole board once and reports whether
/// anything changed. A technique may detect an inconsistent state and
/// return an error; the search controller treats that as a contradiction.
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Applies the technique to a board.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the board was updated
    /// * `Ok(false)` - no applicable pattern was found
    ///
    /// # Errors
    ///
    /// Returns an error if the technique empties a cell's mask or detects
    /// an otherwise inconsistent state.
    fn apply(&self, board: &mut Board) -> Result<bool, SolveError>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns the techniques selected by `set`, in the fixed pass order:
/// singles, locked candidates, subsets, fishies, one-step chains, two-step
/// chains.
///
/// The deduction engine restarts from the front of this list after every
/// successful application, so any fix immediately re-triggers the singles.
#[must_use]
pub fn techniques_for(set: &TechniqueSet) -> Vec<BoxedTechnique> {
    let mut techniques: Vec<BoxedTechnique> =
        vec![Box::new(NakedSingle::new()), Box::new(HiddenSingle::new())];
    if set.locked_candidates {
        techniques.push(Box::new(LockedCandidates::new()));
    }
    if set.subsets {
        for size in 2..=4 {
            techniques.push(Box::new(NakedSubset::new(size)));
            techniques.push(Box::new(HiddenSubset::new(size)));
        }
    }
    if set.fishies {
        for size in 2..=4 {
            techniques.push(Box::new(Fish::new(size)));
        }
    }
    if set.one_step_chains {
        techniques.push(Box::new(OneStepChain::new()));
    }
    if set.two_step_chains {
        techniques.push(Box::new(TwoStepChain::new()));
    }
    techniques
}

/// Advances `idx` to the next `k`-combination of `0..n` in lexicographic
/// order. Returns `false` when the combinations are exhausted.
///
/// `idx[..k]` must hold a valid combination; seed it with `0, 1, .., k-1`.
pub(crate) fn next_combination(idx: &mut [usize], n: usize) -> bool {
    let k = idx.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if idx[i] < n - k + i {
            idx[i] += 1;
            for j in i + 1..k {
                idx[j] = idx[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
