//! Solver error types.

use derive_more::{Display, Error, From};
use kudoku_core::{Contradiction, InvalidInput};

/// An error raised while applying techniques to a board.
///
/// A [`Contradiction`] is a normal event inside a search: the controller
/// consumes it by backtracking. It only reaches callers through APIs that
/// run techniques outside a search (for example the deduction engine used
/// directly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolveError {
    /// A cell was left with no candidates.
    Contradiction(Contradiction),
    /// The input clues violate the one-digit-per-group invariant.
    Invalid(InvalidInput),
}
