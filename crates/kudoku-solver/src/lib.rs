//! Deduction and search for 9x9 Sudoku boards.
//!
//! This crate layers three things on top of [`kudoku_core`]:
//!
//! - [`technique`]: human-style deduction rules, from singles through
//!   fishies and trial-propagation chains
//! - [`DeductionEngine`]: a fixed-point driver that applies a configurable
//!   roster of techniques, cheapest first
//! - [`Solver`]: count-limited backtracking on top of the deductions, for
//!   solving, uniqueness checking, and solution enumeration
//!
//! Puzzles can also be graded with [`rate`], which names the easiest
//! technique roster that cracks them.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::Board;
//! use kudoku_solver::{SolveStatus, Solver};
//!
//! let board: Board =
//!     "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
//!         .parse()?;
//! let report = Solver::new().solve(&board, 2);
//! assert_eq!(report.status(), SolveStatus::Unique);
//! assert!(report.solution().unwrap().is_solved());
//! # Ok::<(), kudoku_core::ParseBoardError>(())
//! ```

pub use self::{
    config::TechniqueSet,
    deduction::{DeductionEngine, DeductionOutcome},
    error::SolveError,
    rating::{Difficulty, Rating, rate},
    search::{SolveReport, SolveStatus, Solver},
};

pub mod config;
pub mod deduction;
mod error;
pub mod rating;
pub mod search;
pub mod technique;
pub mod testing;
