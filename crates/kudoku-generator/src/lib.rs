//! Puzzle generation for 9x9 Sudoku.
//!
//! Generation is fully reproducible: a [`PuzzleSeed`] keys a deterministic
//! RNG, the backtracking solver scrambles an empty grid into a random
//! solution, and clues are carved away while the configured technique
//! roster can still finish the puzzle. The [`shuffle`] module adds the
//! validity-preserving grid symmetries (relabeling, line and band
//! permutations, transposition).
//!
//! # Examples
//!
//! ```
//! use kudoku_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().generate();
//! assert!(puzzle.solution.is_solved());
//! assert!(!puzzle.problem.is_solved());
//! ```

pub use self::{
    generate::{GeneratedPuzzle, PuzzleGenerator, generate_solution, minimize},
    seed::{ParseSeedError, PuzzleSeed},
};

pub mod generate;
pub mod seed;
pub mod shuffle;
