//! Puzzle generation: random solutions, clue carving, minimization.

use kudoku_core::{Board, Cell, Digit};
use kudoku_solver::{SolveStatus, Solver, TechniqueSet};
use rand::{Rng, seq::SliceRandom as _};

use crate::seed::PuzzleSeed;

/// Produces a uniformly scrambled complete grid.
///
/// Runs the backtracking solver on an empty board with candidate digits
/// tried in an order drawn from `rng`.
#[must_use]
pub fn generate_solution<R: Rng>(rng: &mut R) -> Board {
    let report = Solver::new().solve_with_rng(&Board::empty(), 1, rng);
    report
        .solution()
        .expect("an empty board always has a solution")
        .clone()
}

/// Removes redundant clues from a puzzle in one randomized pass.
///
/// Each clue is dropped in turn (in an order drawn from `rng`) and kept out
/// if the puzzle still has a unique solution. The result is minimal with
/// respect to this pass: every remaining clue is load-bearing.
#[must_use]
pub fn minimize<R: Rng>(board: &Board, rng: &mut R) -> Board {
    reduce(board, rng, |candidate| {
        Solver::new().solve(candidate, 2).status() == SolveStatus::Unique
    })
}

/// Drops clues one at a time, keeping a removal whenever `acceptable` holds
/// for the reduced board.
fn reduce<R, F>(board: &Board, rng: &mut R, acceptable: F) -> Board
where
    R: Rng,
    F: Fn(&Board) -> bool,
{
    let mut order: Vec<(Cell, Digit)> = Cell::ALL
        .into_iter()
        .filter_map(|cell| board.digit_at(cell).map(|digit| (cell, digit)))
        .collect();
    order.shuffle(rng);

    let mut kept = order.clone();
    for clue in order {
        let trial: Vec<_> = kept.iter().copied().filter(|&c| c != clue).collect();
        if acceptable(&from_clues(&trial)) {
            kept = trial;
        }
    }
    log::debug!("{} clues remain after reduction", kept.len());
    from_clues(&kept)
}

fn from_clues(clues: &[(Cell, Digit)]) -> Board {
    Board::from_clues(clues.iter().copied())
        .expect("clues taken from a valid board stay valid")
}

/// A puzzle together with its solution and the seed that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// Seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
    /// The puzzle, minimized to its remaining clues.
    pub problem: Board,
    /// The unique solution of `problem`.
    pub solution: Board,
}

/// Generates puzzles solvable by a chosen technique roster.
///
/// Generation scrambles a complete grid and then carves clues away while a
/// deduction-only solver with the configured techniques can still finish
/// the puzzle. A grid completed by pure deduction is forced at every step,
/// so the carved puzzle is also guaranteed to be unique.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    techniques: TechniqueSet,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator using the full technique roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            techniques: TechniqueSet::all(),
        }
    }

    /// Replaces the technique roster the generated puzzles must yield to.
    ///
    /// Smaller rosters produce easier puzzles with more clues.
    #[must_use]
    pub const fn with_techniques(mut self, techniques: TechniqueSet) -> Self {
        self.techniques = techniques;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = generate_solution(&mut rng);
        let deducer = Solver::new()
            .with_techniques(self.techniques)
            .with_guessing(false);
        let problem = reduce(&solution, &mut rng, |candidate| {
            deducer.solve(candidate, 1).solution().is_some()
        });
        GeneratedPuzzle {
            seed,
            problem,
            solution,
        }
    }
}
