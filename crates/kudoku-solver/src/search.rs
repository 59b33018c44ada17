//! Count-limited backtracking search on top of the deduction engine.

use kudoku_core::{Board, Cell, Digit};
use rand::Rng;
use rand::seq::SliceRandom as _;
use tinyvec::ArrayVec;

use crate::{
    config::TechniqueSet,
    deduction::{DeductionEngine, DeductionOutcome},
};

/// How a solve attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The search exhausted the whole tree and found exactly one solution.
    Unique,
    /// A solution was found, but the budget stopped the search before the
    /// tree was exhausted, so uniqueness is unproven.
    SolutionFound,
    /// At least two distinct solutions were found.
    Multiple,
    /// The search exhausted the whole tree without finding a solution.
    NoSolution,
    /// Deductions stalled and guessing is disabled.
    Stalled,
}

/// Outcome of [`Solver::solve`].
#[derive(Debug, Clone)]
pub struct SolveReport {
    status: SolveStatus,
    solution: Option<Board>,
    solutions_found: usize,
    guesses: u64,
}

impl SolveReport {
    /// Returns how the attempt ended.
    #[must_use]
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Returns the first solution found, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&Board> {
        self.solution.as_ref()
    }

    /// Returns the number of solutions found, bounded by the budget.
    #[must_use]
    pub fn solutions_found(&self) -> usize {
        self.solutions_found
    }

    /// Returns the number of digit trials the search made.
    ///
    /// Zero means pure deduction solved (or refuted) the puzzle.
    #[must_use]
    pub fn guesses(&self) -> u64 {
        self.guesses
    }
}

/// A point where the search committed to a digit and may come back.
#[derive(Debug, Clone)]
struct Decision {
    saved: Board,
    cell: Cell,
    digits: ArrayVec<[u8; 9]>,
    next: usize,
}

/// Restores the most recent revisable decision and tries its next digit.
///
/// Returns `false` when the stack is exhausted.
fn backtrack(board: &mut Board, stack: &mut Vec<Decision>, guesses: &mut u64) -> bool {
    loop {
        let Some(top) = stack.last_mut() else {
            return false;
        };
        if top.next >= top.digits.len() {
            stack.pop();
            continue;
        }
        let digit = Digit::from_value(top.digits[top.next]);
        top.next += 1;
        *guesses += 1;
        *board = top.saved.clone();
        log::trace!("trying {digit} at {}", top.cell);
        if board.place(top.cell, digit).is_ok() {
            return true;
        }
        // The placement itself contradicted; stay at this decision.
    }
}

/// Solves boards by deduction plus optional count-limited backtracking.
///
/// The solver runs the configured techniques to a fixed point, and when they
/// stall, guesses at the undetermined cell with the fewest candidates,
/// backtracking on contradiction. The search stops once it has found the
/// requested number of solutions or exhausted the tree.
#[derive(Debug, Clone)]
pub struct Solver {
    techniques: TechniqueSet,
    guessing: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with all techniques and guessing enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            techniques: TechniqueSet::all(),
            guessing: true,
        }
    }

    /// Replaces the technique selection.
    #[must_use]
    pub const fn with_techniques(mut self, techniques: TechniqueSet) -> Self {
        self.techniques = techniques;
        self
    }

    /// Enables or disables guessing.
    ///
    /// With guessing disabled the solver is a pure deducer and may report
    /// [`SolveStatus::Stalled`].
    #[must_use]
    pub const fn with_guessing(mut self, guessing: bool) -> Self {
        self.guessing = guessing;
        self
    }

    /// Solves `board`, stopping after `limit` solutions.
    ///
    /// Candidate digits are tried in increasing order, at the undetermined
    /// cell with the fewest candidates (ties broken by lowest cell index),
    /// so the result is deterministic.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn solve(&self, board: &Board, limit: usize) -> SolveReport {
        self.run(board, limit, None)
    }

    /// Solves `board` like [`solve`](Self::solve), but tries candidate
    /// digits in an order shuffled by `rng`.
    ///
    /// Running this on an empty board with a budget of 1 yields a uniformly
    /// scrambled complete grid.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn solve_with_rng<R: Rng>(&self, board: &Board, limit: usize, rng: &mut R) -> SolveReport {
        self.run(board, limit, Some(rng))
    }

    fn run(&self, start: &Board, limit: usize, mut rng: Option<&mut dyn Rng>) -> SolveReport {
        assert!(limit > 0, "solution budget must be at least 1");

        let mut engine = DeductionEngine::new(&self.techniques);
        let mut board = start.clone();
        let mut stack: Vec<Decision> = Vec::new();
        let mut guesses = 0;
        let mut solutions_found = 0;
        let mut solution = None;
        let mut exhausted = false;
        let mut stalled = false;

        loop {
            match engine.run(&mut board) {
                Ok(DeductionOutcome::Solved) => {
                    solutions_found += 1;
                    if solution.is_none() {
                        solution = Some(board.clone());
                    }
                    log::debug!("solution {solutions_found} found after {guesses} guesses");
                    if solutions_found >= limit {
                        break;
                    }
                    if !backtrack(&mut board, &mut stack, &mut guesses) {
                        exhausted = true;
                        break;
                    }
                }
                Ok(DeductionOutcome::Stalled) => {
                    if !self.guessing {
                        stalled = true;
                        break;
                    }
                    let Some(decision) = pick_decision(&board, &mut rng) else {
                        // Unreachable on a consistent board, but treat it
                        // as a dead branch rather than panic.
                        if !backtrack(&mut board, &mut stack, &mut guesses) {
                            exhausted = true;
                            break;
                        }
                        continue;
                    };
                    log::debug!(
                        "guessing at {} among {} candidates (depth {})",
                        decision.cell,
                        decision.digits.len(),
                        stack.len() + 1
                    );
                    stack.push(decision);
                    if !backtrack(&mut board, &mut stack, &mut guesses) {
                        exhausted = true;
                        break;
                    }
                }
                Err(_) => {
                    if !backtrack(&mut board, &mut stack, &mut guesses) {
                        exhausted = true;
                        break;
                    }
                }
            }
        }

        let status = match (solutions_found, stalled) {
            (0, true) => SolveStatus::Stalled,
            (0, false) => SolveStatus::NoSolution,
            (1, _) if exhausted => SolveStatus::Unique,
            (1, _) => SolveStatus::SolutionFound,
            _ => SolveStatus::Multiple,
        };
        SolveReport {
            status,
            solution,
            solutions_found,
            guesses,
        }
    }
}

/// Picks the undetermined cell with the fewest candidates and records the
/// digit order to try there.
fn pick_decision(board: &Board, rng: &mut Option<&mut dyn Rng>) -> Option<Decision> {
    let cell = board
        .undetermined_cells()
        .min_by_key(|&cell| (board.candidates(cell).len(), cell.index()))?;
    let mut digits: ArrayVec<[u8; 9]> =
        board.candidates(cell).iter().map(Digit::value).collect();
    if let Some(rng) = rng.as_deref_mut() {
        digits.shuffle(rng);
    }
    Some(Decision {
        saved: board.clone(),
        cell,
        digits,
        next: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 17 clues, known to have exactly one solution.
    const SEVENTEEN: &str = concat!(
        ".......1.",
        "4........",
        ".2.......",
        "....5.4.7",
        "..8...3..",
        "..1.9....",
        "3..4..2..",
        ".5.1.....",
        "...8.6..."
    );

    // The empty corner cell sees 1-8 in its row and 9 in its column.
    const UNSOLVABLE: &str = concat!(
        ".12345678",
        "9........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        "........."
    );

    // The unique solution of the Wikipedia example puzzle.
    const SOLVED: &str = concat!(
        "534678912",
        "672195348",
        "198342567",
        "859761423",
        "426853791",
        "713924856",
        "961537284",
        "287419635",
        "345286179"
    );

    #[test]
    fn test_unique_puzzle_is_proven_unique() {
        let board: Board = SEVENTEEN.parse().unwrap();
        let report = Solver::new().solve(&board, 2);
        assert_eq!(report.status(), SolveStatus::Unique);
        assert_eq!(report.solutions_found(), 1);
        assert!(report.solution().unwrap().is_solved());
    }

    #[test]
    fn test_budget_of_one_does_not_claim_multiple() {
        // A single found solution says nothing about uniqueness either way.
        let board: Board = SEVENTEEN.parse().unwrap();
        let report = Solver::new().solve(&board, 1);
        assert_eq!(report.status(), SolveStatus::SolutionFound);
        assert_eq!(report.solutions_found(), 1);
    }

    #[test]
    fn test_solving_a_solved_board_returns_it_unchanged() {
        let board: Board = SOLVED.parse().unwrap();
        let report = Solver::new().solve(&board, 2);
        assert_eq!(report.status(), SolveStatus::Unique);
        assert_eq!(report.solution(), Some(&board));
    }

    #[test]
    fn test_added_clue_keeps_uniqueness_or_removes_all_solutions() {
        let board: Board = SEVENTEEN.parse().unwrap();
        let solution = Solver::new().solve(&board, 2).solution().unwrap().clone();
        let cell = board.undetermined_cells().next().unwrap();
        let correct = solution.digit_at(cell).unwrap();
        for digit in Digit::ALL {
            let mut extended = board.clone();
            if extended.place(cell, digit).is_err() {
                continue;
            }
            let status = Solver::new().solve(&extended, 2).status();
            if digit == correct {
                assert_eq!(status, SolveStatus::Unique);
            } else {
                assert_eq!(status, SolveStatus::NoSolution);
            }
        }
    }

    #[test]
    fn test_empty_board_has_multiple_solutions() {
        let report = Solver::new().solve(&Board::empty(), 2);
        assert_eq!(report.status(), SolveStatus::Multiple);
        assert_eq!(report.solutions_found(), 2);
    }

    #[test]
    fn test_no_solution_is_detected() {
        let board: Board = UNSOLVABLE.parse().unwrap();
        let report = Solver::new().solve(&board, 1);
        assert_eq!(report.status(), SolveStatus::NoSolution);
        assert!(report.solution().is_none());
    }

    #[test]
    fn test_deduction_only_solver_stalls() {
        let board: Board = SEVENTEEN.parse().unwrap();
        let report = Solver::new()
            .with_techniques(TechniqueSet::singles_only())
            .with_guessing(false)
            .solve(&board, 1);
        assert_eq!(report.status(), SolveStatus::Stalled);
    }

    #[test]
    fn test_solution_extends_the_clues() {
        let board: Board = SEVENTEEN.parse().unwrap();
        let report = Solver::new().solve(&board, 1);
        let solution = report.solution().unwrap();
        for cell in Cell::ALL {
            if let Some(digit) = board.digit_at(cell) {
                assert_eq!(solution.digit_at(cell), Some(digit));
            }
        }
    }

    #[test]
    fn test_randomized_solve_fills_empty_board() {
        let mut rng = rand::rng();
        let report = Solver::new().solve_with_rng(&Board::empty(), 1, &mut rng);
        assert!(report.solution().unwrap().is_solved());
    }
}
