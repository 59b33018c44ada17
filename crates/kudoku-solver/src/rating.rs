//! Difficulty rating by technique ladder.

use derive_more::Display;
use kudoku_core::Board;

use crate::{config::TechniqueSet, search::Solver};

/// The hardest kind of reasoning a puzzle requires.
///
/// Variants are ordered from easiest to hardest, so ratings compare with
/// the usual operators.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Naked and hidden singles suffice.
    #[display("singles")]
    Singles,
    /// Locked candidates are also needed.
    #[display("locked candidates")]
    LockedCandidates,
    /// Naked or hidden subsets are also needed.
    #[display("subsets")]
    Subsets,
    /// Fish patterns are also needed.
    #[display("fishies")]
    Fishies,
    /// Trial propagation chains are also needed.
    #[display("chains")]
    Chains,
    /// No selected technique suffices; the solver had to guess.
    #[display("requires guessing")]
    RequiresGuessing,
}

impl Difficulty {
    fn techniques(self) -> TechniqueSet {
        match self {
            Self::Singles => TechniqueSet::singles_only(),
            Self::LockedCandidates => TechniqueSet::singles_only().with_locked_candidates(true),
            Self::Subsets => TechniqueSet::singles_only()
                .with_locked_candidates(true)
                .with_subsets(true),
            Self::Fishies => TechniqueSet::singles_only()
                .with_locked_candidates(true)
                .with_subsets(true)
                .with_fishies(true),
            Self::Chains | Self::RequiresGuessing => TechniqueSet::all(),
        }
    }
}

/// A puzzle's rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    difficulty: Difficulty,
    guesses: u64,
}

impl Rating {
    /// Returns the hardest kind of reasoning the puzzle requires.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the number of digit trials needed.
    ///
    /// Zero unless the difficulty is
    /// [`RequiresGuessing`](Difficulty::RequiresGuessing); among such
    /// puzzles a higher count means a harder puzzle.
    #[must_use]
    pub fn guesses(&self) -> u64 {
        self.guesses
    }
}

/// Rates a puzzle by retrying it with ever larger technique rosters.
///
/// Each rung of the ladder runs a deduction-only solve; the first rung that
/// completes the grid names the difficulty. A puzzle no rung can finish is
/// rated [`Difficulty::RequiresGuessing`] with the trial count of a full
/// backtracking solve.
///
/// Returns `None` if the puzzle has no solution.
#[must_use]
pub fn rate(board: &Board) -> Option<Rating> {
    const LADDER: [Difficulty; 5] = [
        Difficulty::Singles,
        Difficulty::LockedCandidates,
        Difficulty::Subsets,
        Difficulty::Fishies,
        Difficulty::Chains,
    ];

    for difficulty in LADDER {
        let solver = Solver::new()
            .with_techniques(difficulty.techniques())
            .with_guessing(false);
        let report = solver.solve(board, 1);
        if report.solution().is_some() {
            log::debug!("rated {difficulty}");
            return Some(Rating {
                difficulty,
                guesses: 0,
            });
        }
        if report.status() == crate::search::SolveStatus::NoSolution {
            return None;
        }
    }

    let report = Solver::new().solve(board, 1);
    report.solution()?;
    log::debug!("rated requires guessing after {} trials", report.guesses());
    Some(Rating {
        difficulty: Difficulty::RequiresGuessing,
        guesses: report.guesses(),
    })
}
