//! Example demonstrating basic Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a chosen technique roster
//! - Generate a random puzzle, or reproduce one from a seed
//! - Display the puzzle, solution, seed, and rating
//! - Sample in parallel for a puzzle of a requested difficulty
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Sample for a puzzle of a given difficulty within the sampling budget
//! (default: 1000):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty subsets --max-tries 5000
//! ```
//!
//! Select the technique roster used while carving (singles or all):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --roster singles
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use kudoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use kudoku_solver::{Difficulty, TechniqueSet, rate};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RosterKind {
    All,
    Singles,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Singles,
    LockedCandidates,
    Subsets,
    Fishies,
    Chains,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Singles => Difficulty::Singles,
            DifficultyArg::LockedCandidates => Difficulty::LockedCandidates,
            DifficultyArg::Subsets => Difficulty::Subsets,
            DifficultyArg::Fishies => Difficulty::Fishies,
            DifficultyArg::Chains => Difficulty::Chains,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Technique roster the carved puzzle must yield to.
    #[arg(long, value_name = "KIND", default_value = "all")]
    roster: RosterKind,

    /// Reproduce the puzzle for this seed instead of a random one.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Sample until a puzzle of exactly this difficulty turns up.
    #[arg(long, value_name = "DIFFICULTY")]
    difficulty: Option<DifficultyArg>,

    /// Maximum puzzles to sample when filtering by difficulty.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    max_tries: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let roster = match args.roster {
        RosterKind::All => TechniqueSet::all(),
        RosterKind::Singles => TechniqueSet::singles_only(),
    };
    let generator = PuzzleGenerator::new().with_techniques(roster);

    if let Some(seed) = args.seed {
        print_puzzle(&generator.generate_with_seed(seed));
        return;
    }

    let Some(wanted) = args.difficulty else {
        print_puzzle(&generator.generate());
        return;
    };
    let wanted = Difficulty::from(wanted);

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let found = (0..args.max_tries).into_par_iter().find_map_any(|_| {
        let puzzle = generator.generate();
        let rating = rate(&puzzle.problem)?;
        (rating.difficulty() == wanted).then_some(puzzle)
    });

    match found {
        Some(puzzle) => print_puzzle(&puzzle),
        None => {
            eprintln!("No {wanted} puzzle found within {} tries.", args.max_tries);
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    match rate(&puzzle.problem) {
        Some(rating) => {
            println!("Rating:");
            println!("  {}", rating.difficulty());
            if rating.guesses() > 0 {
                println!("  trials: {}", rating.guesses());
            }
        }
        None => println!("Rating: unsolvable"),
    }
}
