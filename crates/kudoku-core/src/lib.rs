//! Core data structures for the kudoku engine.
//!
//! This crate holds everything the solving and generation crates share:
//!
//! 1. **Value types** - [`Digit`] (type-safe digits 1-9) and [`Cell`]
//!    (flat row-major indices 0-80).
//! 2. **Candidate masks** - [`DigitSet`] and [`SlotSet`], 9-bit sets built
//!    on [`sets::BitSet9`]. The per-cell candidate mask is the engine's
//!    central representation: empty means contradiction, a single bit
//!    means a determined cell.
//! 3. **Topology** - [`topology`]: the 27 groups, per-cell peer sets, and
//!    line/box intersections, all const-built from the fixed geometry and
//!    shared read-only across concurrent solves.
//! 4. **Grid state** - [`Board`], the mutable 81-mask solving state with
//!    placement, propagation-to-peers, and the 81-character text codec.
//! 5. **Canonicalization** - [`canonical::canonicalize`], digit relabeling
//!    into a fixed representative.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Board, Cell, Digit};
//!
//! let board: Board =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()?;
//! assert_eq!(board.digit_at(Cell::from_row_col(0, 0)), Some(Digit::D5));
//! # Ok::<(), kudoku_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod canonical;
pub mod cell;
pub mod digit;
pub mod sets;
pub mod topology;

pub use self::{
    board::{Board, Contradiction, InvalidInput, ParseBoardError},
    cell::Cell,
    digit::Digit,
    sets::{DigitSet, SlotSet},
};
