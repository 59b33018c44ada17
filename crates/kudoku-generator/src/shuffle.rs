//! Symmetry transforms over the Sudoku grid.
//!
//! The validity of a grid is preserved by relabeling digits, permuting rows
//! within a band, permuting whole bands (and the column analogues), and
//! transposing. Composing random choices of these yields grids that are
//! equivalent to the input but look unrelated.
//!
//! Transforms rebuild the board from its determined cells, so candidate
//! eliminations on undetermined cells are not carried over.

use kudoku_core::{Board, Cell, Digit};
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

fn map_board<F>(board: &Board, f: F) -> Board
where
    F: Fn(Cell, Digit) -> (Cell, Digit),
{
    let clues = Cell::ALL
        .into_iter()
        .filter_map(|cell| board.digit_at(cell).map(|digit| f(cell, digit)));
    Board::from_clues(clues).expect("grid symmetries preserve validity")
}

/// Mirrors the grid along its main diagonal.
#[must_use]
pub fn transpose(board: &Board) -> Board {
    map_board(board, |cell, digit| {
        (Cell::from_row_col(cell.col(), cell.row()), digit)
    })
}

/// Renames the digits by a random permutation.
#[must_use]
pub fn relabel<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let mut labels = Digit::ALL;
    labels.shuffle(rng);
    map_board(board, |cell, digit| {
        (cell, labels[digit.value() as usize - 1])
    })
}

/// Draws a random line permutation that respects band boundaries: bands are
/// shuffled, then the three lines within each band.
fn line_permutation<R: Rng>(rng: &mut R) -> [u8; 9] {
    let mut bands: [u8; 3] = [0, 1, 2];
    bands.shuffle(rng);
    let mut out = [0; 9];
    for (i, band) in bands.into_iter().enumerate() {
        let mut lines: [u8; 3] = [0, 1, 2];
        lines.shuffle(rng);
        for (j, line) in lines.into_iter().enumerate() {
            out[i * 3 + j] = band * 3 + line;
        }
    }
    out
}

/// Applies a random composition of every supported symmetry.
#[must_use]
pub fn scramble<R: Rng>(board: &Board, rng: &mut R) -> Board {
    let rows = line_permutation(rng);
    let cols = line_permutation(rng);
    let flip = rng.random_bool(0.5);

    let moved = map_board(board, |cell, digit| {
        let (row, col) = (rows[cell.row() as usize], cols[cell.col() as usize]);
        let cell = if flip {
            Cell::from_row_col(col, row)
        } else {
            Cell::from_row_col(row, col)
        };
        (cell, digit)
    });
    relabel(&moved, rng)
}
