//! Canonical digit relabeling.
//!
//! Relabeling digits never changes solution count or difficulty, so two
//! puzzles that differ only by a digit permutation are the same puzzle.
//! [`canonicalize`] picks a fixed representative: digits are renamed in
//! first-seen scan order, so the first distinct clues read 1, 2, 3, ...

use crate::{board::Board, cell::Cell, digit::Digit};

/// Relabels the board's digits into first-seen order.
///
/// Scans cells in row-major order; the first digit encountered becomes 1,
/// the second distinct digit becomes 2, and so on. Digits that never occur
/// keep an arbitrary unused label. Undetermined cells keep the full mask.
///
/// The transformation is pure: it preserves solution count, uniqueness,
/// and the technique set required to solve.
#[must_use]
pub fn canonicalize(board: &Board) -> Board {
    let mut mapping: [Option<Digit>; 9] = [None; 9];
    let mut next = 1u8;
    for cell in Cell::ALL {
        if let Some(digit) = board.digit_at(cell) {
            let slot = &mut mapping[(digit.value() - 1) as usize];
            if slot.is_none() {
                *slot = Some(Digit::from_value(next));
                next += 1;
            }
        }
    }
    // Digits absent from the board fill the remaining labels in order.
    for slot in &mut mapping {
        if slot.is_none() {
            *slot = Some(Digit::from_value(next));
            next += 1;
        }
    }

    let clues = Cell::ALL.into_iter().filter_map(|cell| {
        let digit = board.digit_at(cell)?;
        let relabeled = mapping[(digit.value() - 1) as usize];
        Some((cell, relabeled.unwrap_or(digit)))
    });
    // Relabeling is a bijection, so it cannot introduce duplicates.
    Board::from_clues(clues).unwrap_or_else(|_| board.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut text = vec!['.'; 81];
        text[0] = '7';
        text[1] = '3';
        text[40] = '7';
        let board: Board = text.into_iter().collect::<String>().parse().unwrap();

        let canonical = canonicalize(&board);
        assert_eq!(canonical.digit_at(Cell::new(0)), Some(Digit::D1));
        assert_eq!(canonical.digit_at(Cell::new(1)), Some(Digit::D2));
        // Repeated source digit maps to the same label.
        assert_eq!(canonical.digit_at(Cell::new(40)), Some(Digit::D1));
    }

    #[test]
    fn test_idempotent() {
        let board: Board =
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
                .parse()
                .unwrap();
        let once = canonicalize(&board);
        let twice = canonicalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_preserves_clue_count_and_shape() {
        let board: Board =
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
                .parse()
                .unwrap();
        let canonical = canonicalize(&board);
        assert_eq!(board.determined_count(), canonical.determined_count());
        for cell in Cell::ALL {
            assert_eq!(
                board.is_determined(cell),
                canonical.is_determined(cell),
                "clue shape changed at {cell}"
            );
        }
    }
}
