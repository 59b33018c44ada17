use kudoku_core::{Board, Contradiction, Digit, DigitSet, SlotSet, topology::GROUPS};
use tinyvec::ArrayVec;

use crate::{
    SolveError,
    technique::{BoxedTechnique, Technique, next_combination},
};

fn subset_name(naked: bool, size: usize) -> &'static str {
    match (naked, size) {
        (true, 2) => "Naked Pair",
        (true, 3) => "Naked Triple",
        (true, 4) => "Naked Quad",
        (false, 2) => "Hidden Pair",
        (false, 3) => "Hidden Triple",
        (false, 4) => "Hidden Quad",
        _ => unreachable!("subset size out of range"),
    }
}

/// Removes candidates using naked subsets (pair, triple, quad).
///
/// When `size` cells of a group collectively hold exactly `size` distinct
/// candidates, those digits can be removed from every other cell of the
/// group.
#[derive(Debug, Clone, Copy)]
pub struct NakedSubset {
    size: usize,
}

impl NakedSubset {
    /// Creates a naked subset search of the given size (2-4).
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range 2-4.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!((2..=4).contains(&size), "subset size out of range");
        Self { size }
    }
}

impl Technique for NakedSubset {
    fn name(&self) -> &'static str {
        subset_name(true, self.size)
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolveError> {
        let mut changed = false;
        for group in &GROUPS {
            // In-group positions of undetermined cells small enough to
            // participate in a subset of this size.
            let mut eligible: ArrayVec<[u8; 9]> = ArrayVec::new();
            for slot in board.undetermined_slots(group) {
                let len = board.candidates(group.cells()[slot as usize]).len();
                if len <= self.size {
                    eligible.push(slot);
                }
            }
            if eligible.len() < self.size {
                continue;
            }

            let mut idx: Vec<usize> = (0..self.size).collect();
            loop {
                let mut union = DigitSet::EMPTY;
                let mut members = SlotSet::EMPTY;
                for &i in &idx {
                    let slot = eligible[i];
                    members.insert(slot);
                    union |= board.candidates(group.cells()[slot as usize]);
                }
                if union.len() < self.size {
                    // More cells than digits: the state is inconsistent.
                    let cell = group.cells()[eligible[idx[0]] as usize];
                    return Err(Contradiction { cell }.into());
                }
                if union.len() == self.size {
                    for slot in board.undetermined_slots(group).difference(members) {
                        let cell = group.cells()[slot as usize];
                        for digit in union {
                            changed |= board.eliminate(cell, digit)?;
                        }
                    }
                }
                if !next_combination(&mut idx, eligible.len()) {
                    break;
                }
            }
        }
        Ok(changed)
    }
}

/// Removes candidates using hidden subsets (pair, triple, quad).
///
/// The dual of [`NakedSubset`]: when `size` digits of a group are jointly
/// confined to `size` cells, every other candidate can be removed from
/// those cells.
#[derive(Debug, Clone, Copy)]
pub struct HiddenSubset {
    size: usize,
}

impl HiddenSubset {
    /// Creates a hidden subset search of the given size (2-4).
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range 2-4.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!((2..=4).contains(&size), "subset size out of range");
        Self { size }
    }
}

impl Technique for HiddenSubset {
    fn name(&self) -> &'static str {
        subset_name(false, self.size)
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolveError> {
        let mut changed = false;
        for group in &GROUPS {
            let open = board.undetermined_slots(group);
            // Digits still unplaced in the group, small enough to
            // participate: position count in 2..=size.
            let mut eligible: ArrayVec<[(u8, SlotSet); 9]> = ArrayVec::new();
            for digit in Digit::ALL {
                let slots = board.digit_slots(group, digit) & open;
                if !slots.is_empty() && slots.len() <= self.size {
                    eligible.push((digit.value(), slots));
                }
            }
            if eligible.len() < self.size {
                continue;
            }

            let mut idx: Vec<usize> = (0..self.size).collect();
            loop {
                let mut union = SlotSet::EMPTY;
                let mut digits = DigitSet::EMPTY;
                for &i in &idx {
                    let (value, slots) = eligible[i];
                    digits.insert(Digit::from_value(value));
                    union |= slots;
                }
                if union.len() < self.size {
                    let slot = eligible[idx[0]].1.iter().next();
                    let cell = group.cells()[slot.unwrap_or(0) as usize];
                    return Err(Contradiction { cell }.into());
                }
                if union.len() == self.size {
                    for slot in union {
                        let cell = group.cells()[slot as usize];
                        for digit in board.candidates(cell).difference(digits) {
                            changed |= board.eliminate(cell, digit)?;
                        }
                    }
                }
                if !next_combination(&mut idx, eligible.len()) {
                    break;
                }
            }
        }
        Ok(changed)
    }
}
