//! 9-bit sets for candidate masks and in-group position masks.
//!
//! This module provides [`BitSet9`], a set of up to nine values backed by a
//! `u16`, parameterized by a [`Set9Semantics`] implementation that maps
//! user-facing values to bit indices. Two concrete aliases are exported:
//!
//! - [`DigitSet`] - the candidate digits (1-9) of a single cell
//! - [`SlotSet`] - positions (0-8) within a row, column, or box
//!
//! The per-cell candidate mask is the engine's central data structure: an
//! empty set is a contradiction, a single-element set is a determined cell,
//! and anything else is undetermined. Centralizing the bit operations here
//! keeps those invariants checkable in one place.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! assert_eq!(candidates.as_single(), None);
//! ```

use std::{
    fmt::{self, Debug},
    marker::PhantomData,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::digit::Digit;

/// Maps user-facing values to bit indices 0-8 and back.
pub trait Set9Semantics {
    /// The user-facing value type.
    type Value: Copy;

    /// Converts a value to its bit index (0-8).
    fn to_index(value: Self::Value) -> u8;

    /// Converts a bit index (0-8) back to a value.
    fn from_index(index: u8) -> Self::Value;
}

/// A set of up to nine values, stored in the low nine bits of a `u16`.
pub struct BitSet9<S> {
    bits: u16,
    _semantics: PhantomData<S>,
}

const MASK: u16 = 0x1FF;

impl<S> BitSet9<S> {
    /// The empty set.
    pub const EMPTY: Self = Self::from_bits(0);

    /// The set containing all nine values.
    pub const FULL: Self = Self::from_bits(MASK);

    const fn from_bits(bits: u16) -> Self {
        debug_assert!(bits & !MASK == 0);
        Self {
            bits,
            _semantics: PhantomData,
        }
    }

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the raw 9-bit representation.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Returns the number of values in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Returns the union of the two sets.
    #[must_use]
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Returns `true` if every value of `self` is also in `other`.
    #[must_use]
    #[inline]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }
}

impl<S: Set9Semantics> BitSet9<S> {
    /// Creates a set containing exactly one value.
    #[must_use]
    #[inline]
    pub fn from_elem(value: S::Value) -> Self {
        Self::from_bits(1 << S::to_index(value))
    }

    /// Returns `true` if the set contains the value.
    #[must_use]
    #[inline]
    pub fn contains(self, value: S::Value) -> bool {
        self.bits & (1 << S::to_index(value)) != 0
    }

    /// Inserts a value. Returns `true` if the set changed.
    #[inline]
    pub fn insert(&mut self, value: S::Value) -> bool {
        let bit = 1 << S::to_index(value);
        let changed = self.bits & bit == 0;
        self.bits |= bit;
        changed
    }

    /// Removes a value. Returns `true` if the set changed.
    #[inline]
    pub fn remove(&mut self, value: S::Value) -> bool {
        let bit = 1 << S::to_index(value);
        let changed = self.bits & bit != 0;
        self.bits &= !bit;
        changed
    }

    /// Returns the sole value if exactly one is present, `None` otherwise.
    ///
    /// This is the determined-cell test: a candidate mask with exactly one
    /// bit set holds that digit.
    #[must_use]
    #[inline]
    pub fn as_single(self) -> Option<S::Value> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        Some(S::from_index(index))
    }

    /// Returns an iterator over the values in increasing index order.
    #[inline]
    pub fn iter(self) -> Iter<S> {
        Iter {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S> Clone for BitSet9<S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for BitSet9<S> {}

impl<S> PartialEq for BitSet9<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<S> Eq for BitSet9<S> {}

impl<S> Default for BitSet9<S> {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<S> Debug for BitSet9<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet9({:#011b})", self.bits)
    }
}

impl<S> BitAnd for BitSet9<S> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl<S> BitAndAssign for BitSet9<S> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl<S> BitOr for BitSet9<S> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl<S> BitOrAssign for BitSet9<S> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl<S> Not for BitSet9<S> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_bits(!self.bits & MASK)
    }
}

impl<S: Set9Semantics> FromIterator<S::Value> for BitSet9<S> {
    fn from_iter<I: IntoIterator<Item = S::Value>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<S: Set9Semantics> IntoIterator for BitSet9<S> {
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`BitSet9`], in increasing index order.
pub struct Iter<S> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S: Set9Semantics> Iterator for Iter<S> {
    type Item = S::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(S::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<S: Set9Semantics> ExactSizeIterator for Iter<S> {}

/// Semantics for sudoku digits 1-9.
#[derive(Debug)]
pub struct DigitSemantics;

impl Set9Semantics for DigitSemantics {
    type Value = Digit;

    #[inline]
    fn to_index(value: Digit) -> u8 {
        value.value() - 1
    }

    #[inline]
    fn from_index(index: u8) -> Digit {
        Digit::from_value(index + 1)
    }
}

/// Semantics for positions 0-8 within a single group.
///
/// # Panics
///
/// `to_index` panics if the slot is not in the range 0-8.
#[derive(Debug)]
pub struct SlotSemantics;

impl Set9Semantics for SlotSemantics {
    type Value = u8;

    #[inline]
    fn to_index(value: u8) -> u8 {
        assert!(value < 9, "Slot must be between 0 and 8, got {value}");
        value
    }

    #[inline]
    fn from_index(index: u8) -> u8 {
        index
    }
}

/// The candidate digits (1-9) of a single cell.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a.union(b).len(), 4);
/// assert_eq!(a.intersection(b).len(), 2);
/// assert_eq!(a.difference(b).as_single(), Some(Digit::D1));
/// ```
pub type DigitSet = BitSet9<DigitSemantics>;

/// A set of positions (0-8) within a row, column, or box.
pub type SlotSet = BitSet9<SlotSemantics>;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.insert(Digit::D3));
        assert!(!set.insert(Digit::D3));
        assert!(set.contains(Digit::D3));
        assert!(set.remove(Digit::D3));
        assert!(!set.remove(Digit::D3));
        assert!(set.is_empty());
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(DigitSet::from_elem(Digit::D8).as_single(), Some(Digit::D8));
        let pair = DigitSet::from_iter([Digit::D1, Digit::D9]);
        assert_eq!(pair.as_single(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5, Digit::D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
    }

    #[test]
    fn test_not_masks_to_nine_bits() {
        let set = !DigitSet::EMPTY;
        assert_eq!(set, DigitSet::FULL);
        assert_eq!(set.bits(), 0x1FF);
    }

    #[test]
    fn test_slot_set() {
        let mut slots = SlotSet::new();
        slots.insert(0);
        slots.insert(8);
        assert_eq!(slots.len(), 2);
        assert!(slots.contains(0));
        assert!(!slots.contains(4));
    }

    #[test]
    #[should_panic(expected = "Slot must be between 0 and 8")]
    fn test_slot_set_rejects_nine() {
        let mut slots = SlotSet::new();
        slots.insert(9);
    }

    #[test]
    fn test_is_subset() {
        let small = DigitSet::from_iter([Digit::D2, Digit::D4]);
        let large = DigitSet::from_iter([Digit::D2, Digit::D4, Digit::D6]);
        assert!(small.is_subset(large));
        assert!(!large.is_subset(small));
        assert!(DigitSet::EMPTY.is_subset(small));
    }

    proptest! {
        #[test]
        fn prop_len_matches_iter_count(bits in 0u16..=0x1FF) {
            let set = DigitSet::from_bits(bits);
            prop_assert_eq!(set.len(), set.iter().count());
        }

        #[test]
        fn prop_union_contains_both(a in 0u16..=0x1FF, b in 0u16..=0x1FF) {
            let a = DigitSet::from_bits(a);
            let b = DigitSet::from_bits(b);
            let union = a | b;
            for digit in Digit::ALL {
                prop_assert_eq!(
                    union.contains(digit),
                    a.contains(digit) || b.contains(digit)
                );
            }
        }

        #[test]
        fn prop_single_iff_len_one(bits in 0u16..=0x1FF) {
            let set = DigitSet::from_bits(bits);
            prop_assert_eq!(set.as_single().is_some(), set.len() == 1);
        }
    }
}
