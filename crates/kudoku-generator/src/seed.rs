//! Reproducible seeds for puzzle generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseSeedError {
    /// The text is not 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid character in seed: {ch:?}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
    },
}

/// A 256-bit seed identifying a generated puzzle.
///
/// The same seed always reproduces the same puzzle, so a puzzle can be
/// shared or re-derived by its seed alone. Seeds render as 64 lowercase hex
/// characters and parse back from the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the generation RNG for this seed.
    ///
    /// The seed bytes are hashed before keying the RNG, so structured or
    /// low-entropy seeds still spread over the whole state space.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        let digest = Sha256::digest(self.0);
        Pcg64::from_seed(digest.into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 64 {
            return Err(ParseSeedError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let mut bytes = [0; 32];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_value(chunk[0] as char)?;
            let lo = hex_value(chunk[1] as char)?;
            bytes[i] = hi << 4 | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(ch: char) -> Result<u8, ParseSeedError> {
    #[expect(clippy::cast_possible_truncation)]
    let value = ch.to_digit(16).map(|v| v as u8);
    value.ok_or(ParseSeedError::InvalidCharacter { ch })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 4 })
        );
    }

    #[test]
    fn test_rejects_non_hex() {
        let text = "g".repeat(64);
        assert_eq!(
            text.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidCharacter { ch: 'g' })
        );
    }

    #[test]
    fn test_same_seed_same_rng_stream() {
        let seed = PuzzleSeed::from_bytes([7; 32]);
        let mut a = seed.rng();
        let mut b = seed.rng();
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    proptest! {
        #[test]
        fn test_any_seed_round_trips(bytes: [u8; 32]) {
            let seed = PuzzleSeed::from_bytes(bytes);
            prop_assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
        }
    }
}
