use std::fmt::Write as _;

use rand::{Rng, SeedableRng as _, distr::StandardUniform, prelude::Distribution};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Cell, SeedParseError};

/// Draws piece kinds independently and uniformly from the seven kinds.
///
/// There is deliberately no bag or history: the same kind may come up any
/// number of times in a row.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: Pcg32,
    seed: PieceSeed,
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// 128-bit seed for [`PieceGenerator`].
///
/// Serialized as a 32-character hex string. Equal seeds yield equal piece
/// sequences.
///
/// # Example
///
/// ```
/// use quadris_engine::{PieceGenerator, PieceSeed};
///
/// let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// let mut a = PieceGenerator::with_seed(seed);
/// let mut b = PieceGenerator::with_seed(seed);
/// assert_eq!(a.next_kind(), b.next_kind());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let mut hex = String::with_capacity(2 * self.0.len());
        for byte in self.0 {
            write!(&mut hex, "{byte:02x}").expect("writing to a String never fails");
        }
        hex
    }
}

impl std::str::FromStr for PieceSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(SeedParseError::InvalidLength(s.len()));
        }
        let invalid = || SeedParseError::InvalidDigits(s.to_owned());
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl std::fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

impl PieceGenerator {
    /// Creates a generator seeded from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.seed
    }

    /// Draws the next piece kind. Never returns [`Cell::Empty`].
    pub fn next_kind(&mut self) -> Cell {
        self.rng.random()
    }
}
