//! String hash functions shared by every table
//!
//! Tables never reach for a global hash function. Each table owns a
//! [`StringHasher`] chosen at construction, defaulting to [`PositionalHasher`].
//!
//! # Usage
//!
//! ```rust
//! use hashprobe::hash_map::{NaiveHasher, PositionalHasher, StringHasher};
//!
//! // Anagrams collide under the naive hasher
//! assert_eq!(NaiveHasher.digest("abc"), NaiveHasher.digest("cba"));
//!
//! // but not under the position-weighted one
//! let positional = PositionalHasher::default();
//! assert_ne!(positional.digest("abc"), positional.digest("cba"));
//! ```

use crate::error::{HashProbeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::num::NonZeroU64;

/// Modulus used by the default [`PositionalHasher`]
pub const POSITIONAL_MODULUS: u64 = 2069;

const DEFAULT_MODULUS: NonZeroU64 = match NonZeroU64::new(POSITIONAL_MODULUS) {
    Some(modulus) => modulus,
    None => panic!("positional modulus must be non-zero"),
};

/// Fixed seeds for [`SeededHasher::default`]
const DEFAULT_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Maps a string to a digest.
///
/// Implementations must be pure: the same input yields the same digest for the
/// lifetime of the process.
pub trait StringHasher {
    /// Compute the digest of `value`
    fn digest(&self, value: &str) -> u64;
}

impl<F> StringHasher for F
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn digest(&self, value: &str) -> u64 {
        self(value)
    }
}

/// Sum of character code points.
///
/// Deliberately collision prone: every permutation of the same characters
/// yields the same digest, which makes it useful for exercising collision
/// handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveHasher;

impl StringHasher for NaiveHasher {
    #[inline]
    fn digest(&self, value: &str) -> u64 {
        value
            .chars()
            .fold(0u64, |sum, ch| sum.wrapping_add(u64::from(ch)))
    }
}

/// Position-weighted sum of code points reduced by a modulus.
///
/// `digest = Σ code_point(cᵢ) · i  (mod modulus)` with 1-based character
/// positions. Digests are always `< modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalHasher {
    modulus: NonZeroU64,
}

impl PositionalHasher {
    /// Create a positional hasher with a custom modulus
    pub fn with_modulus(modulus: u64) -> Result<Self> {
        NonZeroU64::new(modulus)
            .map(|modulus| Self { modulus })
            .ok_or_else(|| HashProbeError::configuration("positional modulus must be non-zero"))
    }

    /// The modulus digests are reduced by
    pub fn modulus(&self) -> u64 {
        self.modulus.get()
    }
}

impl Default for PositionalHasher {
    fn default() -> Self {
        Self { modulus: DEFAULT_MODULUS }
    }
}

impl StringHasher for PositionalHasher {
    fn digest(&self, value: &str) -> u64 {
        let modulus = u128::from(self.modulus.get());
        let sum = value
            .chars()
            .enumerate()
            .fold(0u128, |sum, (i, ch)| {
                (sum + u128::from(u32::from(ch)) * (i as u128 + 1)) % modulus
            });
        sum as u64
    }
}

/// Keyed `ahash` digest with fixed seeds.
///
/// Independent of the character-sum hashers, which makes it the default second
/// hash for double hashing.
#[derive(Clone)]
pub struct SeededHasher {
    seeds: [u64; 4],
    state: ahash::RandomState,
}

impl SeededHasher {
    /// Create a hasher keyed with the given seeds
    pub fn with_seeds(seeds: [u64; 4]) -> Self {
        Self {
            seeds,
            state: ahash::RandomState::with_seeds(seeds[0], seeds[1], seeds[2], seeds[3]),
        }
    }

    /// Seeds this hasher was keyed with
    pub fn seeds(&self) -> [u64; 4] {
        self.seeds
    }
}

impl Default for SeededHasher {
    fn default() -> Self {
        Self::with_seeds(DEFAULT_SEEDS)
    }
}

impl fmt::Debug for SeededHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededHasher")
            .field("seeds", &self.seeds)
            .finish()
    }
}

impl StringHasher for SeededHasher {
    #[inline]
    fn digest(&self, value: &str) -> u64 {
        let mut hasher = self.state.build_hasher();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

/// Serialisable choice between the built-in character-sum hashers.
///
/// Used by [`TableConfig`](crate::config::TableConfig) so that a hasher can be
/// named in a JSON file or an environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuiltinHasher {
    /// [`NaiveHasher`]
    Naive,
    /// [`PositionalHasher`] with the given modulus
    Positional {
        /// Modulus digests are reduced by
        modulus: NonZeroU64,
    },
}

impl BuiltinHasher {
    /// Parse a hasher name (`naive` or `positional`), using `modulus` for the
    /// positional variant
    pub fn from_name(name: &str, modulus: u64) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "positional" => {
                let hasher = PositionalHasher::with_modulus(modulus)?;
                Ok(Self::from(hasher))
            }
            other => Err(HashProbeError::configuration(format!(
                "unknown hasher '{}', expected 'naive' or 'positional'",
                other
            ))),
        }
    }

    /// Short name of the selected hasher
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Positional { .. } => "positional",
        }
    }
}

impl Default for BuiltinHasher {
    fn default() -> Self {
        Self::from(PositionalHasher::default())
    }
}

impl From<NaiveHasher> for BuiltinHasher {
    fn from(_: NaiveHasher) -> Self {
        Self::Naive
    }
}

impl From<PositionalHasher> for BuiltinHasher {
    fn from(hasher: PositionalHasher) -> Self {
        Self::Positional { modulus: hasher.modulus }
    }
}

impl StringHasher for BuiltinHasher {
    #[inline]
    fn digest(&self, value: &str) -> u64 {
        match *self {
            Self::Naive => NaiveHasher.digest(value),
            Self::Positional { modulus } => PositionalHasher { modulus }.digest(value),
        }
    }
}
