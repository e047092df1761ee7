//! The closed set of supported hash algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{HashContext, HashError, Result};

/// Selector for the supported hash functions.
///
/// The set is closed: every variant maps to exactly one algorithm
/// binding with a fixed digest size. A selector is chosen once, at
/// context construction, and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// The venerable MD5 (not cryptographically safe).
    Md5,
    /// SHA-1 (not cryptographically safe).
    Sha1,
    /// SHA-256 variant of SHA-2.
    Sha256,
    /// SHA-384 variant of SHA-2.
    Sha384,
    /// SHA-512 variant of SHA-2.
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Fixed digest size in bytes.
    #[must_use]
    pub fn digest_size(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Canonical lowercase name of the algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Manufacture a fresh [`HashContext`] bound to this algorithm.
    ///
    /// Each call returns a brand-new context in the open state; the
    /// registry retains nothing.
    #[must_use]
    pub fn hasher(&self) -> HashContext {
        HashContext::new(*self)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    /// Case-insensitive lookup; `"sha-256"` style hyphenation is accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "md5" | "md-5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha384" | "sha-384" => Ok(Self::Sha384),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(HashError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_sizes_match_the_fixed_table() {
        let expected = [16, 20, 32, 48, 64];
        for (algorithm, size) in HashAlgorithm::ALL.iter().zip(expected) {
            assert_eq!(algorithm.digest_size(), size);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<HashAlgorithm>().unwrap(), algorithm);
        }
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "whirlpool".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, HashError::UnknownAlgorithm(name) if name == "whirlpool"));
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&HashAlgorithm::Sha384).unwrap();
        assert_eq!(json, "\"sha384\"");
        let back: HashAlgorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HashAlgorithm::Sha384);
    }
}
