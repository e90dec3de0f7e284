pub mod hasher;
pub mod merkle;
pub mod pow_hash;

// Re-export commonly used types
pub use hasher::{double_sha256, sha256, HashWriter};
pub use merkle::MerkleTree;
pub use pow_hash::{KeccakPowHash, PowHasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

pub const HASH_SIZE: usize = 32;

/// All-zero hash, used as the parent of a genesis block and as the null outpoint.
pub const ZERO_HASH: Hash = Hash([0u8; HASH_SIZE]);

/// A 256-bit hash in internal (little-endian) byte order.
///
/// Text form follows the usual block-explorer convention: the bytes are printed
/// most significant first, i.e. reversed relative to the internal order.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash([u8; HASH_SIZE]);

/// Error returned when a hash literal cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseHashError {
    Empty,
    TooLong,
    InvalidDigit,
}

impl fmt::Display for ParseHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseHashError::Empty => write!(f, "hash literal has no hex digits"),
            ParseHashError::TooLong => write!(f, "hash literal has more than 64 hex digits"),
            ParseHashError::InvalidDigit => write!(f, "hash literal contains a non-hex character"),
        }
    }
}

impl std::error::Error for ParseHashError {}

impl Hash {
    /// Create a hash from bytes in internal order
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns raw bytes in internal order
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }

    /// Tries to create a Hash from a slice of bytes
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, std::array::TryFromSliceError> {
        let array: [u8; HASH_SIZE] = slice.try_into()?;
        Ok(Self(array))
    }

    /// Parses the display form of a hash (optional `0x`, most significant digit
    /// first). Short literals are zero-extended, so `"0x1"` is the integer one.
    pub const fn parse_display_hex(s: &str) -> Result<Self, ParseHashError> {
        let digits = s.as_bytes();
        let mut start = 0;
        if digits.len() >= 2 && digits[0] == b'0' && (digits[1] == b'x' || digits[1] == b'X') {
            start = 2;
        }
        let count = digits.len() - start;
        if count == 0 {
            return Err(ParseHashError::Empty);
        }
        if count > 2 * HASH_SIZE {
            return Err(ParseHashError::TooLong);
        }

        let mut out = [0u8; HASH_SIZE];
        let mut i = 0;
        while i < count {
            let c = digits[digits.len() - 1 - i];
            let nibble = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => return Err(ParseHashError::InvalidDigit),
            };
            out[i / 2] |= if i % 2 == 0 { nibble } else { nibble << 4 };
            i += 1;
        }
        Ok(Self(out))
    }

    /// Const constructor for hard-coded hashes. An invalid literal fails const
    /// evaluation, so a bad constant never reaches a running binary.
    pub const fn from_display_hex(s: &str) -> Self {
        match Self::parse_display_hex(s) {
            Ok(hash) => hash,
            Err(_) => panic!("invalid hash literal"),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_SIZE]
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; HASH_SIZE] {
    fn from(h: Hash) -> Self {
        h.0
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Hash {
    type Target = [u8; HASH_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Hash {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_display_hex(s.trim())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
