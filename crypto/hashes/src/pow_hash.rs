use crate::Hash;
use sha3::{Digest, Keccak256};
use std::fmt;

/// Block-header hash function of a network.
///
/// The serialized header goes in, the block identity (and proof-of-work value)
/// comes out in internal byte order.
pub trait PowHasher: fmt::Debug + Send + Sync {
    /// Short algorithm name, used in logs and tooling output.
    fn name(&self) -> &'static str;

    fn hash(&self, header: &[u8]) -> Hash;
}

/// Keccak-256 with the original (pre-FIPS 202) padding, as used by the
/// SwiftCash block header.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeccakPowHash;

impl PowHasher for KeccakPowHash {
    fn name(&self) -> &'static str {
        "keccak256"
    }

    fn hash(&self, header: &[u8]) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(header);
        Hash::from_bytes(hasher.finalize().into())
    }
}
