use serde::{Deserialize, Serialize};
use swift_hashes::{MerkleTree, PowHasher};

use crate::{tx::Transaction, Hash};

/// Serialized header length in bytes
pub const HEADER_SIZE: usize = 80;

/// Proof-of-work block header
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub version: i32,
    pub hash_prev_block: Hash,
    pub hash_merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl Header {
    /// Little-endian wire serialization
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.hash_prev_block.as_bytes());
        out[36..68].copy_from_slice(self.hash_merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Block hash under the network's header hash function
    pub fn hash<H: PowHasher + ?Sized>(&self, hasher: &H) -> Hash {
        hasher.hash(&self.to_bytes())
    }
}

/// Complete block structure including header and transactions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub header: Header,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    /// Merkle root over the ids of the block's transactions
    pub fn calculate_merkle_root(&self) -> Hash {
        calculate_merkle_root(&self.transactions)
    }
}

pub fn calculate_merkle_root(transactions: &[Transaction]) -> Hash {
    MerkleTree::from_hashes(transactions.iter().map(Transaction::id).collect()).root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swift_hashes::KeccakPowHash;

    fn header() -> Header {
        Header {
            version: 1,
            hash_prev_block: Hash::from_bytes([0xaa; 32]),
            hash_merkle_root: Hash::from_bytes([0xbb; 32]),
            time: 0x0102_0304,
            bits: 0x1e0f_fff0,
            nonce: 7,
        }
    }

    #[test]
    fn header_layout() {
        let bytes = header().to_bytes();
        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..36], &[0xaa; 32]);
        assert_eq!(&bytes[36..68], &[0xbb; 32]);
        assert_eq!(&bytes[68..72], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&bytes[72..76], &[0xf0, 0xff, 0x0f, 0x1e]);
        assert_eq!(&bytes[76..80], &[7, 0, 0, 0]);
    }

    #[test]
    fn nonce_changes_hash() {
        let a = header();
        let mut b = a;
        b.nonce += 1;
        assert_ne!(a.hash(&KeccakPowHash), b.hash(&KeccakPowHash));
    }

    #[test]
    fn empty_block_has_zero_merkle_root() {
        let block = Block::new(header(), vec![]);
        assert!(block.calculate_merkle_root().is_zero());
    }
}
