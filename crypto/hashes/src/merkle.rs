use crate::{double_sha256, Hash, ZERO_HASH};

/// Bitcoin-style merkle tree over transaction ids.
///
/// Odd levels duplicate their last node; parents are double-SHA256 of the
/// concatenated children in internal byte order.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// Nodes at each level of the tree (leaves at level 0)
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Creates a new Merkle tree from a list of transaction hashes
    pub fn from_hashes(hashes: Vec<Hash>) -> Self {
        if hashes.is_empty() {
            return Self { levels: vec![] };
        }

        let mut levels = vec![hashes];
        loop {
            let current = &levels[levels.len() - 1];
            if current.len() <= 1 {
                break;
            }
            let next: Vec<Hash> = current
                .chunks(2)
                .map(|chunk| {
                    let left = chunk[0];
                    let right = chunk.get(1).copied().unwrap_or(left);
                    Self::hash_pair(&left, &right)
                })
                .collect();
            levels.push(next);
        }

        Self { levels }
    }

    /// Returns the Merkle root hash, or the zero hash for an empty tree
    pub fn root(&self) -> Hash {
        self.levels.last().and_then(|level| level.first().copied()).unwrap_or(ZERO_HASH)
    }

    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut combined = [0u8; 64];
        combined[..32].copy_from_slice(left.as_bytes());
        combined[32..].copy_from_slice(right.as_bytes());
        double_sha256(&combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = MerkleTree::from_hashes(vec![]);
        assert_eq!(tree.root(), ZERO_HASH);
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn test_single_leaf_is_root() {
        let hash = Hash::from_bytes([7u8; 32]);
        assert_eq!(MerkleTree::from_hashes(vec![hash]).root(), hash);
    }

    #[test]
    fn test_two_leaves() {
        let a = Hash::from_bytes([1u8; 32]);
        let b = Hash::from_bytes([2u8; 32]);
        let mut concat = Vec::new();
        concat.extend_from_slice(a.as_bytes());
        concat.extend_from_slice(b.as_bytes());
        assert_eq!(MerkleTree::from_hashes(vec![a, b]).root(), double_sha256(&concat));
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let a = Hash::from_bytes([1u8; 32]);
        let b = Hash::from_bytes([2u8; 32]);
        let c = Hash::from_bytes([3u8; 32]);
        let three = MerkleTree::from_hashes(vec![a, b, c]).root();
        let four = MerkleTree::from_hashes(vec![a, b, c, c]).root();
        assert_eq!(three, four);
    }
}
