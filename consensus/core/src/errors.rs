use thiserror::Error;

use crate::{network::NetworkId, Hash};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Unknown network: {0}")]
    Unknown(String),

    #[error("Conflicting network selection: {0} and {1}")]
    Conflicting(NetworkId, NetworkId),
}

/// Genesis block reconstruction disagrees with a hard-coded commitment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { network: NetworkId, expected: Hash, computed: Hash },

    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch { network: NetworkId, expected: Hash, computed: Hash },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("Checkpoint heights must strictly increase: {height} follows {previous}")]
    NotIncreasing { previous: u64, height: u64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    UnknownNetwork(#[from] NetworkError),

    #[error("Network {active} is already selected, refusing to switch to {requested}")]
    AlreadySelected { active: NetworkId, requested: NetworkId },
}
