use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::NetworkError;

/// Identifies the network a node is operating on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Main network
    Main,
    /// Public test network
    Testnet,
    /// Local regression-test network, blocks mined on demand
    Regtest,
    /// Main-like parameters for unit tests
    UnitTest,
}

impl NetworkId {
    /// Returns an iterator over all variants
    pub fn iter() -> impl Iterator<Item = NetworkId> {
        [NetworkId::Main, NetworkId::Testnet, NetworkId::Regtest, NetworkId::UnitTest].into_iter()
    }

    /// Canonical short name, also used as the data sub-directory name.
    pub const fn name(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Testnet => "test",
            NetworkId::Regtest => "regtest",
            NetworkId::UnitTest => "unittest",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Testnet),
            "regtest" => Ok(NetworkId::Regtest),
            "unittest" => Ok(NetworkId::UnitTest),
            _ => Err(NetworkError::Unknown(s.to_string())),
        }
    }
}
