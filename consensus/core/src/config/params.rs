use hex_literal::hex;
use primitive_types::U256;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use swift_hashes::{KeccakPowHash, PowHasher};

use super::{
    checkpoints::{CheckpointTable, MAINNET_CHECKPOINT_TABLE, REGTEST_CHECKPOINT_TABLE, TESTNET_CHECKPOINT_TABLE},
    genesis::{GenesisBlock, GenesisDescriptor, MAINNET_GENESIS, REGTEST_GENESIS, TESTNET_GENESIS},
    prefixes::{AddressPrefixes, MAINNET_PREFIXES, TESTNET_PREFIXES},
    seeds::{convert_seed6, unix_now, DnsSeed, PeerAddress, SeedSpec6},
};
use crate::{constants::COIN, network::NetworkId, Hash};

/// Node behaviour switches that differ between networks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    /// Report the deprecated `testnet` field over RPC
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

/// Every constant that identifies one network and tunes its consensus.
///
/// Values are plain `const` data. The genesis block and the fixed seed peers
/// are derived from them by [`ChainParams::bootstrap`].
#[derive(Clone, Copy, Debug)]
pub struct NetworkParams {
    pub network: NetworkId,
    /// Message start bytes of every P2P message
    pub magic: [u8; 4],
    pub alert_pub_key: &'static [u8],
    pub default_port: u16,

    pub pow_limit: U256,
    pub subsidy_halving_interval: u64,
    pub max_reorganization_depth: u64,
    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,
    /// Zero lets the miner pick one thread per core
    pub miner_threads: u32,
    /// Seconds
    pub target_timespan: i64,
    /// Seconds
    pub target_spacing: i64,
    /// Blocks between difficulty adjustments
    pub retarget_interval: u64,
    pub coinbase_maturity: u64,
    pub swiftnode_count_drift: u32,
    pub max_money_out: i64,
    pub last_pow_block: u64,
    pub modifier_update_block: u64,

    pub pow_hasher: &'static dyn PowHasher,
    pub genesis: GenesisDescriptor,
    pub checkpoints: CheckpointTable,
    pub dns_seeds: &'static [DnsSeed],
    pub fixed_seeds: &'static [SeedSpec6],
    pub prefixes: AddressPrefixes,
    pub flags: BehaviorFlags,

    pub pool_max_transactions: u32,
    pub spork_key: &'static str,
    pub pool_dummy_address: &'static str,
    pub budget_fee_confirmations: u32,
}

impl NetworkParams {
    pub const fn name(&self) -> &'static str {
        self.network.name()
    }

    pub fn magic_hex(&self) -> String {
        hex::encode(self.magic)
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis.expected_hash
    }

    /// Compact ("nBits") form of the proof-of-work limit
    pub fn pow_limit_bits(&self) -> u32 {
        swift_math::target_to_compact(self.pow_limit)
    }

    /// Expected number of blocks per difficulty window
    pub fn blocks_per_timespan(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }
}

/// `~uint256(0) >> 1`
const POW_LIMIT: U256 = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]);

const MAINNET_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("seed1.swiftcash.cc", "seed1.swiftcash.cc"),
    DnsSeed::new("seed2.swiftcash.cc", "seed2.swiftcash.cc"),
    DnsSeed::new("seed3.swiftcash.cc", "seed3.swiftcash.cc"),
    DnsSeed::new("seed1.swiftcash.me", "seed1.swiftcash.me"),
    DnsSeed::new("seed2.swiftcash.me", "seed2.swiftcash.me"),
    DnsSeed::new("seed3.swiftcash.me", "seed3.swiftcash.me"),
    DnsSeed::new("seed1.swiftcash.org", "seed1.swiftcash.org"),
    DnsSeed::new("seed2.swiftcash.org", "seed2.swiftcash.org"),
    DnsSeed::new("seed3.swiftcash.org", "seed3.swiftcash.org"),
    DnsSeed::new("seed1.swiftcash.space", "seed1.swiftcash.space"),
    DnsSeed::new("seed2.swiftcash.space", "seed2.swiftcash.space"),
    DnsSeed::new("seed3.swiftcash.space", "seed3.swiftcash.space"),
];

const TESTNET_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("testnetseed.swiftcash.cc", "testnetseed.swiftcash.cc"),
    DnsSeed::new("testnetseed.swiftcash.org", "testnetseed.swiftcash.org"),
    DnsSeed::new("testnetseed.swiftcash.space", "testnetseed.swiftcash.space"),
    DnsSeed::new("testnetseed.swiftcash.me", "testnetseed.swiftcash.me"),
];

// No fixed seed list is published; DNS seeding is the only bootstrap path.
const MAINNET_FIXED_SEEDS: &[SeedSpec6] = &[];
const TESTNET_FIXED_SEEDS: &[SeedSpec6] = &[];

pub const MAINNET_PARAMS: NetworkParams = NetworkParams {
    network: NetworkId::Main,
    magic: [0x42, 0x1e, 0x31, 0xf5],
    alert_pub_key: &hex!("03001a39c631d98c9a674d1c855efd7f6cc2a893bf7e8f71f70f5ea4d06c679bc6"),
    default_port: 8544,

    pow_limit: POW_LIMIT,
    subsidy_halving_interval: 1_050_000,
    max_reorganization_depth: 100,
    majority_enforce_block_upgrade: 750,
    majority_reject_block_outdated: 950,
    majority_window: 1000,
    miner_threads: 0,
    target_timespan: 40 * 60,
    target_spacing: 60,
    retarget_interval: 1,
    coinbase_maturity: 20,
    swiftnode_count_drift: 20,
    max_money_out: 5_000_000_000 * COIN,
    last_pow_block: 200,
    modifier_update_block: 1,

    pow_hasher: &KeccakPowHash,
    genesis: MAINNET_GENESIS,
    checkpoints: MAINNET_CHECKPOINT_TABLE,
    dns_seeds: MAINNET_DNS_SEEDS,
    fixed_seeds: MAINNET_FIXED_SEEDS,
    prefixes: MAINNET_PREFIXES,
    flags: BehaviorFlags {
        mining_requires_peers: true,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        testnet_to_be_deprecated_field_rpc: false,
        headers_first_syncing_active: false,
    },

    pool_max_transactions: 3,
    spork_key: "03ae4c8038c50e10015d436f938237d66d7c8da21ee1a989658424cfe60379da78",
    pool_dummy_address: "Sh7nUAg9fWxqhCL2KiqWarsF6VfPBPvJz4",
    budget_fee_confirmations: 6,
};

pub const TESTNET_PARAMS: NetworkParams = NetworkParams {
    network: NetworkId::Testnet,
    magic: [0x42, 0x51, 0xd3, 0x8a],
    alert_pub_key: &hex!("02c1d175e8a526d9ee25770b7b3d3a4f850f00b611130c2e07c1682aa3a74d5436"),
    default_port: 28544,
    majority_enforce_block_upgrade: 51,
    majority_reject_block_outdated: 75,
    majority_window: 100,
    coinbase_maturity: 10,
    swiftnode_count_drift: 4,
    genesis: TESTNET_GENESIS,
    checkpoints: TESTNET_CHECKPOINT_TABLE,
    dns_seeds: TESTNET_DNS_SEEDS,
    fixed_seeds: TESTNET_FIXED_SEEDS,
    prefixes: TESTNET_PREFIXES,
    flags: BehaviorFlags {
        require_standard: false,
        testnet_to_be_deprecated_field_rpc: true,
        ..MAINNET_PARAMS.flags
    },
    pool_max_transactions: 2,
    spork_key: "02c78ca70bcaea5468843854bebae65123b0e8ad99b0cbda98504160b71179d42b",
    pool_dummy_address: "THSwiJRv9UBw5pHVFxvzji5odtySjgyskh",
    budget_fee_confirmations: 3,
    ..MAINNET_PARAMS
};

pub const REGTEST_PARAMS: NetworkParams = NetworkParams {
    network: NetworkId::Regtest,
    magic: [0x11, 0xf2, 0x43, 0xff],
    default_port: 48544,
    subsidy_halving_interval: 150,
    majority_enforce_block_upgrade: 750,
    majority_reject_block_outdated: 950,
    majority_window: 1000,
    miner_threads: 1,
    genesis: REGTEST_GENESIS,
    checkpoints: REGTEST_CHECKPOINT_TABLE,
    dns_seeds: &[],
    fixed_seeds: &[],
    flags: BehaviorFlags {
        mining_requires_peers: false,
        allow_min_difficulty_blocks: true,
        default_consistency_checks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        testnet_to_be_deprecated_field_rpc: false,
        ..TESTNET_PARAMS.flags
    },
    ..TESTNET_PARAMS
};

pub const UNITTEST_PARAMS: NetworkParams = NetworkParams {
    network: NetworkId::UnitTest,
    default_port: 51488,
    dns_seeds: &[],
    fixed_seeds: &[],
    flags: BehaviorFlags {
        mining_requires_peers: false,
        default_consistency_checks: true,
        allow_min_difficulty_blocks: false,
        mine_blocks_on_demand: true,
        ..MAINNET_PARAMS.flags
    },
    ..MAINNET_PARAMS
};

static MAINNET: NetworkParams = MAINNET_PARAMS;
static TESTNET: NetworkParams = TESTNET_PARAMS;
static REGTEST: NetworkParams = REGTEST_PARAMS;
static UNITTEST: NetworkParams = UNITTEST_PARAMS;

/// The static constant set of a network. Does not build or verify the genesis block.
pub fn network_params(network: NetworkId) -> &'static NetworkParams {
    match network {
        NetworkId::Main => &MAINNET,
        NetworkId::Testnet => &TESTNET,
        NetworkId::Regtest => &REGTEST,
        NetworkId::UnitTest => &UNITTEST,
    }
}

/// A network's constants together with the verified genesis block and the
/// converted fixed seed peers
#[derive(Clone, Debug)]
pub struct ChainParams {
    pub params: &'static NetworkParams,
    pub genesis: GenesisBlock,
    pub fixed_seeds: Vec<PeerAddress>,
}

impl ChainParams {
    /// Verifies the genesis block and converts the fixed seeds.
    ///
    /// # Panics
    ///
    /// If the rebuilt genesis block does not match the hard-coded hash or merkle root.
    pub fn bootstrap(params: &'static NetworkParams) -> Self {
        Self::bootstrap_with(params, unix_now(), &mut rand::thread_rng())
    }

    pub fn bootstrap_with<R: Rng + ?Sized>(params: &'static NetworkParams, now: i64, rng: &mut R) -> Self {
        let genesis = params.genesis.bootstrap(params.network, params.pow_hasher);
        let fixed_seeds = convert_seed6(params.fixed_seeds, now, rng);
        Self { params, genesis, fixed_seeds }
    }

    pub fn genesis_block(&self) -> &GenesisBlock {
        &self.genesis
    }
}

impl Deref for ChainParams {
    type Target = NetworkParams;

    fn deref(&self) -> &Self::Target {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn default_ports() {
        let ports: Vec<u16> = NetworkId::iter().map(|n| network_params(n).default_port).collect();
        assert_eq!(ports, vec![8544, 28544, 48544, 51488]);
    }

    #[test]
    fn network_ids_line_up() {
        for network in NetworkId::iter() {
            assert_eq!(network_params(network).network, network);
        }
    }

    #[test]
    fn magics_identify_distinct_networks() {
        let magics: HashSet<[u8; 4]> =
            [NetworkId::Main, NetworkId::Testnet, NetworkId::Regtest].into_iter().map(|n| network_params(n).magic).collect();
        assert_eq!(magics.len(), 3);
        assert_eq!(MAINNET_PARAMS.magic_hex(), "421e31f5");
        // The unit test network is mainnet with different local behaviour
        assert_eq!(UNITTEST_PARAMS.magic, MAINNET_PARAMS.magic);
    }

    #[test]
    fn pow_limit_compact_form() {
        for network in NetworkId::iter() {
            assert_eq!(network_params(network).pow_limit_bits(), 0x207f_ffff);
        }
    }

    #[test]
    fn inherited_values() {
        assert_eq!(TESTNET_PARAMS.subsidy_halving_interval, 1_050_000);
        assert_eq!(TESTNET_PARAMS.max_money_out, 5_000_000_000 * COIN);
        assert_eq!(REGTEST_PARAMS.prefixes, TESTNET_PREFIXES);
        assert_eq!(REGTEST_PARAMS.coinbase_maturity, 10);
        assert_eq!(REGTEST_PARAMS.spork_key, TESTNET_PARAMS.spork_key);
        assert_eq!(UNITTEST_PARAMS.genesis, MAINNET_GENESIS);
        assert_eq!(UNITTEST_PARAMS.checkpoints, MAINNET_CHECKPOINT_TABLE);
        assert_eq!(MAINNET_PARAMS.blocks_per_timespan(), 40);
    }

    #[test]
    fn behaviour_flags() {
        assert!(MAINNET_PARAMS.flags.require_standard);
        assert!(!TESTNET_PARAMS.flags.require_standard);
        assert!(TESTNET_PARAMS.flags.testnet_to_be_deprecated_field_rpc);
        assert!(TESTNET_PARAMS.flags.mining_requires_peers);

        let regtest = REGTEST_PARAMS.flags;
        assert!(regtest.allow_min_difficulty_blocks && regtest.mine_blocks_on_demand && regtest.default_consistency_checks);
        assert!(!regtest.testnet_to_be_deprecated_field_rpc);

        let unittest = UNITTEST_PARAMS.flags;
        assert!(!unittest.mining_requires_peers && !unittest.allow_min_difficulty_blocks);
        assert!(unittest.require_standard);
    }

    #[test]
    fn seeds_per_network() {
        assert_eq!(MAINNET_PARAMS.dns_seeds.len(), 12);
        assert_eq!(MAINNET_PARAMS.dns_seeds[0].host, "seed1.swiftcash.cc");
        assert_eq!(TESTNET_PARAMS.dns_seeds.len(), 4);
        assert!(REGTEST_PARAMS.dns_seeds.is_empty());
        assert!(UNITTEST_PARAMS.dns_seeds.is_empty());
        // DNS seeds are the only bootstrap source on every network
        for network in NetworkId::iter() {
            assert!(network_params(network).fixed_seeds.is_empty());
        }
    }

    #[test]
    fn bootstrap_every_network() {
        let mut rng = StdRng::seed_from_u64(1);
        for network in NetworkId::iter() {
            let chain = ChainParams::bootstrap_with(network_params(network), 1_700_000_000, &mut rng);
            assert_eq!(chain.genesis.hash, chain.genesis_hash());
            assert_eq!(chain.fixed_seeds.len(), chain.params.fixed_seeds.len());
            assert_eq!(chain.name(), network.name());
        }
    }
}
