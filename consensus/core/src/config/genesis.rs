use hex_literal::hex;
use swift_hashes::PowHasher;

use crate::{
    block::{Block, Header},
    constants::GENESIS_BLOCK_VERSION,
    errors::GenesisError,
    network::NetworkId,
    script::{Opcode, Script},
    tx::{Transaction, TransactionInput, TransactionOutpoint, TransactionOutput},
    Hash, ZERO_HASH,
};

/// First push of the genesis coinbase script (the bits of the bitcoin genesis)
const COINBASE_SCRIPT_BITS: i64 = 486_604_799;

/// Second push of the genesis coinbase script
const COINBASE_SCRIPT_EXTRA_NONCE: i64 = 4;

/// The constants uniquely representing the genesis block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisDescriptor {
    /// Headline embedded in the coinbase script
    pub coinbase_message: &'static str,
    /// Uncompressed public key paid by the (unspendable) coinbase output
    pub output_public_key: &'static [u8],
    pub reward: i64,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub expected_hash: Hash,
    pub expected_merkle_root: Hash,
}

/// A genesis block whose hash and merkle root matched the hard-coded commitments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisBlock {
    pub block: Block,
    pub hash: Hash,
}

impl GenesisDescriptor {
    pub fn build_genesis_transactions(&self) -> Vec<Transaction> {
        let mut signature_script = Script::new();
        signature_script
            .push_int(COINBASE_SCRIPT_BITS)
            .push_num(COINBASE_SCRIPT_EXTRA_NONCE)
            .push_slice(self.coinbase_message.as_bytes());

        let mut script_public_key = Script::new();
        script_public_key.push_slice(self.output_public_key).push_opcode(Opcode::OP_CHECKSIG);

        vec![Transaction::new(
            1,
            vec![TransactionInput::new(TransactionOutpoint::null(), signature_script, u32::MAX)],
            vec![TransactionOutput::new(self.reward, script_public_key)],
            0,
        )]
    }

    /// Deterministically assembles the genesis block
    pub fn build_block(&self) -> Block {
        let transactions = self.build_genesis_transactions();
        let header = Header {
            version: self.version,
            hash_prev_block: ZERO_HASH,
            hash_merkle_root: crate::block::calculate_merkle_root(&transactions),
            time: self.time,
            bits: self.bits,
            nonce: self.nonce,
        };
        Block::new(header, transactions)
    }

    /// Rebuilds the block and checks it against the expected merkle root and hash
    pub fn verify<H: PowHasher + ?Sized>(&self, network: NetworkId, hasher: &H) -> Result<GenesisBlock, GenesisError> {
        let block = self.build_block();

        let merkle_root = block.header.hash_merkle_root;
        if merkle_root != self.expected_merkle_root {
            return Err(GenesisError::MerkleRootMismatch {
                network,
                expected: self.expected_merkle_root,
                computed: merkle_root,
            });
        }

        let hash = block.header.hash(hasher);
        if hash != self.expected_hash {
            return Err(GenesisError::HashMismatch { network, expected: self.expected_hash, computed: hash });
        }

        Ok(GenesisBlock { block, hash })
    }

    /// Startup path of [`GenesisDescriptor::verify`].
    ///
    /// # Panics
    ///
    /// On any mismatch. A wrong genesis means a corrupted build or parameter
    /// table, and the node must not run on that chain identity.
    pub fn bootstrap<H: PowHasher + ?Sized>(&self, network: NetworkId, hasher: &H) -> GenesisBlock {
        match self.verify(network, hasher) {
            Ok(genesis) => {
                tracing::debug!(%network, hash = %genesis.hash, algorithm = hasher.name(), "genesis block verified");
                genesis
            }
            Err(err) => {
                tracing::error!(%network, "{}", err);
                panic!("{}", err);
            }
        }
    }
}

const GENESIS_COINBASE_MESSAGE: &str = "Shooting at Tree of Life Congregation Synagogue in Pittsburgh";

const GENESIS_OUTPUT_PUBLIC_KEY: [u8; 65] = hex!(
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb6"
    "49f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f"
);

const GENESIS_MERKLE_ROOT: Hash =
    Hash::from_display_hex("28d9b3039993f5d90fda19141eaddc8b4459710bd752e41b6e23388ae5726c26");

pub const MAINNET_GENESIS: GenesisDescriptor = GenesisDescriptor {
    coinbase_message: GENESIS_COINBASE_MESSAGE,
    output_public_key: &GENESIS_OUTPUT_PUBLIC_KEY,
    reward: 0,
    version: GENESIS_BLOCK_VERSION,
    time: 1_540_687_441,
    bits: 0x1e0f_fff0,
    nonce: 21_766_572,
    expected_hash: Hash::from_display_hex("000001211fb1c1d0cf722e8934ecc1d6dac522e0489657a8cd6b5ea288f8729b"),
    expected_merkle_root: GENESIS_MERKLE_ROOT,
};

pub const TESTNET_GENESIS: GenesisDescriptor = GenesisDescriptor {
    time: 1_540_687_444,
    nonce: 22_026_442,
    expected_hash: Hash::from_display_hex("000003f64020a3817b950ad5910917642faff02e3d5ec7cca9262db1bbb63038"),
    ..MAINNET_GENESIS
};

pub const REGTEST_GENESIS: GenesisDescriptor = GenesisDescriptor {
    time: 1_540_687_443,
    nonce: 21_689_207,
    expected_hash: Hash::from_display_hex("00000928717cf50aacdb893a35686a88d33f912f60ff349ca90be0979301ce6e"),
    ..TESTNET_GENESIS
};
