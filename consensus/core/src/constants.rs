/// Number of base units in one coin
pub const COIN: i64 = 100_000_000;

/// Header version of the genesis block
pub const GENESIS_BLOCK_VERSION: i32 = 1;

/// Network protocol version
pub const PROTOCOL_VERSION: i32 = 80413;

/// Initial protocol version, increased after version/verack negotiation
pub const INIT_PROTO_VERSION: i32 = 200;

/// Peers older than this protocol version are disconnected
pub const MIN_PEER_PROTO_VERSION: i32 = 80413;

/// Minimum peer protocol version once the upgrade spork is enforced
pub const MIN_PEER_PROTO_VERSION_AFTER_ENFORCEMENT: i32 = 80414;

/// Address records carry a timestamp starting with this version
pub const CADDR_TIME_VERSION: i32 = 31402;

/// BIP 0031 pong messages are enabled for all versions after this one
pub const BIP0031_VERSION: i32 = 60000;

/// "mempool" command and enhanced "getdata" behaviour start with this version
pub const MEMPOOL_GD_VERSION: i32 = 60002;

/// "filter*" commands require NODE_BLOOM from this version on
pub const NO_BLOOM_VERSION: i32 = 70005;
