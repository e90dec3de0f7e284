//! Chain identity for SwiftCash nodes: genesis construction, checkpoints,
//! network magic, address prefixes, seed lists and the process-wide selection
//! of the active network.

pub mod block;
pub mod config;
pub mod constants;
pub mod errors;
pub mod network;
pub mod script;
pub mod tx;

pub use swift_hashes::{Hash, ZERO_HASH};

pub use config::params::{BehaviorFlags, ChainParams, NetworkParams};
pub use config::registry::{params, params_for, select_params, ParameterRegistry};
pub use network::NetworkId;

#[cfg(any(test, feature = "test-params"))]
pub use config::modifiable::ModifiableParams;
