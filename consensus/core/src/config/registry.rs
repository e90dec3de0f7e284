//! Selection of the network a process runs on.
//!
//! A [`ParameterRegistry`] is set once, at startup, and read everywhere after.
//! Chain parameters are built lazily, one set per network, and shared as
//! `&'static` references without locking.

use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, info};

use super::params::{network_params, ChainParams};
use crate::{errors::RegistryError, network::NetworkId};

static MAINNET: Lazy<ChainParams> = Lazy::new(|| ChainParams::bootstrap(network_params(NetworkId::Main)));
static TESTNET: Lazy<ChainParams> = Lazy::new(|| ChainParams::bootstrap(network_params(NetworkId::Testnet)));
static REGTEST: Lazy<ChainParams> = Lazy::new(|| ChainParams::bootstrap(network_params(NetworkId::Regtest)));
static UNITTEST: Lazy<ChainParams> = Lazy::new(|| ChainParams::bootstrap(network_params(NetworkId::UnitTest)));

/// Bootstrapped parameters of `network`, built on first use. Does not select anything.
///
/// # Panics
///
/// On first use, if the genesis block of `network` fails verification.
pub fn params_for(network: NetworkId) -> &'static ChainParams {
    match network {
        NetworkId::Main => &MAINNET,
        NetworkId::Testnet => &TESTNET,
        NetworkId::Regtest => &REGTEST,
        NetworkId::UnitTest => &UNITTEST,
    }
}

/// Holds the active network; `Unselected` until [`ParameterRegistry::select`] succeeds.
#[derive(Debug, Default)]
pub struct ParameterRegistry {
    active: OnceCell<NetworkId>,
}

impl ParameterRegistry {
    pub const fn new() -> Self {
        Self { active: OnceCell::new() }
    }

    /// Activates `network`. Selecting the active network again is a no-op,
    /// switching to another one is refused.
    pub fn select(&self, network: NetworkId) -> Result<&'static ChainParams, RegistryError> {
        let mut fresh = false;
        let active = *self.active.get_or_init(|| {
            fresh = true;
            let chain = params_for(network);
            info!(
                network = %network,
                genesis = %chain.genesis.hash,
                port = chain.default_port,
                magic = %chain.magic_hex(),
                "selected chain parameters"
            );
            network
        });
        if active != network {
            return Err(RegistryError::AlreadySelected { active, requested: network });
        }
        if !fresh {
            debug!(%network, "chain parameters already selected");
        }
        Ok(params_for(active))
    }

    /// Parses a network name and selects it; unknown names never fall back to main.
    pub fn select_from_str(&self, name: &str) -> Result<&'static ChainParams, RegistryError> {
        let network: NetworkId = name.parse()?;
        self.select(network)
    }

    /// # Panics
    ///
    /// If no network has been selected yet.
    pub fn current(&self) -> &'static ChainParams {
        match self.try_current() {
            Some(params) => params,
            None => panic!("chain parameters accessed before a network was selected"),
        }
    }

    pub fn try_current(&self) -> Option<&'static ChainParams> {
        self.active.get().map(|network| params_for(*network))
    }

    pub fn selected_network(&self) -> Option<NetworkId> {
        self.active.get().copied()
    }

    /// Inspect another network's parameters without activating it
    pub fn by_id(&self, network: NetworkId) -> &'static ChainParams {
        params_for(network)
    }
}

static REGISTRY: ParameterRegistry = ParameterRegistry::new();

/// The process-wide registry. Select once during startup, read-only afterwards.
pub fn registry() -> &'static ParameterRegistry {
    &REGISTRY
}

/// Selects the process-wide network, see [`ParameterRegistry::select`]
pub fn select_params(network: NetworkId) -> Result<&'static ChainParams, RegistryError> {
    REGISTRY.select(network)
}

/// The process-wide active parameters.
///
/// # Panics
///
/// If [`select_params`] has not succeeded yet.
pub fn params() -> &'static ChainParams {
    REGISTRY.current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NetworkError;

    #[test]
    fn select_then_current() {
        for network in NetworkId::iter() {
            let registry = ParameterRegistry::new();
            assert!(registry.try_current().is_none());
            let selected = registry.select(network).unwrap();
            assert_eq!(selected.network, network);
            assert_eq!(registry.current().network, network);
            assert_eq!(registry.selected_network(), Some(network));
        }
    }

    #[test]
    fn reselecting_same_network_is_a_no_op() {
        let registry = ParameterRegistry::new();
        let first = registry.select(NetworkId::Regtest).unwrap();
        let second = registry.select(NetworkId::Regtest).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn switching_network_is_refused() {
        let registry = ParameterRegistry::new();
        registry.select(NetworkId::Testnet).unwrap();
        assert_eq!(
            registry.select(NetworkId::Main).unwrap_err(),
            RegistryError::AlreadySelected { active: NetworkId::Testnet, requested: NetworkId::Main }
        );
        assert_eq!(registry.current().network, NetworkId::Testnet);
    }

    #[test]
    fn select_by_name() {
        let registry = ParameterRegistry::new();
        let main = registry.select_from_str("mainnet").unwrap();
        assert_eq!(main.default_port, 8544);
        assert_eq!(main.genesis.hash, main.genesis_hash());

        let registry = ParameterRegistry::new();
        let test = registry.select_from_str("test").unwrap();
        assert_eq!(test.default_port, 28544);
        assert_ne!(test.genesis.hash, main.genesis.hash);
    }

    #[test]
    fn unknown_name_selects_nothing() {
        let registry = ParameterRegistry::new();
        assert_eq!(
            registry.select_from_str("devnet").unwrap_err(),
            RegistryError::UnknownNetwork(NetworkError::Unknown("devnet".to_string()))
        );
        assert!(registry.try_current().is_none());
    }

    #[test]
    fn by_id_does_not_activate() {
        let registry = ParameterRegistry::new();
        assert_eq!(registry.by_id(NetworkId::Regtest).default_port, 48544);
        assert!(registry.selected_network().is_none());
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn current_before_select_panics() {
        ParameterRegistry::new().current();
    }
}
