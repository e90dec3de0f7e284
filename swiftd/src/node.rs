//! Startup of the chain identity: resolve the network from the config,
//! select it in the parameter registry and report what was selected.

use anyhow::Context;
use consensus_core::{
    constants::PROTOCOL_VERSION,
    errors::RegistryError,
    ChainParams, ParameterRegistry,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;

/// Human and machine readable view of the selected chain parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsSummary {
    pub network: String,
    pub magic: String,
    pub listen_port: u16,
    pub default_port: u16,
    pub protocol_version: i32,
    pub genesis_hash: String,
    pub genesis_merkle_root: String,
    pub genesis_time: u32,
    pub pow_limit_bits: String,
    pub checkpoints: usize,
    pub last_checkpoint_height: Option<u64>,
    pub dns_seeds: Vec<String>,
    pub fixed_seeds: usize,
    pub coinbase_maturity: u64,
    pub last_pow_block: u64,
}

impl ParamsSummary {
    pub fn new(params: &ChainParams, listen_port: u16) -> Self {
        Self {
            network: params.name().to_string(),
            magic: params.magic_hex(),
            listen_port,
            default_port: params.default_port,
            protocol_version: PROTOCOL_VERSION,
            genesis_hash: params.genesis.hash.to_string(),
            genesis_merkle_root: params.genesis.block.header.hash_merkle_root.to_string(),
            genesis_time: params.genesis.block.header.time,
            pow_limit_bits: format!("0x{:08x}", params.pow_limit_bits()),
            checkpoints: params.checkpoints.len(),
            last_checkpoint_height: params.checkpoints.last_checkpoint_height(),
            dns_seeds: params.dns_seeds.iter().map(|seed| seed.host.to_string()).collect(),
            fixed_seeds: params.fixed_seeds.len(),
            coinbase_maturity: params.coinbase_maturity,
            last_pow_block: params.last_pow_block,
        }
    }
}

/// Selects the configured network in `registry` and summarizes it
pub fn start(config: &Config, registry: &ParameterRegistry) -> anyhow::Result<ParamsSummary> {
    let network = config.network_id().context("invalid network in configuration")?;
    let params = registry.select(network).map_err(|err| {
        if let RegistryError::AlreadySelected { active, .. } = &err {
            warn!(%active, requested = %network, "network switch refused");
        }
        err
    })?;

    let listen_port = config.network.listen_port.unwrap_or(params.default_port);
    if listen_port != params.default_port {
        info!(listen_port, default_port = params.default_port, "using non-default P2P port");
    }
    if params.dns_seeds.is_empty() && params.fixed_seeds.is_empty() {
        info!(network = %network, "no seed peers for this network, peers must be added manually");
    }

    Ok(ParamsSummary::new(params, listen_port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use consensus_core::NetworkId;

    #[test]
    fn start_selects_configured_network() {
        let registry = ParameterRegistry::new();
        let config = Config::for_network("regtest").unwrap();
        let summary = start(&config, &registry).unwrap();

        assert_eq!(registry.selected_network(), Some(NetworkId::Regtest));
        assert_eq!(summary.network, "regtest");
        assert_eq!(summary.magic, "11f243ff");
        assert_eq!(summary.listen_port, 48544);
        assert_eq!(summary.genesis_hash, "00000928717cf50aacdb893a35686a88d33f912f60ff349ca90be0979301ce6e");
        assert_eq!(summary.pow_limit_bits, "0x207fffff");
        assert!(summary.dns_seeds.is_empty());
    }

    #[test]
    fn listen_port_override() {
        let registry = ParameterRegistry::new();
        let mut config = Config::for_network("main").unwrap();
        config.network.listen_port = Some(9999);
        let summary = start(&config, &registry).unwrap();
        assert_eq!(summary.listen_port, 9999);
        assert_eq!(summary.default_port, 8544);
        assert_eq!(summary.checkpoints, 14);
        assert_eq!(summary.last_checkpoint_height, Some(200));
    }

    #[test]
    fn second_start_on_other_network_fails() {
        let registry = ParameterRegistry::new();
        start(&Config::for_network("test").unwrap(), &registry).unwrap();
        let err = start(&Config::for_network("main").unwrap(), &registry).unwrap_err();
        assert!(err.to_string().contains("already selected"));
    }
}
