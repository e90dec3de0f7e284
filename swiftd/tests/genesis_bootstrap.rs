use consensus_core::config::registry::{params, registry, select_params};
use consensus_core::errors::RegistryError;
use consensus_core::{ModifiableParams, NetworkId};
use swiftd::{node, Config};

// The only test in this binary that touches the process-wide registry.
#[test]
fn test_genesis_bootstrap() {
    assert!(registry().try_current().is_none());

    let config = Config::for_network("testnet").unwrap();
    let summary = node::start(&config, registry()).unwrap();
    assert_eq!(summary.network, "test");
    assert_eq!(summary.listen_port, 28544);
    assert_eq!(summary.genesis_hash, "000003f64020a3817b950ad5910917642faff02e3d5ec7cca9262db1bbb63038");

    let active = params();
    assert_eq!(active.network, NetworkId::Testnet);
    assert_eq!(active.genesis.block.transactions.len(), 1);
    assert!(active.genesis.block.transactions[0].is_coinbase());
    assert!(active.checkpoints.is_consistent(0, &active.genesis.hash));

    // Re-selecting is harmless, switching is not
    assert!(select_params(NetworkId::Testnet).is_ok());
    assert_eq!(
        select_params(NetworkId::Main).unwrap_err(),
        RegistryError::AlreadySelected { active: NetworkId::Testnet, requested: NetworkId::Main }
    );
}

#[test]
fn modifiable_params_stay_local() {
    let mut tweaked = ModifiableParams::new();
    tweaked.set_skip_proof_of_work_check(true).set_subsidy_halving_interval(150);
    assert!(tweaked.flags.skip_proof_of_work_check);
    assert_eq!(tweaked.default_port, 51488);
    assert_eq!(tweaked.genesis_hash(), consensus_core::params_for(NetworkId::Main).genesis.hash);
}
