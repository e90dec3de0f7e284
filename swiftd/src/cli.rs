use clap::Parser;
use consensus_core::{errors::NetworkError, NetworkId};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "swiftd")]
#[command(about = "SwiftCash node daemon", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Network (main, test, regtest, unittest)
    #[arg(short, long)]
    pub network: Option<String>,

    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    pub regtest: bool,

    /// Use the unit test network
    #[arg(long)]
    pub unittest: bool,

    /// Log level (trace, debug, info, warn, error), overrides the config file
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print the selected chain parameters as JSON and exit
    #[arg(long)]
    pub dump_params: bool,
}

impl Args {
    /// The network requested on the command line, if any.
    ///
    /// `--network` and the shorthand flags may be combined only when they agree.
    pub fn network_selection(&self) -> Result<Option<NetworkId>, NetworkError> {
        let mut selected = match &self.network {
            Some(name) => Some(name.parse::<NetworkId>()?),
            None => None,
        };

        for (flag, network) in
            [(self.testnet, NetworkId::Testnet), (self.regtest, NetworkId::Regtest), (self.unittest, NetworkId::UnitTest)]
        {
            if !flag {
                continue;
            }
            match selected {
                Some(previous) if previous != network => return Err(NetworkError::Conflicting(previous, network)),
                _ => selected = Some(network),
            }
        }

        Ok(selected)
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}
