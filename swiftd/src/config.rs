use consensus_core::{errors::NetworkError, NetworkId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub network_id: String,
    /// P2P port, the network's default port when unset
    pub listen_port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Load configuration from an explicitly named file. A missing file is an
    /// error; callers without a path use [`Config::default`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config: Config = toml::from_str(&content)?;
        // Reject unknown networks at load time rather than at selection
        config.network_id()?;
        Ok(config)
    }

    /// Default configuration for a network
    pub fn for_network(network: &str) -> Result<Self, ConfigError> {
        let id: NetworkId = network.parse()?;
        let mut config = Config::default();
        config.network.network_id = id.name().to_string();
        Ok(config)
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &crate::cli::Args) -> Result<(), NetworkError> {
        if let Some(network) = args.network_selection()? {
            self.network.network_id = network.name().to_string();
        }
        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
        Ok(())
    }

    pub fn network_id(&self) -> Result<NetworkId, NetworkError> {
        self.network.network_id.parse()
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { network_id: NetworkId::Main.name().to_string(), listen_port: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}
