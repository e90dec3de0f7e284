//! swiftd - SwiftCash node daemon
//!
//! Resolves the network to run on from the command line and the config file,
//! then selects and verifies its chain parameters before anything else starts.

pub mod cli;
pub mod config;
pub mod node;
pub mod ui;

pub use cli::Args;
pub use config::Config;
