use anyhow::Context;
use consensus_core::config::registry::registry;
use swiftd::{cli, node, ui, Config};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();

    let mut config = match &args.config_path {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    config.apply_cli_overrides(&args)?;

    init_logging(&config.logging.level);

    if !args.dump_params {
        ui::print_banner(env!("CARGO_PKG_VERSION"));
    }

    let summary = match node::start(&config, registry()) {
        Ok(summary) => summary,
        Err(err) => {
            ui::print_status("✗", &format!("Failed to select chain parameters: {:#}", err), ui::StatusType::Error);
            return Err(err);
        }
    };

    if args.dump_params {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    ui::print_params_summary(&summary);
    ui::print_status("✓", &format!("Chain parameters for {} ready", summary.network), ui::StatusType::Success);
    info!(network = %summary.network, genesis = %summary.genesis_hash, "swiftd initialized");
    Ok(())
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt().with_env_filter(filter).with_target(true).with_thread_ids(true).init();
}
