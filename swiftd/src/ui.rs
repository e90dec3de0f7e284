//! Console output for the daemon

use crate::node::ParamsSummary;

/// ANSI color codes for terminal output
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";
}

/// Status types for colored output
#[derive(Debug, Clone, Copy)]
pub enum StatusType {
    Success,
    Info,
    Warning,
    Error,
}

pub fn print_banner(version: &str) {
    println!();
    println!("{}{}SwiftCash node v{}{}", colors::BRIGHT_CYAN, colors::BOLD, version, colors::RESET);
    println!();
}

/// Print status line with icon and color
pub fn print_status(icon: &str, message: &str, status: StatusType) {
    let color = match status {
        StatusType::Success => colors::BRIGHT_GREEN,
        StatusType::Info => colors::BRIGHT_CYAN,
        StatusType::Warning => colors::BRIGHT_YELLOW,
        StatusType::Error => colors::BRIGHT_RED,
    };

    println!("{}[{}]{} {}{}{}", color, icon, colors::RESET, color, message, colors::RESET);
}

pub fn print_section(title: &str) {
    println!("{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━{}", colors::DIM, colors::RESET);
    println!("{}  {}{}{}", colors::BRIGHT_CYAN, colors::BOLD, title, colors::RESET);
    println!("{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━{}", colors::DIM, colors::RESET);
}

/// Print key-value pair in a formatted way
pub fn print_kv(key: &str, value: &str) {
    println!("  {}{:<22}{} {}{}{}", colors::BRIGHT_WHITE, key, colors::RESET, colors::BRIGHT_CYAN, value, colors::RESET);
}

pub fn print_params_summary(summary: &ParamsSummary) {
    print_section("Chain parameters");

    print_kv("Network", &summary.network);
    print_kv("Magic", &summary.magic);
    print_kv("P2P Port", &summary.listen_port.to_string());
    print_kv("Protocol Version", &summary.protocol_version.to_string());
    print_kv("Genesis Hash", &summary.genesis_hash);
    print_kv("Merkle Root", &summary.genesis_merkle_root);
    print_kv("PoW Limit", &summary.pow_limit_bits);
    let checkpoints = match summary.last_checkpoint_height {
        Some(height) => format!("{} (last at {})", summary.checkpoints, height),
        None => "none".to_string(),
    };
    print_kv("Checkpoints", &checkpoints);
    print_kv("DNS Seeds", &summary.dns_seeds.len().to_string());
    print_kv("Fixed Seeds", &summary.fixed_seeds.to_string());
}
