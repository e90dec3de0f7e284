use anyhow::{bail, Context};
use clap::Parser;
use consensus_core::{
    config::{genesis::GenesisDescriptor, params::network_params},
    NetworkId,
};
use serde::Serialize;
use std::time::Instant;
use swift_hashes::PowHasher;
use swift_math::{compact_to_target, hash_meets_target};

/// Prints, verifies and re-mines the genesis blocks of every network.
#[derive(Parser, Debug)]
#[command(name = "genesis_tool")]
struct Opts {
    /// Only this network (main, test, regtest, unittest). Defaults to all.
    #[arg(short, long)]
    network: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Search a nonce for the (possibly overridden) genesis header, starting at zero
    #[arg(long)]
    mine: bool,

    /// Override bits (compact representation). Accepts decimal or 0x-prefixed hex.
    #[arg(long)]
    bits: Option<String>,

    /// Override timestamp (seconds)
    #[arg(long)]
    time: Option<u32>,

    /// Maximum nonces to try when mining
    #[arg(long, default_value_t = 100_000_000u64)]
    max_iterations: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenesisReport {
    network: String,
    hash: String,
    merkle_root: String,
    time: u32,
    bits: String,
    nonce: u32,
    coinbase_message: String,
    algorithm: &'static str,
    /// Whether the header matches the hard-coded genesis hash
    verified: bool,
}

fn parse_bits(s: &str) -> anyhow::Result<u32> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.with_context(|| format!("invalid bits '{}'", s))
}

/// Tries nonces from zero until the header hash meets the descriptor's target
fn mine(descriptor: &mut GenesisDescriptor, hasher: &dyn PowHasher, max_iterations: u64) -> anyhow::Result<()> {
    let target = compact_to_target(descriptor.bits).context("bits do not encode a valid target")?;
    let mut header = descriptor.build_block().header;
    let start = Instant::now();

    for nonce in 0..=max_iterations.min(u32::MAX as u64) {
        header.nonce = nonce as u32;
        let hash = header.hash(hasher);
        if hash_meets_target(hash.as_bytes(), target) {
            descriptor.nonce = header.nonce;
            descriptor.expected_hash = hash;
            eprintln!("Found nonce {} in {:.2}s", header.nonce, start.elapsed().as_secs_f64());
            return Ok(());
        }
        if nonce > 0 && nonce % 1_000_000 == 0 {
            let rate = nonce as f64 / start.elapsed().as_secs_f64().max(1e-6);
            eprintln!("Tried {} nonces ({:.2} kH/s)", nonce, rate / 1000.0);
        }
    }

    bail!("no valid nonce within {} iterations", max_iterations)
}

fn report(network: NetworkId, descriptor: &GenesisDescriptor, hasher: &dyn PowHasher) -> GenesisReport {
    let block = descriptor.build_block();
    let hash = block.header.hash(hasher);
    GenesisReport {
        network: network.to_string(),
        hash: hash.to_string(),
        merkle_root: block.header.hash_merkle_root.to_string(),
        time: block.header.time,
        bits: format!("0x{:08x}", block.header.bits),
        nonce: block.header.nonce,
        coinbase_message: descriptor.coinbase_message.to_string(),
        algorithm: hasher.name(),
        verified: descriptor.verify(network, hasher).is_ok(),
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let networks: Vec<NetworkId> = match &opts.network {
        Some(name) => vec![name.parse()?],
        None => NetworkId::iter().collect(),
    };
    let bits = opts.bits.as_deref().map(parse_bits).transpose()?;

    let mut reports = Vec::with_capacity(networks.len());
    for network in networks {
        let params = network_params(network);
        let mut descriptor = params.genesis;
        if let Some(bits) = bits {
            descriptor.bits = bits;
        }
        if let Some(time) = opts.time {
            descriptor.time = time;
        }
        if opts.mine {
            mine(&mut descriptor, params.pow_hasher, opts.max_iterations)?;
        }
        reports.push(report(network, &descriptor, params.pow_hasher));
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for r in &reports {
        println!("[{}]", r.network);
        println!("  Genesis hash: {}", r.hash);
        println!("  Merkle root:  {}", r.merkle_root);
        println!("  Time:         {}", r.time);
        println!("  Bits:         {}", r.bits);
        println!("  Nonce:        {}", r.nonce);
        println!("  Algorithm:    {}", r.algorithm);
        println!("  Coinbase:     {}", r.coinbase_message);
        println!("  Verified:     {}", r.verified);
    }
    Ok(())
}
