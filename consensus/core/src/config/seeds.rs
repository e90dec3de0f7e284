use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, Ipv6Addr, SocketAddr},
    time::{SystemTime, UNIX_EPOCH},
};

/// Seconds in one week
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// A DNS seeder: a display name and the host name to resolve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

/// Compiled-in fixed seed endpoint: IPv6 (or IPv4-mapped) address and port
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn new(addr: [u8; 16], port: u16) -> Self {
        Self { addr, port }
    }

    /// IPv4 endpoint stored as an IPv4-mapped IPv6 address
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let [a, b, c, d] = octets;
        Self { addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d], port }
    }
}

/// Peer record handed to the address manager
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerAddress {
    pub ip: Ipv6Addr,
    pub port: u16,
    /// UNIX timestamp the peer was last seen at
    pub last_seen: i64,
}

impl PeerAddress {
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Turns the fixed seed list into peer records that look one to two weeks old,
/// so the address manager prefers fresher peers learned from the network.
pub fn convert_seed6<R: Rng + ?Sized>(specs: &[SeedSpec6], now: i64, rng: &mut R) -> Vec<PeerAddress> {
    specs
        .iter()
        .map(|spec| PeerAddress {
            ip: Ipv6Addr::from(spec.addr),
            port: spec.port,
            last_seen: now - ONE_WEEK - rng.gen_range(0..ONE_WEEK),
        })
        .collect()
}

/// Current UNIX time in seconds, zero if the clock is before the epoch
pub fn unix_now() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64).unwrap_or_default()
}
