use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// IPv4 addresses of the thirteen IANA root servers, a through m.
pub const ROOT_SERVERS: [&str; 13] = [
    "198.41.0.4",     // a.root-servers.net (Verisign)
    "199.9.14.201",   // b.root-servers.net (USC-ISI)
    "192.33.4.12",    // c.root-servers.net (Cogent)
    "199.7.91.13",    // d.root-servers.net (University of Maryland)
    "192.203.230.10", // e.root-servers.net (NASA)
    "192.5.5.241",    // f.root-servers.net (ISC)
    "192.112.36.4",   // g.root-servers.net (US DoD)
    "198.97.190.53",  // h.root-servers.net (US Army Research Lab)
    "192.36.148.17",  // i.root-servers.net (Netnod)
    "192.58.128.30",  // j.root-servers.net (Verisign)
    "193.0.14.129",   // k.root-servers.net (RIPE NCC)
    "199.7.83.42",    // l.root-servers.net (ICANN)
    "202.12.27.33",   // m.root-servers.net (WIDE Project)
];

pub const DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Recursive resolver used for direct queries and nameserver lookups.
    #[serde(default = "default_upstream")]
    pub upstream: String,

    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    #[serde(default = "default_max_referrals")]
    pub max_referrals: usize,

    /// Receive deadline per query. Unset means wait indefinitely.
    #[serde(default)]
    pub query_timeout_ms: Option<u64>,

    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            root_servers: default_root_servers(),
            max_referrals: default_max_referrals(),
            query_timeout_ms: None,
            max_response_size: default_max_response_size(),
        }
    }
}

impl ResolverConfig {
    /// Parses `upstream` as `IP:PORT`, or a bare IP on port 53.
    pub fn upstream_addr(&self) -> Result<SocketAddr, DomainError> {
        parse_server_addr(&self.upstream)
            .ok_or_else(|| DomainError::InvalidServerAddress(self.upstream.clone()))
    }

    /// Root servers in configured order. The first unparsable entry fails.
    pub fn root_addrs(&self) -> Result<Vec<SocketAddr>, DomainError> {
        self.root_servers
            .iter()
            .map(|s| {
                parse_server_addr(s).ok_or_else(|| DomainError::InvalidServerAddress(s.clone()))
            })
            .collect()
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_ms.map(Duration::from_millis)
    }
}

pub fn parse_server_addr(s: &str) -> Option<SocketAddr> {
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Some(addr);
    }
    s.parse::<IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
}

fn default_upstream() -> String {
    "8.8.8.8:53".to_string()
}

fn default_root_servers() -> Vec<String> {
    ROOT_SERVERS.iter().map(|s| s.to_string()).collect()
}

fn default_max_referrals() -> usize {
    10
}

fn default_max_response_size() -> usize {
    4096
}
