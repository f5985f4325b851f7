//! Iterative resolution from the root servers.

use super::core::CoreResolver;
use super::referral::{select_next_nameserver, NextNameserver};
use ferrous_resolver_domain::{
    DomainError, HopSource, RecordType, TraceHop, TraceResult, DNS_PORT,
};
use std::collections::HashSet;
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, info};

/// Per-trace bookkeeping. Never shared between traces.
struct TraceState {
    visited: HashSet<IpAddr>,
    remaining: usize,
    hops: Vec<TraceHop>,
}

impl TraceState {
    fn new(budget: usize) -> Self {
        Self {
            visited: HashSet::new(),
            remaining: budget,
            hops: Vec::new(),
        }
    }
}

impl CoreResolver {
    /// Walks referrals from the first root server until a response carries
    /// answers. Every nameserver is queried at most once per trace.
    pub async fn trace_domain(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<TraceResult, DomainError> {
        let mut state = TraceState::new(self.max_referrals);
        let mut server = *self
            .root_servers
            .first()
            .ok_or(DomainError::NoNameserverAvailable)?;
        let mut source = HopSource::Root;

        loop {
            if !state.visited.insert(server.ip()) {
                return Err(DomainError::CircularReferral(server.ip().to_string()));
            }

            debug!(
                server = %server,
                via = %source,
                domain = %domain,
                record_type = %record_type,
                "Querying nameserver"
            );
            state.hops.push(TraceHop {
                server: server.ip(),
                source,
            });

            let response = self.query_server(server, domain, record_type).await?;

            if response.has_answers() {
                info!(
                    server = %server,
                    domain = %domain,
                    answers = response.answers.len(),
                    "Found answer"
                );
                return Ok(TraceResult {
                    response,
                    hops: state.hops,
                });
            }

            let (address, next_source) = match select_next_nameserver(&response) {
                NextNameserver::Glue { ns, address } => {
                    debug!(nameserver = %ns, address = %address, "Following glue");
                    (address, HopSource::Glue { ns: ns.to_string() })
                }
                NextNameserver::Unresolved { ns } => {
                    debug!(nameserver = %ns, "No glue, resolving nameserver");
                    let address = self.resolve_nameserver(ns).await?;
                    (address, HopSource::Resolved { ns: ns.to_string() })
                }
                NextNameserver::None => return Err(DomainError::NoNameserverAvailable),
            };

            state.remaining = state.remaining.saturating_sub(1);
            if state.remaining == 0 {
                return Err(DomainError::ReferralLimitExceeded(self.max_referrals));
            }

            server = SocketAddr::new(IpAddr::V4(address), DNS_PORT);
            source = next_source;
        }
    }
}
