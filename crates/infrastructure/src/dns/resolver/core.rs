use crate::dns::codec::{MessageBuilder, ResponseParser};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_resolver_application::ports::DnsResolver;
use ferrous_resolver_domain::{
    DnsQuery, DomainError, Message, RecordType, ResolverConfig, TraceResult,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct CoreResolver {
    transport: Arc<dyn DnsTransport>,
    upstream: SocketAddr,
    pub(super) root_servers: Vec<SocketAddr>,
    pub(super) max_referrals: usize,
    query_timeout: Option<Duration>,
}

impl CoreResolver {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        config: &ResolverConfig,
    ) -> Result<Self, DomainError> {
        let upstream = config.upstream_addr()?;
        let root_servers = config.root_addrs()?;
        if root_servers.is_empty() {
            return Err(DomainError::NoNameserverAvailable);
        }

        info!(
            upstream = %upstream,
            roots = root_servers.len(),
            max_referrals = config.max_referrals,
            timeout_ms = ?config.query_timeout_ms,
            protocol = transport.protocol_name(),
            "Core DNS resolver created"
        );

        Ok(Self {
            transport,
            upstream,
            root_servers,
            max_referrals: config.max_referrals,
            query_timeout: config.query_timeout(),
        })
    }

    /// One exchange with `server`: encode, send, decode.
    pub async fn query_server(
        &self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        let (id, request) = MessageBuilder::build_query_with_id(domain, record_type)?;

        debug!(
            server = %server,
            domain = %domain,
            record_type = %record_type,
            id = id,
            "Sending DNS query"
        );

        let response = self
            .transport
            .send(server, &request, self.query_timeout)
            .await?;

        if response.bytes.is_empty() {
            return Err(DomainError::NoResponse {
                server: server.to_string(),
            });
        }

        let message = ResponseParser::parse(&response.bytes)?;

        if message.header.id != id {
            warn!(
                server = %server,
                expected = id,
                received = message.header.id,
                "Transaction id mismatch in DNS response"
            );
        }

        Ok(message)
    }

    /// Single query against the configured upstream resolver.
    pub async fn query_direct(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        self.query_server(self.upstream, domain, record_type).await
    }

    /// Looks up the IPv4 address of a nameserver that came without glue.
    pub(super) async fn resolve_nameserver(&self, ns: &str) -> Result<Ipv4Addr, DomainError> {
        let response = self.query_direct(ns, RecordType::A).await?;

        let address = response
            .first_answer_of(RecordType::A)
            .and_then(|record| record.ipv4())
            .ok_or_else(|| DomainError::NameserverResolutionFailed(ns.to_string()))?;

        debug!(nameserver = %ns, address = %address, "Nameserver resolved");
        Ok(address)
    }
}

#[async_trait]
impl DnsResolver for CoreResolver {
    async fn query(&self, query: &DnsQuery) -> Result<Message, DomainError> {
        self.query_direct(&query.domain, query.record_type).await
    }

    async fn trace(&self, query: &DnsQuery) -> Result<TraceResult, DomainError> {
        self.trace_domain(&query.domain, query.record_type).await
    }
}
