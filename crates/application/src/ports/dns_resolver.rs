use async_trait::async_trait;
use ferrous_resolver_domain::{DnsQuery, DomainError, Message, TraceResult};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Single exchange with the configured recursive resolver.
    async fn query(&self, query: &DnsQuery) -> Result<Message, DomainError>;

    /// Iterative resolution starting at the root servers.
    async fn trace(&self, query: &DnsQuery) -> Result<TraceResult, DomainError>;
}
