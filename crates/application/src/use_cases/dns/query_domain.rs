use crate::ports::DnsResolver;
use ferrous_resolver_domain::{DnsQuery, DomainError, Message, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

pub struct QueryDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl QueryDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        let start = Instant::now();
        let query = DnsQuery::new(domain, record_type);

        match self.resolver.query(&query).await {
            Ok(message) => {
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    answers = message.answers.len(),
                    authoritative = message.header.is_authoritative(),
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "Direct query completed"
                );
                Ok(message)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    domain = %query.domain,
                    record_type = %query.record_type,
                    "Direct query failed"
                );
                Err(e)
            }
        }
    }
}
