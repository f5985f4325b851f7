use crate::ports::DnsResolver;
use ferrous_resolver_domain::{DnsQuery, DomainError, RecordType, TraceResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct TraceDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl TraceDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<TraceResult, DomainError> {
        let start = Instant::now();
        let query = DnsQuery::new(domain, record_type);

        info!(
            domain = %query.domain,
            record_type = %query.record_type,
            "Tracing DNS resolution"
        );

        match self.resolver.trace(&query).await {
            Ok(result) => {
                info!(
                    domain = %query.domain,
                    referrals = result.referrals(),
                    answers = result.response.answers.len(),
                    answered_by = ?result.answering_server(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Found authoritative answer"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    domain = %query.domain,
                    record_type = %query.record_type,
                    "Trace failed"
                );
                Err(e)
            }
        }
    }
}
