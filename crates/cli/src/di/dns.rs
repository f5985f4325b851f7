use ferrous_resolver_application::ports::DnsResolver;
use ferrous_resolver_application::use_cases::{QueryDomainUseCase, TraceDomainUseCase};
use ferrous_resolver_domain::Config;
use ferrous_resolver_infrastructure::dns::{CoreResolver, UdpTransport};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub query: Arc<QueryDomainUseCase>,
    pub trace: Arc<TraceDomainUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let transport = Arc::new(UdpTransport::new(config.resolver.max_response_size));
        let resolver: Arc<dyn DnsResolver> =
            Arc::new(CoreResolver::new(transport, &config.resolver)?);

        info!("DNS services initialized");

        Ok(Self {
            query: Arc::new(QueryDomainUseCase::new(resolver.clone())),
            trace: Arc::new(TraceDomainUseCase::new(resolver)),
        })
    }
}
