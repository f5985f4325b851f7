#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_resolver_application::ports::DnsResolver;
use ferrous_resolver_domain::{DnsQuery, DomainError, Message, RecordType, TraceResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Key = (String, RecordType);

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    messages: Arc<RwLock<HashMap<Key, Message>>>,
    traces: Arc<RwLock<HashMap<Key, TraceResult>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<RwLock<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_message(&self, domain: &str, record_type: RecordType, message: Message) {
        self.messages
            .write()
            .await
            .insert((domain.to_string(), record_type), message);
    }

    pub async fn set_trace(&self, domain: &str, record_type: RecordType, result: TraceResult) {
        self.traces
            .write()
            .await
            .insert((domain.to_string(), record_type), result);
    }

    pub async fn set_error(&self, domain: &str, error: DomainError) {
        self.errors.write().await.insert(domain.to_string(), error);
    }

    pub async fn calls(&self) -> Vec<DnsQuery> {
        self.calls.read().await.clone()
    }

    async fn record_call(&self, query: &DnsQuery) -> Option<DomainError> {
        self.calls.write().await.push(query.clone());
        self.errors.read().await.get(&*query.domain).cloned()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn query(&self, query: &DnsQuery) -> Result<Message, DomainError> {
        if let Some(error) = self.record_call(query).await {
            return Err(error);
        }
        self.messages
            .read()
            .await
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .ok_or_else(|| DomainError::NoResponse {
                server: "mock".to_string(),
            })
    }

    async fn trace(&self, query: &DnsQuery) -> Result<TraceResult, DomainError> {
        if let Some(error) = self.record_call(query).await {
            return Err(error);
        }
        self.traces
            .read()
            .await
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .ok_or(DomainError::NoNameserverAvailable)
    }
}
