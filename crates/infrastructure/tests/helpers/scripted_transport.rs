#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_resolver_domain::DomainError;
use ferrous_resolver_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::sync::RwLock;

/// In-memory transport answering from a fixed table keyed by server address.
///
/// The request's transaction id is copied into every canned reply so the
/// resolver sees matching ids. Unknown servers fail like an unreachable host.
pub struct ScriptedTransport {
    responses: RwLock<HashMap<IpAddr, Vec<u8>>>,
    calls: RwLock<Vec<IpAddr>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn respond(&self, server: &str, bytes: Vec<u8>) {
        let ip: IpAddr = server.parse().unwrap();
        self.responses.write().await.insert(ip, bytes);
    }

    pub async fn calls(&self) -> Vec<IpAddr> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        _timeout: Option<Duration>,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.write().await.push(server.ip());

        let mut bytes = self
            .responses
            .read()
            .await
            .get(&server.ip())
            .cloned()
            .ok_or_else(|| DomainError::Transport {
                server: server.to_string(),
                reason: "no scripted response".to_string(),
            })?;

        if bytes.len() >= 2 && message_bytes.len() >= 2 {
            bytes[..2].copy_from_slice(&message_bytes[..2]);
        }

        Ok(TransportResponse {
            bytes,
            protocol_used: "SCRIPTED",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}
