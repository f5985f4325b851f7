//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Each exchange binds its own
//! ephemeral socket, so concurrent queries never share receive state.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_resolver_domain::DomainError;
use std::future::Future;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Default receive buffer, large enough for EDNS(0)-sized replies
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    max_response_size: usize,
}

impl UdpTransport {
    pub fn new(max_response_size: usize) -> Self {
        Self { max_response_size }
    }

    pub fn max_response_size(&self) -> usize {
        self.max_response_size
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESPONSE_SIZE)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Option<Duration>,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| transport_error(server, "bind", e))?;

        let bytes_sent = within(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| no_response(server))?
            .map_err(|e| transport_error(server, "send", e))?;

        debug!(
            server = %server,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; self.max_response_size];

        let (bytes_received, from_addr) = within(timeout, socket.recv_from(&mut recv_buf))
            .await
            .map_err(|_| no_response(server))?
            .map_err(|e| transport_error(server, "receive", e))?;

        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

async fn within<F: Future>(
    timeout: Option<Duration>,
    fut: F,
) -> Result<F::Output, tokio::time::error::Elapsed> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut).await,
        None => Ok(fut.await),
    }
}

fn no_response(server: SocketAddr) -> DomainError {
    DomainError::NoResponse {
        server: server.to_string(),
    }
}

fn transport_error(server: SocketAddr, stage: &str, e: std::io::Error) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason: format!("UDP {} failed: {}", stage, e),
    }
}
