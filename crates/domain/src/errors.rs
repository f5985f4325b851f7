use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Compression loop detected at offset {offset}")]
    CompressionLoop { offset: usize },

    #[error("No response received from {server}")]
    NoResponse { server: String },

    #[error("Invalid reverse lookup input: {0}")]
    InvalidReverseLookupInput(String),

    #[error("No valid nameserver found to continue resolution")]
    NoNameserverAvailable,

    #[error("Failed to resolve nameserver {0}")]
    NameserverResolutionFailed(String),

    #[error("Circular referral detected at nameserver {0}")]
    CircularReferral(String),

    #[error("Maximum referral limit reached ({0})")]
    ReferralLimitExceeded(usize),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },
}

impl DomainError {
    /// Errors raised while decoding a received datagram.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedMessage(_) | DomainError::CompressionLoop { .. }
        )
    }
}
