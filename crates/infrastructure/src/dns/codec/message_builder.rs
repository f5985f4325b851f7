//! DNS Message Builder
//!
//! Encodes single-question queries in wire format (RFC 1035 §4.1).

use super::name::MAX_LABEL_LEN;
use super::reverse::reverse_lookup_name;
use ferrous_resolver_domain::{DomainError, RecordType};

const FLAG_RECURSION_DESIRED: u16 = 0x0100;
const CLASS_IN: u16 = 1;
const HEADER_LEN: usize = 12;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random transaction id.
    ///
    /// PTR queries take an IP literal and are rewritten to the matching
    /// `in-addr.arpa` / `ip6.arpa` name before encoding.
    pub fn build_query(domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(domain, record_type).map(|(_, bytes)| bytes)
    }

    /// Build a query and return the transaction id alongside the bytes.
    pub fn build_query_with_id(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::encode_query(id, domain, record_type)?;
        Ok((id, bytes))
    }

    /// Encode a query with a caller-chosen transaction id.
    pub fn encode_query(
        id: u16,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<u8>, DomainError> {
        let name = if record_type == RecordType::PTR {
            reverse_lookup_name(domain)?
        } else {
            domain.to_string()
        };

        let mut buf = Vec::with_capacity(HEADER_LEN + name.len() + 6);

        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&FLAG_RECURSION_DESIRED.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes()); // questions
        buf.extend_from_slice(&0u16.to_be_bytes()); // answers
        buf.extend_from_slice(&0u16.to_be_bytes()); // authority
        buf.extend_from_slice(&0u16.to_be_bytes()); // additional

        encode_name(&mut buf, &name)?;

        buf.extend_from_slice(&record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok(buf)
    }
}

/// Appends `name` as length-prefixed labels plus the zero terminator.
fn encode_name(buf: &mut Vec<u8>, name: &str) -> Result<(), DomainError> {
    let name = name.strip_suffix('.').unwrap_or(name);

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN as usize {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            if !label.is_ascii() {
                return Err(DomainError::InvalidDomainName(format!(
                    "non-ASCII label '{}'",
                    label
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }

    buf.push(0);
    Ok(())
}
