use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub primary_ns: String,

    pub responsible_mailbox: String,

    pub serial: u32,

    pub refresh: i32,

    pub retry: i32,

    pub expire: i32,

    pub minimum: u32,
}

/// Decoded RDATA, one variant per record kind the codec understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordPayload {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
    Cname(String),
    Ptr(String),
    Mx { preference: u16, exchange: String },
    Soa(SoaData),
    /// Raw RDATA for every other type, TXT included.
    Other(Vec<u8>),
}

impl RecordPayload {
    /// Address text or target name, for the payloads that have one.
    pub fn text_value(&self) -> Option<String> {
        match self {
            RecordPayload::A(addr) => Some(addr.to_string()),
            RecordPayload::Aaaa(addr) => Some(addr.to_string()),
            RecordPayload::Ns(name) | RecordPayload::Cname(name) | RecordPayload::Ptr(name) => {
                Some(name.clone())
            }
            RecordPayload::Mx { exchange, .. } => Some(exchange.clone()),
            RecordPayload::Soa(_) | RecordPayload::Other(_) => None,
        }
    }

    pub fn raw_data(&self) -> Option<&[u8]> {
        match self {
            RecordPayload::Other(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: RecordType,

    pub class: u16,

    pub ttl: u32,

    pub data_length: u16,

    pub data: RecordPayload,
}

impl ResourceRecord {
    /// Target hostname of an NS record.
    pub fn ns_target(&self) -> Option<&str> {
        match &self.data {
            RecordPayload::Ns(name) if self.record_type == RecordType::NS => {
                Some(name.as_str())
            }
            _ => None,
        }
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.data {
            RecordPayload::A(addr) => Some(addr),
            _ => None,
        }
    }
}
