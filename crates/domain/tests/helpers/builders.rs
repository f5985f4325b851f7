#![allow(dead_code)]
use ferrous_resolver_domain::{RecordPayload, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

pub struct ResourceRecordBuilder {
    name: String,
    record_type: RecordType,
    ttl: u32,
    data: RecordPayload,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            record_type: RecordType::A,
            ttl: 300,
            data: RecordPayload::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn a(mut self, addr: &str) -> Self {
        self.record_type = RecordType::A;
        self.data = RecordPayload::A(addr.parse().unwrap());
        self
    }

    pub fn ns(mut self, target: &str) -> Self {
        self.record_type = RecordType::NS;
        self.data = RecordPayload::Ns(target.to_string());
        self
    }

    pub fn raw(mut self, code: u16, bytes: &[u8]) -> Self {
        self.record_type = RecordType::from_u16(code);
        self.data = RecordPayload::Other(bytes.to_vec());
        self
    }

    pub fn build(self) -> ResourceRecord {
        let data_length = match &self.data {
            RecordPayload::A(_) => 4,
            RecordPayload::Aaaa(_) => 16,
            RecordPayload::Other(bytes) => bytes.len() as u16,
            _ => 0,
        };
        ResourceRecord {
            name: self.name,
            record_type: self.record_type,
            class: 1,
            ttl: self.ttl,
            data_length,
            data: self.data,
        }
    }
}
