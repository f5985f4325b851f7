#![allow(dead_code)]
use ferrous_resolver_domain::{RecordType, ResolverConfig};
use std::net::Ipv4Addr;

pub const UPSTREAM: &str = "10.0.0.1:53";
pub const ROOT: &str = "198.41.0.4";

pub fn test_config() -> ResolverConfig {
    ResolverConfig {
        upstream: UPSTREAM.to_string(),
        root_servers: vec![ROOT.to_string()],
        ..ResolverConfig::default()
    }
}

/// Uncompressed wire form of `name`.
pub fn wire_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Assembles response datagrams section by section.
///
/// Names are written uncompressed unless a test appends raw bytes itself.
pub struct WireResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<u8>,
    answers: Vec<u8>,
    authorities: Vec<u8>,
    additionals: Vec<u8>,
    counts: [u16; 4],
}

impl WireResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
            counts: [0; 4],
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions.extend_from_slice(&wire_name(name));
        self.questions.extend_from_slice(&record_type.to_u16().to_be_bytes());
        self.questions.extend_from_slice(&1u16.to_be_bytes());
        self.counts[0] += 1;
        self
    }

    pub fn answer_a(mut self, name: &str, ip: Ipv4Addr, ttl: u32) -> Self {
        append_record(&mut self.answers, name, RecordType::A, ttl, &ip.octets());
        self.counts[1] += 1;
        self
    }

    pub fn answer_raw(mut self, name: &str, record_type: RecordType, rdata: &[u8]) -> Self {
        append_record(&mut self.answers, name, record_type, 300, rdata);
        self.counts[1] += 1;
        self
    }

    pub fn authority_ns(mut self, zone: &str, target: &str) -> Self {
        append_record(
            &mut self.authorities,
            zone,
            RecordType::NS,
            172800,
            &wire_name(target),
        );
        self.counts[2] += 1;
        self
    }

    pub fn additional_a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        append_record(&mut self.additionals, name, RecordType::A, 172800, &ip.octets());
        self.counts[3] += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        for count in self.counts {
            out.extend_from_slice(&count.to_be_bytes());
        }
        out.extend_from_slice(&self.questions);
        out.extend_from_slice(&self.answers);
        out.extend_from_slice(&self.authorities);
        out.extend_from_slice(&self.additionals);
        out
    }
}

fn append_record(out: &mut Vec<u8>, name: &str, record_type: RecordType, ttl: u32, rdata: &[u8]) {
    out.extend_from_slice(&wire_name(name));
    out.extend_from_slice(&record_type.to_u16().to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
}
