use crate::dns_record::{RecordType, ResourceRecord};

const FLAG_RESPONSE: u16 = 0x8000;
const FLAG_AUTHORITATIVE: u16 = 0x0400;
const FLAG_TRUNCATED: u16 = 0x0200;
const FLAG_RECURSION_DESIRED: u16 = 0x0100;
const FLAG_RECURSION_AVAILABLE: u16 = 0x0080;
const RCODE_MASK: u16 = 0x000F;

/// Fixed 12-byte DNS header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub questions: u16,
    pub answers: u16,
    pub authorities: u16,
    pub additionals: u16,
}

impl Header {
    pub fn is_response(&self) -> bool {
        self.flags & FLAG_RESPONSE != 0
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & FLAG_AUTHORITATIVE != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TRUNCATED != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RECURSION_DESIRED != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RECURSION_AVAILABLE != 0
    }

    pub fn response_code(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub record_type: RecordType,
    pub class: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    /// NS records of the authority section, in wire order.
    pub fn authority_nameservers(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.authorities
            .iter()
            .filter(|record| record.record_type == RecordType::NS)
    }

    /// First `A` record of the additional section owned by `name`.
    pub fn glue_for(&self, name: &str) -> Option<&ResourceRecord> {
        self.additionals
            .iter()
            .find(|record| record.record_type == RecordType::A && record.name == name)
    }

    pub fn first_answer_of(&self, record_type: RecordType) -> Option<&ResourceRecord> {
        self.answers
            .iter()
            .find(|record| record.record_type == record_type)
    }
}
