//! DNS Response Parser
//!
//! Decodes a received datagram into the domain `Message` model. The input is
//! untrusted: every read is bounds-checked, compression pointers are loop
//! guarded, and any failure rejects the whole message.

use super::name::read_name;
use super::wire_reader::WireReader;
use ferrous_resolver_domain::{
    DomainError, Header, Message, Question, RecordPayload, RecordType, ResourceRecord, SoaData,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let mut reader = WireReader::new(response_bytes);

        let header = parse_header(&mut reader)?;

        let questions = (0..header.questions)
            .map(|_| parse_question(&mut reader))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = parse_records(&mut reader, header.answers)?;
        let authorities = parse_records(&mut reader, header.authorities)?;
        let additionals = parse_records(&mut reader, header.additionals)?;

        debug!(
            id = header.id,
            flags = header.flags,
            answers = answers.len(),
            authority = authorities.len(),
            additional = additionals.len(),
            bytes = response_bytes.len(),
            "DNS response parsed"
        );

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}

fn parse_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
    Ok(Header {
        id: reader.read_u16()?,
        flags: reader.read_u16()?,
        questions: reader.read_u16()?,
        answers: reader.read_u16()?,
        authorities: reader.read_u16()?,
        additionals: reader.read_u16()?,
    })
}

fn parse_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
    Ok(Question {
        name: read_name(reader)?,
        record_type: RecordType::from_u16(reader.read_u16()?),
        class: reader.read_u16()?,
    })
}

fn parse_records(
    reader: &mut WireReader<'_>,
    count: u16,
) -> Result<Vec<ResourceRecord>, DomainError> {
    let mut records = Vec::with_capacity(count.min(64) as usize);
    for _ in 0..count {
        records.push(parse_record(reader)?);
    }
    Ok(records)
}

fn parse_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, DomainError> {
    let name = read_name(reader)?;
    let record_type = RecordType::from_u16(reader.read_u16()?);
    let class = reader.read_u16()?;
    let ttl = reader.read_u32()?;
    let data_length = reader.read_u16()?;

    let data_start = reader.position();
    let data_end = data_start + data_length as usize;
    if data_end > reader.len() {
        return Err(DomainError::MalformedMessage(format!(
            "{} record '{}' declares {} bytes of data at offset {}, message is {} bytes",
            record_type,
            name,
            data_length,
            data_start,
            reader.len()
        )));
    }

    let data = parse_payload(reader, record_type, data_length)?;

    // Compressed names inside RDATA need not consume exactly `data_length`
    // bytes; the next record always starts at the declared boundary.
    reader.seek(data_end)?;

    Ok(ResourceRecord {
        name,
        record_type,
        class,
        ttl,
        data_length,
        data,
    })
}

fn parse_payload(
    reader: &mut WireReader<'_>,
    record_type: RecordType,
    data_length: u16,
) -> Result<RecordPayload, DomainError> {
    Ok(match record_type {
        RecordType::A => {
            if data_length != 4 {
                return Err(DomainError::MalformedMessage(format!(
                    "A record data must be 4 bytes, got {}",
                    data_length
                )));
            }
            let b = reader.read_bytes(4)?;
            RecordPayload::A(Ipv4Addr::new(b[0], b[1], b[2], b[3]))
        }
        RecordType::AAAA => {
            if data_length != 16 {
                return Err(DomainError::MalformedMessage(format!(
                    "AAAA record data must be 16 bytes, got {}",
                    data_length
                )));
            }
            let mut octets = [0u8; 16];
            octets.copy_from_slice(reader.read_bytes(16)?);
            RecordPayload::Aaaa(Ipv6Addr::from(octets))
        }
        RecordType::NS => RecordPayload::Ns(read_name(reader)?),
        RecordType::CNAME => RecordPayload::Cname(read_name(reader)?),
        RecordType::PTR => RecordPayload::Ptr(read_name(reader)?),
        RecordType::MX => RecordPayload::Mx {
            preference: reader.read_u16()?,
            exchange: read_name(reader)?,
        },
        RecordType::SOA => RecordPayload::Soa(SoaData {
            primary_ns: read_name(reader)?,
            responsible_mailbox: read_name(reader)?,
            serial: reader.read_u32()?,
            refresh: reader.read_u32()? as i32,
            retry: reader.read_u32()? as i32,
            expire: reader.read_u32()? as i32,
            minimum: reader.read_u32()?,
        }),
        RecordType::TXT | RecordType::Unknown(_) => {
            RecordPayload::Other(reader.read_bytes(data_length as usize)?.to_vec())
        }
    })
}
