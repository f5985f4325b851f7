//! Plain-text rendering of decoded packets and trace results.

use ferrous_resolver_domain::{Message, RecordPayload, ResourceRecord, TraceResult};
use std::fmt::Write;

pub fn render_message(message: &Message) -> String {
    let mut out = String::new();
    let header = &message.header;

    let _ = writeln!(out, "Transaction ID: {}", header.id);
    let _ = writeln!(out, "Flags: {:04X}", header.flags);
    let _ = writeln!(out, "Questions: {}", header.questions);
    let _ = writeln!(out, "Answer RRs: {}", header.answers);
    let _ = writeln!(out, "Authority RRs: {}", header.authorities);
    let _ = writeln!(out, "Additional RRs: {}", header.additionals);

    for question in &message.questions {
        let _ = writeln!(out, "\nQuestion:");
        let _ = writeln!(out, "  Name: {}", question.name);
        let _ = writeln!(out, "  Type: {}", question.record_type);
        let _ = writeln!(out, "  Class: {}", question.class);
    }

    let sections = [
        ("Answer", &message.answers),
        ("Authority", &message.authorities),
        ("Additional", &message.additionals),
    ];
    for (section, records) in sections {
        for record in records.iter() {
            let _ = writeln!(out, "\n{}:", section);
            render_record(&mut out, record);
        }
    }

    out
}

fn render_record(out: &mut String, record: &ResourceRecord) {
    let _ = writeln!(out, "  Name: {}", record.name);
    let _ = writeln!(out, "  Type: {}", record.record_type);
    let _ = writeln!(out, "  Class: {}", record.class);
    let _ = writeln!(out, "  TTL: {}", record.ttl);

    match &record.data {
        RecordPayload::Mx {
            preference,
            exchange,
        } => {
            let _ = writeln!(out, "  Preference: {}", preference);
            let _ = writeln!(out, "  Exchange: {}", exchange);
        }
        RecordPayload::Soa(soa) => {
            let _ = writeln!(out, "  Primary NS: {}", soa.primary_ns);
            let _ = writeln!(out, "  Mailbox: {}", soa.responsible_mailbox);
            let _ = writeln!(out, "  Serial: {}", soa.serial);
            let _ = writeln!(out, "  Refresh: {}", soa.refresh);
            let _ = writeln!(out, "  Retry: {}", soa.retry);
            let _ = writeln!(out, "  Expire: {}", soa.expire);
            let _ = writeln!(out, "  Minimum TTL: {}", soa.minimum);
        }
        RecordPayload::Other(bytes) => {
            let _ = writeln!(out, "  Data: {}", upper_hex(bytes));
        }
        payload => {
            if let Some(text) = payload.text_value() {
                let _ = writeln!(out, "  Data: {}", text);
            }
        }
    }
}

pub fn render_trace(result: &TraceResult) -> String {
    let mut out = String::new();

    for (i, hop) in result.hops.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {} ({})", i + 1, hop.server, hop.source);
    }

    let _ = writeln!(out, "\nFound authoritative answer!");
    for answer in &result.response.answers {
        let _ = writeln!(
            out,
            "Answer: {} {} {}",
            answer.name,
            answer.record_type,
            answer_text(answer)
        );
    }

    out
}

fn answer_text(record: &ResourceRecord) -> String {
    match &record.data {
        RecordPayload::Other(bytes) => upper_hex(bytes),
        RecordPayload::Soa(soa) => format!("{} {}", soa.primary_ns, soa.responsible_mailbox),
        payload => payload.text_value().unwrap_or_default(),
    }
}

fn upper_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02X}", b);
        s
    })
}
