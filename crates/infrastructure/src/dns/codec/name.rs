//! Domain name decoding with compression pointers (RFC 1035 §4.1.4).

use super::wire_reader::WireReader;
use ferrous_resolver_domain::DomainError;
use std::collections::HashSet;

pub(crate) const MAX_LABEL_LEN: u8 = 63;

/// A name decode aborts once this many pointers have been followed.
pub(crate) const MAX_POINTER_JUMPS: usize = 10;

const POINTER_MASK: u8 = 0xC0;

/// Loop protection for one top-level name decode.
///
/// Never shared between sibling names: each record owner, RDATA name, or
/// question name starts from a fresh guard.
#[derive(Debug, Default)]
struct NameGuard {
    visited: HashSet<usize>,
}

/// Reads a name at the reader's position. On return the reader sits right
/// after the name's last in-place byte (the terminating zero, or the second
/// byte of the pointer that ended it).
pub(crate) fn read_name(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    let mut guard = NameGuard::default();
    let mut labels = Vec::new();
    read_labels(reader, &mut guard, &mut labels, 0)?;
    Ok(labels.join("."))
}

fn read_labels(
    reader: &mut WireReader<'_>,
    guard: &mut NameGuard,
    labels: &mut Vec<String>,
    jumps: usize,
) -> Result<(), DomainError> {
    loop {
        let offset = reader.position();
        let len = reader.read_u8()?;

        if len == 0 {
            return Ok(());
        }

        if len & POINTER_MASK == POINTER_MASK {
            let low = reader.read_u8()?;
            let target = (((len & !POINTER_MASK) as usize) << 8) | low as usize;

            if !guard.visited.insert(target) {
                return Err(DomainError::CompressionLoop { offset });
            }
            let depth = jumps + 1;
            if depth >= MAX_POINTER_JUMPS {
                return Err(DomainError::CompressionLoop { offset });
            }

            let resume = reader.position();
            reader.seek(target)?;
            read_labels(reader, guard, labels, depth)?;
            reader.seek(resume)?;
            return Ok(());
        }

        if len > MAX_LABEL_LEN {
            return Err(DomainError::MalformedMessage(format!(
                "invalid label length {} at offset {}",
                len, offset
            )));
        }

        let bytes = reader.read_bytes(len as usize)?;
        labels.push(ascii_label(bytes));
    }
}

fn ascii_label(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}
