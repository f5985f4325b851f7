use ferrous_resolver_domain::DomainError;

/// Bounds-checked big-endian cursor over one received datagram.
///
/// Every read either advances by exactly its width or fails with
/// `MalformedMessage`; the position never moves past the end of the buffer.
#[derive(Debug, Clone)]
pub(crate) struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn seek(&mut self, pos: usize) -> Result<(), DomainError> {
        if pos > self.buf.len() {
            return Err(DomainError::MalformedMessage(format!(
                "offset {} beyond end of {}-byte message",
                pos,
                self.buf.len()
            )));
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, DomainError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or_else(|| self.unexpected_end(1))?;
        self.pos += 1;
        Ok(byte)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| self.unexpected_end(len))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn unexpected_end(&self, wanted: usize) -> DomainError {
        DomainError::MalformedMessage(format!(
            "unexpected end of data: needed {} byte(s) at offset {}, message is {} bytes",
            wanted,
            self.pos,
            self.buf.len()
        ))
    }
}
