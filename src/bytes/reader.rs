use super::LENGTH_EXTENSION_STEP;
use crate::error::FormatError;

/// Bounds-checked cursor over a compressed byte slice
///
/// Every read checks the remaining length first, so a malformed stream can
/// only ever produce `None` or a `FormatError`, never an out-of-bounds index.
pub struct ByteReader<'a> {
    data: &'a [u8],
    /// Next read position
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether the whole input has been consumed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read a single byte
    #[inline]
    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// Read a 16-bit little-endian value
    pub fn read_u16_le(&mut self) -> Option<u16> {
        let bytes = self.take(2)?;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Borrow the next `n` bytes and advance past them
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Some(slice)
    }

    /// Read a length-extension sequence: any number of 255 bytes terminated
    /// by one byte below 255. Returns the sum of all bytes read.
    pub fn read_length_extension(&mut self) -> Result<usize, FormatError> {
        let start = self.pos;
        let mut total = 0usize;
        loop {
            let byte = self.read_u8().ok_or(FormatError::TruncatedLength { position: start })?;
            total = total.saturating_add(byte as usize);
            if byte != LENGTH_EXTENSION_STEP {
                return Ok(total);
            }
        }
    }
}
