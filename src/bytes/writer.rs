use super::LENGTH_EXTENSION_STEP;

/// Byte-level writer for the compressed token stream
pub struct ByteWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self { output: Vec::new() }
    }

    /// Continue writing at the end of an existing buffer
    pub fn from_vec(output: Vec<u8>) -> Self {
        Self { output }
    }

    /// Write a single byte
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }

    /// Write a 16-bit value in little-endian
    pub fn write_u16_le(&mut self, value: u16) {
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    /// Write raw bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }

    /// Write `len` as a length-extension sequence: one 255 byte per full 255,
    /// then the remainder (0-254)
    pub fn write_length_extension(&mut self, mut len: usize) {
        let step = LENGTH_EXTENSION_STEP as usize;
        while len >= step {
            self.output.push(LENGTH_EXTENSION_STEP);
            len -= step;
        }
        self.output.push(len as u8);
    }

    /// Finish and return the output bytes
    pub fn finish(self) -> Vec<u8> {
        self.output
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}
