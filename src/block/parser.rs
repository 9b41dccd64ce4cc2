use super::constants::{MIN_MATCH_LENGTH, RUN_MASK};
use super::tokens::{Match, Token};
use crate::bytes::ByteReader;
use crate::error::FormatError;

/// Sequential parser over a compressed stream
///
/// Yields validated tokens: literal runs are checked against the remaining
/// input and every offset is checked against the number of bytes the
/// preceding tokens decode to, so replaying the tokens in order can never
/// index outside the output.
pub struct TokenParser<'a> {
    reader: ByteReader<'a>,
    /// Uncompressed bytes produced by the tokens parsed so far
    decoded: usize,
    /// Set after the first error; the iterator is fused from then on
    failed: bool,
}

impl<'a> TokenParser<'a> {
    pub fn new(compressed: &'a [u8]) -> Self {
        Self { reader: ByteReader::new(compressed), decoded: 0, failed: false }
    }

    /// Uncompressed bytes described by the tokens parsed so far
    pub fn decoded_len(&self) -> usize {
        self.decoded
    }

    /// Position in the compressed input
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Parse the next token, or `None` at the end of the stream
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, FormatError> {
        let Some(header) = self.reader.read_u8() else {
            return Ok(None);
        };

        let match_nibble = (header & 0x0F) as usize;
        let mut literal_len = (header >> 4) as usize;
        if literal_len == RUN_MASK {
            literal_len = literal_len.saturating_add(self.reader.read_length_extension()?);
        }

        let position = self.reader.position();
        let available = self.reader.remaining();
        let literals = self.reader.take(literal_len).ok_or(FormatError::LiteralOutOfBounds {
            position,
            length: literal_len,
            available,
        })?;
        self.decoded += literal_len;

        // Input ends right after the literals: terminal literal-only token
        if self.reader.is_empty() {
            return Ok(Some(Token::literal(literals)));
        }

        let position = self.reader.position();
        let offset = self.reader.read_u16_le().ok_or(FormatError::TruncatedOffset { position })?;
        if offset == 0 || offset as usize > self.decoded {
            return Err(FormatError::InvalidOffset { position, offset, available: self.decoded });
        }

        let mut length = match_nibble + MIN_MATCH_LENGTH;
        if match_nibble == RUN_MASK {
            length = length.saturating_add(self.reader.read_length_extension()?);
        }
        self.decoded = self.decoded.saturating_add(length);

        Ok(Some(Token { literals, copy: Some(Match { offset, length }) }))
    }
}

impl<'a> Iterator for TokenParser<'a> {
    type Item = Result<Token<'a>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
