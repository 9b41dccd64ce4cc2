use super::constants::{MIN_MATCH_LENGTH, RUN_MASK};
use super::tokens::Token;
use crate::bytes::ByteWriter;

/// Serialize one token: header byte, literal length extension, literals,
/// then (for `match_len >= MIN_MATCH_LENGTH`) the little-endian offset and
/// the match length extension.
///
/// A `match_len` below `MIN_MATCH_LENGTH` (normally 0) writes a literal-only
/// token without an offset field.
pub fn encode_token(out: &mut ByteWriter, literals: &[u8], match_len: usize, offset: u16) {
    let literal_len = literals.len();
    let has_match = match_len >= MIN_MATCH_LENGTH;

    let literal_nibble = literal_len.min(RUN_MASK) as u8;
    let match_nibble =
        if has_match { (match_len - MIN_MATCH_LENGTH).min(RUN_MASK) as u8 } else { 0 };
    out.write_byte((literal_nibble << 4) | match_nibble);

    if literal_len >= RUN_MASK {
        out.write_length_extension(literal_len - RUN_MASK);
    }
    out.write_bytes(literals);

    if has_match {
        out.write_u16_le(offset);
        if match_len - MIN_MATCH_LENGTH >= RUN_MASK {
            out.write_length_extension(match_len - MIN_MATCH_LENGTH - RUN_MASK);
        }
    }
}

impl Token<'_> {
    /// Serialize this token
    pub fn encode(&self, out: &mut ByteWriter) {
        match self.copy {
            Some(m) => encode_token(out, self.literals, m.length, m.offset),
            None => encode_token(out, self.literals, 0, 0),
        }
    }
}
