use super::parser::TokenParser;
use crate::error::Result;

/// Decompress a complete stream.
///
/// Fails with [`crate::Error::Format`] on any structural problem; no partial
/// output is returned in that case.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(compressed.len().saturating_mul(2));
    let mut parser = TokenParser::new(compressed);
    let mut tokens = 0u64;

    while let Some(token) = parser.next_token()? {
        output.extend_from_slice(token.literals);
        if let Some(m) = token.copy {
            copy_match(&mut output, m.offset as usize, m.length);
        }
        tokens += 1;
    }

    log::debug!("decompressed {} -> {} bytes ({} tokens)", compressed.len(), output.len(), tokens);

    Ok(output)
}

/// Size the stream decodes to, without materializing the output
pub fn decompressed_size(compressed: &[u8]) -> Result<usize> {
    let mut parser = TokenParser::new(compressed);
    while parser.next_token()?.is_some() {}
    Ok(parser.decoded_len())
}

/// Append `length` bytes read from `offset` bytes back, one byte at a time
/// so that `offset < length` repeats the most recent `offset` bytes.
///
/// The parser guarantees `1 <= offset <= output.len()`.
fn copy_match(output: &mut Vec<u8>, offset: usize, length: usize) {
    let start = output.len() - offset;
    output.reserve(length);
    for i in 0..length {
        let byte = output[start + i];
        output.push(byte);
    }
}
