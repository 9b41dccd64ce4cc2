use super::constants::MIN_MATCH_LENGTH;
use super::encoder::encode_token;
use super::match_finder::MatchFinder;
use crate::bytes::ByteWriter;

/// Statistics from a single compression call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// Tokens written, including the terminal literal-only token
    pub tokens: u64,
    /// Tokens that carry a back-reference
    pub matches: u64,
    /// Bytes emitted verbatim
    pub literal_bytes: u64,
    /// Bytes covered by back-references
    pub matched_bytes: u64,
}

impl CompressStats {
    /// Output size as a fraction of input size (0.0 for empty input)
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// Greedy single-pass compressor
///
/// Owns its hash table; the table is cleared at the start of every call, so
/// one `Compressor` can be reused for unrelated inputs.
pub struct Compressor {
    finder: MatchFinder,
}

impl Compressor {
    pub fn new() -> Self {
        Self { finder: MatchFinder::new() }
    }

    /// Compress `input` into a fresh buffer
    pub fn compress(&mut self, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(input.len() / 2 + 16);
        self.compress_into(input, &mut output);
        output
    }

    /// Compress `input`, appending the stream to `output`
    pub fn compress_into(&mut self, input: &[u8], output: &mut Vec<u8>) -> CompressStats {
        self.finder.reset();

        let start_len = output.len();
        let mut writer = ByteWriter::from_vec(std::mem::take(output));
        let mut stats = CompressStats { input_bytes: input.len() as u64, ..Default::default() };

        // Pending literals are always input[literal_start..pos]
        let mut literal_start = 0;
        let mut pos = 0;

        while pos < input.len() {
            let window_start = MatchFinder::window_start(pos);
            let found = if pos + MIN_MATCH_LENGTH <= input.len() {
                self.finder.find(input, pos, window_start)
            } else {
                None
            };

            match found {
                Some((match_pos, match_len)) => {
                    let distance = pos - match_pos;
                    debug_assert!(distance <= u16::MAX as usize);
                    let literals = &input[literal_start..pos];
                    encode_token(&mut writer, literals, match_len, distance as u16);

                    stats.tokens += 1;
                    stats.matches += 1;
                    stats.literal_bytes += literals.len() as u64;
                    stats.matched_bytes += match_len as u64;

                    pos += match_len;
                    literal_start = pos;
                }
                None => pos += 1,
            }
        }

        if literal_start < input.len() {
            let literals = &input[literal_start..];
            log::trace!("flushing {} trailing literals", literals.len());
            encode_token(&mut writer, literals, 0, 0);
            stats.tokens += 1;
            stats.literal_bytes += literals.len() as u64;
        }

        *output = writer.finish();
        stats.output_bytes = (output.len() - start_len) as u64;

        log::debug!(
            "compressed {} -> {} bytes ({} tokens, {} matches)",
            stats.input_bytes,
            stats.output_bytes,
            stats.tokens,
            stats.matches
        );

        stats
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}
