//! Fast greedy LZ4-style compressor with a headerless token stream.
//!
//! The stream is a sequence of tokens, each a 4-bit/4-bit header byte,
//! optional length-extension bytes, a literal run and (except for the
//! terminal token) a 2-byte little-endian back-reference offset.

pub mod batch;
pub mod block;
pub mod bytes;
pub mod error;

pub use batch::{BatchConfig, ParallelCompressor};
pub use block::{
    decompressed_size, CompressStats, Compressor, Match, MatchFinder, Token, TokenParser,
    MIN_MATCH_LENGTH, WINDOW_SIZE,
};
pub use error::{Error, FormatError, Result};

/// Compress a buffer with a freshly allocated hash table
pub fn compress(input: &[u8]) -> Vec<u8> {
    Compressor::new().compress(input)
}

/// Decompress a complete stream produced by [`compress`]
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    block::decompress(compressed)
}
