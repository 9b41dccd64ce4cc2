//! The LZ4-style block codec: match finder, token encoder, compressor and
//! the token parser / decompressor that reverses it.

pub mod compressor;
pub mod constants;
pub mod decompressor;
pub mod encoder;
pub mod match_finder;
pub mod parser;
pub mod tokens;

pub use compressor::{CompressStats, Compressor};
pub use constants::*;
pub use decompressor::{decompress, decompressed_size};
pub use encoder::encode_token;
pub use match_finder::MatchFinder;
pub use parser::TokenParser;
pub use tokens::{Match, Token};
