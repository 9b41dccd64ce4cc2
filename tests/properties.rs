//! Property tests for the block codec.

use lz4lite::{compress, decompress, decompressed_size, Compressor, TokenParser, MIN_MATCH_LENGTH};
use proptest::prelude::*;

/// Buffers built from a few short repeated fragments, so matches of all
/// lengths and offsets actually occur
fn repetitive_bytes() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec(prop::collection::vec(any::<u8>(), 1..12), 1..6),
        prop::collection::vec((any::<prop::sample::Index>(), 1usize..40), 0..64),
    )
        .prop_map(|(fragments, picks)| {
            let mut data = Vec::new();
            for (index, repeat) in picks {
                let fragment = index.get(&fragments);
                for _ in 0..repeat {
                    data.extend_from_slice(fragment);
                }
            }
            data
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip_arbitrary(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let compressed = compress(&data);
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_round_trip_repetitive(data in repetitive_bytes()) {
        let compressed = compress(&data);
        prop_assert_eq!(decompressed_size(&compressed).unwrap(), data.len());
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_tokens_are_well_formed(data in repetitive_bytes()) {
        let compressed = compress(&data);
        let tokens: Vec<_> = TokenParser::new(&compressed).collect::<Result<_, _>>().unwrap();

        for (i, token) in tokens.iter().enumerate() {
            match token.copy {
                Some(m) => {
                    prop_assert!(m.length >= MIN_MATCH_LENGTH);
                    prop_assert!(m.offset >= 1);
                }
                // Literal-only tokens only ever end the stream
                None => prop_assert_eq!(i, tokens.len() - 1),
            }
        }
    }

    #[test]
    fn prop_decompress_never_panics(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = decompress(&data);
    }

    #[test]
    fn prop_corrupted_byte_never_panics(
        data in repetitive_bytes(),
        position in any::<prop::sample::Index>(),
        value in any::<u8>(),
    ) {
        let mut compressed = compress(&data);
        if !compressed.is_empty() {
            let i = position.index(compressed.len());
            compressed[i] = value;
        }
        if let Err(e) = decompress(&compressed) {
            prop_assert!(e.is_format_error());
        }
    }

    #[test]
    fn prop_compressor_reuse_is_stateless(
        first in repetitive_bytes(),
        second in repetitive_bytes(),
    ) {
        let mut compressor = Compressor::new();
        compressor.compress(&first);
        prop_assert_eq!(compressor.compress(&second), compress(&second));
    }
}
