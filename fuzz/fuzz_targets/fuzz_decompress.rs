#![no_main]

use libfuzzer_sys::fuzz_target;
use lz4lite::{decompress, decompressed_size};

fuzz_target!(|data: &[u8]| {
    // Decompression may fail on invalid input - that's OK
    // We're looking for panics/crashes, not errors
    let result = decompress(data);

    // The size-only pass must agree with the full decode
    match (result, decompressed_size(data)) {
        (Ok(out), Ok(size)) => assert_eq!(out.len(), size),
        (Err(_), Err(_)) => {}
        _ => panic!("decompress and decompressed_size disagree"),
    }
});
