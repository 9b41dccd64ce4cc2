#![no_main]

use libfuzzer_sys::fuzz_target;
use lz4lite::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    // Limit data size to avoid slowdowns
    let data = if data.len() > 256 * 1024 { &data[..256 * 1024] } else { data };

    let compressed = compress(data);
    let restored = decompress(&compressed).expect("compressor produced an undecodable stream");
    assert_eq!(restored, data, "Round-trip mismatch");
});
