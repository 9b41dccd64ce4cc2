pub mod reader;
pub mod writer;

pub use reader::ByteReader;
pub use writer::ByteWriter;

/// Largest value a single length-extension byte can hold before another
/// byte must follow
pub const LENGTH_EXTENSION_STEP: u8 = 255;
