/// Shortest back-reference ever encoded; the 2-byte offset would not pay
/// for anything shorter
pub const MIN_MATCH_LENGTH: usize = 4;

/// Maximum lookback distance (fits the 2-byte offset field)
pub const WINDOW_SIZE: usize = 65535;

/// Saturated value of a 4-bit length nibble
pub const RUN_MASK: usize = 15;

/// Hash table index width
pub const HASH_BITS: u32 = 16;

/// Number of hash table buckets
pub const HASH_SIZE: usize = 1 << HASH_BITS;

/// Knuth's multiplicative hashing constant
pub const HASH_MULTIPLIER: u32 = 2654435761;
