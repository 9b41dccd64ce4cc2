use super::constants::{HASH_BITS, HASH_MULTIPLIER, HASH_SIZE, MIN_MATCH_LENGTH, WINDOW_SIZE};

/// Marker for a bucket that has never been written
const EMPTY: usize = usize::MAX;

/// Single-slot hash index over 4-byte sequences
///
/// Each bucket remembers only the most recent position whose 4 leading bytes
/// hashed to it. Collisions and overwrites can hide a valid match, but every
/// candidate is verified byte by byte before it is reported, so a match
/// returned by [`MatchFinder::find`] is always genuine.
pub struct MatchFinder {
    table: Box<[usize]>,
}

impl MatchFinder {
    pub fn new() -> Self {
        Self { table: vec![EMPTY; HASH_SIZE].into_boxed_slice() }
    }

    /// Forget every recorded position
    pub fn reset(&mut self) {
        self.table.fill(EMPTY);
    }

    /// Bucket index for a 4-byte sequence read little-endian
    #[inline]
    pub fn hash(sequence: u32) -> usize {
        (sequence.wrapping_mul(HASH_MULTIPLIER) >> (32 - HASH_BITS)) as usize
    }

    /// Oldest position a match starting at `pos` may reference is
    /// `window_start(pos) + 1`
    #[inline]
    pub fn window_start(pos: usize) -> usize {
        pos - pos.min(WINDOW_SIZE)
    }

    /// Propose a back-reference for `current_pos`.
    ///
    /// Records `current_pos` in its bucket unconditionally, then checks the
    /// previous occupant. Returns `(match_pos, match_len)` when that
    /// candidate lies strictly inside `(window_start, current_pos)` and
    /// shares at least `MIN_MATCH_LENGTH` bytes with `current_pos`.
    pub fn find(
        &mut self,
        input: &[u8],
        current_pos: usize,
        window_start: usize,
    ) -> Option<(usize, usize)> {
        if current_pos >= input.len() || input.len() - current_pos < MIN_MATCH_LENGTH {
            return None;
        }

        let sequence = u32::from_le_bytes([
            input[current_pos],
            input[current_pos + 1],
            input[current_pos + 2],
            input[current_pos + 3],
        ]);
        let bucket = Self::hash(sequence);
        let candidate = std::mem::replace(&mut self.table[bucket], current_pos);

        if candidate == EMPTY || candidate <= window_start || candidate >= current_pos {
            return None;
        }

        let match_len = input[candidate..]
            .iter()
            .zip(&input[current_pos..])
            .take_while(|(a, b)| a == b)
            .count();

        (match_len >= MIN_MATCH_LENGTH).then_some((candidate, match_len))
    }
}

impl Default for MatchFinder {
    fn default() -> Self {
        Self::new()
    }
}
