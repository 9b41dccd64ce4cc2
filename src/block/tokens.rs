/// A back-reference: copy `length` bytes starting `offset` bytes back
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Distance from the current output position (1-65535)
    pub offset: u16,
    /// Number of bytes to copy (>= MIN_MATCH_LENGTH)
    pub length: usize,
}

/// One unit of the compressed stream: a literal run, optionally followed by
/// a back-reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Bytes copied verbatim to the output
    pub literals: &'a [u8],
    /// Back-reference replayed after the literals; `None` only for the
    /// terminal token of a stream
    pub copy: Option<Match>,
}

impl<'a> Token<'a> {
    pub fn literal(literals: &'a [u8]) -> Self {
        Self { literals, copy: None }
    }

    pub fn with_match(literals: &'a [u8], offset: u16, length: usize) -> Self {
        Self { literals, copy: Some(Match { offset, length }) }
    }

    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        self.literals.len() + self.copy.map_or(0, |m| m.length)
    }

    /// Whether this token carries no back-reference
    pub fn is_literal_only(&self) -> bool {
        self.copy.is_none()
    }
}
