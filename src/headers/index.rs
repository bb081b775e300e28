use super::{HeaderToken, lookup_token};

const ABSENT: i16 = -1;

/// Per-message table recording where each recognized header last appeared.
///
/// One slot per [`HeaderToken`], holding the position of the most recent
/// occurrence of that token in the current header list, or absent. Downstream
/// logic consults it for protocol handling, e.g. required pseudo-headers or
/// connection-specific headers.
///
/// The table is refilled by [`scan`][HeaderIndex::scan]-ing a header list and
/// reset between messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    slots: [i16; HeaderToken::COUNT],
}

impl HeaderIndex {
    /// Creates an index with every token marked absent.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: [ABSENT; HeaderToken::COUNT],
        }
    }

    /// Builds an index by scanning a header name list in order.
    ///
    /// Positions are the iteration order; a repeated recognized name keeps
    /// the position of its last occurrence. Unrecognized names are skipped.
    pub fn scan<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut index = Self::new();
        for (pos, name) in names.into_iter().enumerate() {
            if let Some(token) = lookup_token(name) {
                index.record(token, pos);
            }
        }
        index
    }

    /// Records that `token` appeared at list position `pos`.
    ///
    /// Header lists are bounded by frame limits well below `i16::MAX`
    /// entries, so positions always fit the slot. The bound is trusted in
    /// release builds and checked in debug builds.
    #[inline]
    pub const fn record(&mut self, token: HeaderToken, pos: usize) {
        debug_assert!(pos <= i16::MAX as usize);
        self.slots[token.index()] = pos as i16;
    }

    /// Returns the position of the most recent occurrence of `token`.
    #[inline]
    pub const fn get(&self, token: HeaderToken) -> Option<usize> {
        let pos = self.slots[token.index()];
        if pos < 0 { None } else { Some(pos as usize) }
    }

    /// Returns `true` if `token` appeared in the scanned list.
    #[inline]
    pub const fn contains(&self, token: HeaderToken) -> bool {
        self.slots[token.index()] >= 0
    }

    /// Marks every token absent again, for reuse across messages.
    #[inline]
    pub fn reset(&mut self) {
        self.slots = [ABSENT; HeaderToken::COUNT];
    }
}

impl Default for HeaderIndex {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
