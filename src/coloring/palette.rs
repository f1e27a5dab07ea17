//! Word-packed scratch set of colors already taken around a vertex.

const WORD_BITS: usize = u64::BITS as usize;

/// A reusable bitset of "used" colors.
///
/// A vertex of degree `d` always has a free color in `0..=d`, so colors above
/// the caller-supplied bound are ignored instead of growing the set.
#[derive(Debug, Default)]
pub(crate) struct Palette {
    words: Vec<u64>,
    bound: usize,
}

impl Palette {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Clears the set and makes room for colors in `0..=bound`.
    pub(crate) fn reset(&mut self, bound: usize) {
        let needed = bound / WORD_BITS + 1;
        self.words.clear();
        self.words.resize(needed, 0);
        self.bound = bound;
    }

    #[inline]
    pub(crate) fn insert(&mut self, color: usize) {
        if color <= self.bound {
            self.words[color / WORD_BITS] |= 1u64 << (color % WORD_BITS);
        }
    }

    #[inline]
    pub(crate) fn contains(&self, color: usize) -> bool {
        color <= self.bound && self.words[color / WORD_BITS] & (1u64 << (color % WORD_BITS)) != 0
    }

    /// Returns the smallest color not in the set.
    pub(crate) fn first_free(&self) -> usize {
        for (i, &word) in self.words.iter().enumerate() {
            if word != u64::MAX {
                return i * WORD_BITS + word.trailing_ones() as usize;
            }
        }
        self.words.len() * WORD_BITS
    }
}
