//! Contiguous Pair Storage
//!
//! Collects a run's (character, word) output without one allocation per
//! pair: all text lives in a single byte buffer, and each pair is a pair
//! of (offset, length) spans into it.
//!
//! ## Memory Layout
//!
//! ```text
//! Buffer: [Alice][hello][world][Bob][one]...[free space]
//!          ^key   ^word  ^word  ^key ^word
//! Spans:  (key 0..5, word 5..10), (key 0..5, word 10..15), ...
//! ```
//!
//! Consecutive pairs from the same speaker share one stored copy of the
//! key: the common case, since every pair from a line carries the same
//! character field.
//!
//! ## Performance
//!
//! - Push: amortized O(len) byte copy, no per-pair heap object
//! - Retrieval: O(1) slice into the buffer
//! - Span overhead: 16 bytes per pair
//! - The span table starts inline ([`SmallVec`]) and spills to the heap
//!   for batch-sized runs

use smallvec::SmallVec;

use crate::sink::PairSink;
use scriptline_types::Pair;

/// Pair reference - two (offset, len) spans into the shared buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PairSpan {
    key_offset: u32,
    key_len: u32,
    word_offset: u32,
    word_len: u32,
}

/// Span-indexed storage for emitted pairs.
///
/// Implements [`PairSink`], so it can sit directly at the end of the
/// mapping pipeline and later be read back by index or iterated in
/// emission order.
#[derive(Default)]
pub struct PairBuffer {
    /// Contiguous text storage for keys and words.
    buffer: Vec<u8>,
    /// One span entry per emitted pair.
    spans: SmallVec<[PairSpan; 64]>,
}

impl PairBuffer {
    /// Creates a new empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            spans: SmallVec::new(),
        }
    }

    /// Creates a buffer with pre-allocated text capacity.
    pub fn with_capacity(text_bytes: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(text_bytes),
            spans: SmallVec::new(),
        }
    }

    /// Returns the number of stored pairs.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if no pairs are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Removes all pairs, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.spans.clear();
    }

    /// Appends a pair.
    ///
    /// When `character` matches the key of the most recent pair, the
    /// stored key bytes are reused rather than copied again.
    pub fn push(&mut self, character: &str, word: &str) {
        let (key_offset, key_len) = match self.spans.last() {
            Some(last) if self.span_key(last) == character => (last.key_offset, last.key_len),
            _ => {
                let offset = self.buffer.len() as u32;
                self.buffer.extend_from_slice(character.as_bytes());
                (offset, character.len() as u32)
            }
        };

        let word_offset = self.buffer.len() as u32;
        self.buffer.extend_from_slice(word.as_bytes());

        self.spans.push(PairSpan {
            key_offset,
            key_len,
            word_offset,
            word_len: word.len() as u32,
        });
    }

    /// Gets a pair by index as borrowed slices.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(&str, &str)> {
        let span = self.spans.get(index)?;
        Some((self.span_key(span), self.span_word(span)))
    }

    /// Iterates pairs in emission order as borrowed slices.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.spans
            .iter()
            .map(|span| (self.span_key(span), self.span_word(span)))
    }

    /// Copies the contents out as owned [`Pair`]s.
    pub fn to_pairs(&self) -> Vec<Pair> {
        self.iter()
            .map(|(character, word)| Pair::new(character, word))
            .collect()
    }

    #[inline(always)]
    fn span_key(&self, span: &PairSpan) -> &str {
        self.slice(span.key_offset, span.key_len)
    }

    #[inline(always)]
    fn span_word(&self, span: &PairSpan) -> &str {
        self.slice(span.word_offset, span.word_len)
    }

    #[inline(always)]
    fn slice(&self, offset: u32, len: u32) -> &str {
        let start = offset as usize;
        let end = start + len as usize;
        // SAFETY: spans only ever cover byte ranges written by `push`
        // from whole `&str` arguments, so every span is a complete UTF-8
        // string. Buffer contents are never mutated after writing.
        unsafe { std::str::from_utf8_unchecked(&self.buffer[start..end]) }
    }
}

impl PairSink for PairBuffer {
    #[inline]
    fn accept(&mut self, character: &str, word: &str) {
        self.push(character, word);
    }
}
