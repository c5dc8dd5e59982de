//! Streaming word tokenizer.
//!
//! Splits filtered dialogue into words and hands them to a callback, one
//! at a time, in left-to-right order. It is the last stage of the line
//! pipeline: the normalizer guarantees its input is already down to the
//! `[a-z ]` alphabet, so splitting is a plain byte scan for spaces.
//!
//! ## Key properties
//!
//! - **Zero allocation**: every emitted word is a slice of the input
//! - **Streaming**: words go out through a callback, nothing is collected
//! - **Run-tolerant**: consecutive spaces count as one delimiter, and
//!   leading/trailing spaces produce no empty words. Runs are normal
//!   input here; upstream deletion leaves gaps where punctuation was.
//!
//! ## Usage
//!
//! ```
//! use scriptline_core::analyzer::Tokenizer;
//!
//! let tokenizer = Tokenizer::new();
//! let mut words = Vec::new();
//!
//! tokenizer.tokenize("hello  world", |word, _pos| words.push(word));
//! assert_eq!(words, ["hello", "world"]);
//! ```

use memchr::memchr_iter;

/// Streaming tokenizer over filtered dialogue.
///
/// Expects input in the normalizer's output alphabet: lowercase ASCII
/// letters and spaces, nothing else. The contract is debug-asserted;
/// release builds trust the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes filtered dialogue, emitting `(word, position)`.
    ///
    /// Position counts emitted words from zero, left to right. After a
    /// word at position `u32::MAX`, emission stops (overflow guard).
    #[inline]
    pub fn tokenize<'n, F>(&self, filtered: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = filtered.as_bytes();

        debug_assert!(
            bytes.iter().all(|&b| b == b' ' || b.is_ascii_lowercase()),
            "tokenizer: input outside [a-z ] — normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            // Empty segments come from space runs and boundary spaces;
            // they are delimiters, not words.
            if start < i {
                emit(&filtered[start..i], pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit(&filtered[start..], pos);
        }
    }
}
