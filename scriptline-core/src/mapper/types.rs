//! Mapper types and constants.

use crate::analyzer::{DialogueNormalizer, Tokenizer};

/// Initial capacity for the reusable dialogue normalization buffer.
pub(crate) const NORM_BUF_CAPACITY: usize = 256;

/// Per-line mapping engine.
///
/// Wires the splitter, normalizer, and tokenizer together and owns a
/// reusable normalization buffer, so a long run allocates only when a
/// dialogue field outgrows previous ones. Output always goes through a
/// [`PairSink`](crate::sink::PairSink); the engine itself keeps nothing
/// but operational counters.
///
/// Each line is processed independently: counters never influence output,
/// and the same line always yields the same pair sequence. One pair is
/// emitted per word occurrence; repeated words repeat their pair. Any
/// "unique words per character" semantics belong to a downstream grouping
/// stage, not here.
///
/// The engine holds mutable buffers, so methods take `&mut self`; use one
/// engine per worker rather than sharing.
pub struct DialogueMapper {
    pub(crate) normalizer: DialogueNormalizer,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) norm_buf: String,
    pub(crate) lines_seen: u64,
    pub(crate) skipped_empty: u64,
    pub(crate) skipped_no_separator: u64,
    pub(crate) pairs_emitted: u64,
}

impl Default for DialogueMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogueMapper {
    /// Creates a new mapper with zeroed counters.
    pub fn new() -> Self {
        Self {
            normalizer: DialogueNormalizer::new(),
            tokenizer: Tokenizer::new(),
            norm_buf: String::with_capacity(NORM_BUF_CAPACITY),
            lines_seen: 0,
            skipped_empty: 0,
            skipped_no_separator: 0,
            pairs_emitted: 0,
        }
    }

    /// Returns a snapshot of the operational counters.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> MapperMetrics {
        MapperMetrics {
            lines_seen: self.lines_seen,
            skipped_empty: self.skipped_empty,
            skipped_no_separator: self.skipped_no_separator,
            pairs_emitted: self.pairs_emitted,
        }
    }

    /// Zeroes the operational counters. Buffers keep their capacity.
    pub fn reset_metrics(&mut self) {
        self.lines_seen = 0;
        self.skipped_empty = 0;
        self.skipped_no_separator = 0;
        self.pairs_emitted = 0;
    }
}

/// Operational counters for a mapping run.
///
/// These exist for the collaborator boundary: the mapper never logs or
/// reports skips itself, a driver that wants visibility reads a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperMetrics {
    /// Total lines handed to the mapper.
    pub lines_seen: u64,
    /// Lines skipped because they were empty after trimming.
    pub skipped_empty: u64,
    /// Lines skipped because they carried no `:` separator.
    pub skipped_no_separator: u64,
    /// Total pairs emitted across all lines.
    pub pairs_emitted: u64,
}
