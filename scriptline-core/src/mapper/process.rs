//! Per-line mapping logic.

use crate::analyzer::splitter::split_line;
use crate::mapper::types::DialogueMapper;
use crate::sink::PairSink;
use scriptline_types::{LineOutcome, Pair, SkipReason};

impl DialogueMapper {
    /// Maps one line, streaming pairs into `sink`.
    ///
    /// The line is split at the first `:`; the trimmed character field
    /// keys every pair, and the dialogue field is normalized to `[a-z ]`
    /// and tokenized on space runs. One `sink.accept` call per word
    /// occurrence, in line order.
    ///
    /// Malformed lines (empty after trim, or no separator) emit nothing
    /// and return [`LineOutcome::Skipped`], never an error. A
    /// well-formed line whose dialogue holds no letters returns
    /// `Emitted(0)`.
    #[inline(never)]
    pub fn process_into<S: PairSink>(&mut self, line: &str, sink: &mut S) -> LineOutcome {
        self.lines_seen += 1;

        let Some((character, dialogue)) = split_line(line) else {
            let reason = if line.trim().is_empty() {
                self.skipped_empty += 1;
                SkipReason::Empty
            } else {
                self.skipped_no_separator += 1;
                SkipReason::NoSeparator
            };
            return LineOutcome::Skipped(reason);
        };

        self.normalizer.normalize_into(dialogue, &mut self.norm_buf);

        let mut emitted = 0u32;
        self.tokenizer.tokenize(&self.norm_buf, |word, _pos| {
            sink.accept(character, word);
            emitted = emitted.saturating_add(1);
        });

        self.pairs_emitted += emitted as u64;
        LineOutcome::Emitted(emitted)
    }

    /// Maps one line into owned pairs.
    ///
    /// Convenience over [`process_into`](Self::process_into) for callers
    /// that want the sequence itself; skipped lines yield an empty Vec.
    pub fn process(&mut self, line: &str) -> Vec<Pair> {
        let mut pairs = Vec::new();
        self.process_into(line, &mut pairs);
        pairs
    }

    /// Maps every line of a script, in order. Returns lines seen.
    pub fn process_script<S: PairSink>(&mut self, script: &str, sink: &mut S) -> u64 {
        self.process_lines(script.lines(), sink)
    }

    /// Maps lines from any record source, in iteration order.
    ///
    /// Returns the number of lines consumed in this call. Line order is
    /// irrelevant to correctness (lines are independent), but output
    /// pair order follows iteration order.
    pub fn process_lines<'a, I, S>(&mut self, lines: I, sink: &mut S) -> u64
    where
        I: IntoIterator<Item = &'a str>,
        S: PairSink,
    {
        let mut seen = 0u64;
        for line in lines {
            self.process_into(line, sink);
            seen += 1;
        }
        seen
    }
}
