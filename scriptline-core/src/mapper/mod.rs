//! Per-line mapping engine.
//!
//! Turns `"character: dialogue"` lines into (character, word) pairs,
//! one per word occurrence, streamed through a
//! [`PairSink`](crate::sink::PairSink). Malformed lines are skipped
//! silently, never reported as errors; a driver that wants skip counts
//! reads [`MapperMetrics`] off the engine.
//!
//! Threading:
//! - [`DialogueMapper`] holds reusable mutable buffers and is meant to be
//!   owned by one worker. Lines are independent, so fan-out is a matter
//!   of giving each worker its own engine.

mod process;
mod stats;
mod types;

pub use types::{DialogueMapper, MapperMetrics};

#[cfg(test)]
mod tests {
    use super::*;
    use scriptline_types::{LineOutcome, Pair, SkipReason};

    fn pairs_of(line: &str) -> Vec<(String, String)> {
        DialogueMapper::new()
            .process(line)
            .into_iter()
            .map(|p| (p.character, p.word))
            .collect()
    }

    #[test]
    fn basic_line_maps_to_pairs() {
        assert_eq!(
            pairs_of("Alice: Hello, World! 123"),
            [
                ("Alice".to_owned(), "hello".to_owned()),
                ("Alice".to_owned(), "world".to_owned()),
            ]
        );
    }

    #[test]
    fn duplicates_preserved_and_character_trimmed() {
        assert_eq!(
            pairs_of("  Bob  :  one two two three "),
            [
                ("Bob".to_owned(), "one".to_owned()),
                ("Bob".to_owned(), "two".to_owned()),
                ("Bob".to_owned(), "two".to_owned()),
                ("Bob".to_owned(), "three".to_owned()),
            ]
        );
    }

    #[test]
    fn split_happens_at_first_colon_only() {
        assert_eq!(
            pairs_of("Carol: A: B"),
            [
                ("Carol".to_owned(), "a".to_owned()),
                ("Carol".to_owned(), "b".to_owned()),
            ]
        );
    }

    #[test]
    fn lines_without_separator_emit_nothing() {
        let mut mapper = DialogueMapper::new();
        let mut sink: Vec<Pair> = Vec::new();

        let outcome = mapper.process_into("stage direction", &mut sink);

        assert_eq!(outcome, LineOutcome::Skipped(SkipReason::NoSeparator));
        assert!(sink.is_empty());
    }

    #[test]
    fn blank_lines_emit_nothing() {
        let mut mapper = DialogueMapper::new();
        let mut sink: Vec<Pair> = Vec::new();

        for line in ["", "   ", "\t \t"] {
            let outcome = mapper.process_into(line, &mut sink);
            assert_eq!(outcome, LineOutcome::Skipped(SkipReason::Empty));
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn letterless_dialogue_is_mapped_not_skipped() {
        let mut mapper = DialogueMapper::new();
        let mut sink: Vec<Pair> = Vec::new();

        let outcome = mapper.process_into("Alice: 123 !!! ...", &mut sink);

        assert_eq!(outcome, LineOutcome::Emitted(0));
        assert!(sink.is_empty());
    }

    #[test]
    fn empty_character_field_keys_pairs() {
        assert_eq!(pairs_of(": hi there"), [
            (String::new(), "hi".to_owned()),
            (String::new(), "there".to_owned()),
        ]);
    }

    #[test]
    fn punctuation_gaps_do_not_merge_words() {
        assert_eq!(
            pairs_of("Dan: well--fine, I guess."),
            [
                ("Dan".to_owned(), "wellfine".to_owned()),
                ("Dan".to_owned(), "i".to_owned()),
                ("Dan".to_owned(), "guess".to_owned()),
            ]
        );
    }

    #[test]
    fn same_line_always_maps_the_same() {
        let line = "Eve: to be or not to be";
        let mut mapper = DialogueMapper::new();

        let first = mapper.process(line);
        let second = mapper.process(line);
        let fresh = DialogueMapper::new().process(line);

        assert_eq!(first, second);
        assert_eq!(first, fresh);
    }

    #[test]
    fn outcome_counts_match_sink() {
        let mut mapper = DialogueMapper::new();
        let mut sink: Vec<Pair> = Vec::new();

        let outcome = mapper.process_into("Fay: a b c", &mut sink);

        assert_eq!(outcome, LineOutcome::Emitted(3));
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn script_processing_spans_lines() {
        let script = "\
Alice: Hello there!
not a dialogue line

Bob: hello again
: unattributed words";

        let mut mapper = DialogueMapper::new();
        let mut sink: Vec<Pair> = Vec::new();
        let seen = mapper.process_script(script, &mut sink);

        assert_eq!(seen, 5);
        assert_eq!(
            sink,
            vec![
                Pair::new("Alice", "hello"),
                Pair::new("Alice", "there"),
                Pair::new("Bob", "hello"),
                Pair::new("Bob", "again"),
                Pair::new("", "unattributed"),
                Pair::new("", "words"),
            ]
        );

        let metrics = mapper.metrics();
        assert_eq!(metrics.lines_seen, 5);
        assert_eq!(metrics.skipped_empty, 1);
        assert_eq!(metrics.skipped_no_separator, 1);
        assert_eq!(metrics.pairs_emitted, 6);
        assert_eq!(metrics.lines_mapped(), 3);
    }

    #[test]
    fn line_iterator_source() {
        let records = vec!["A: one", "bad line", "B: two"];
        let mut mapper = DialogueMapper::new();
        let mut sink: Vec<Pair> = Vec::new();

        let seen = mapper.process_lines(records, &mut sink);

        assert_eq!(seen, 3);
        assert_eq!(sink, vec![Pair::new("A", "one"), Pair::new("B", "two")]);
    }

    #[test]
    fn metrics_accumulate_across_calls() {
        let mut mapper = DialogueMapper::new();
        let mut sink: Vec<Pair> = Vec::new();

        mapper.process_into("A: one two", &mut sink);
        mapper.process_into("", &mut sink);
        mapper.process_into("no colon", &mut sink);

        let m = mapper.metrics();
        assert_eq!(m.lines_seen, 3);
        assert_eq!(m.lines_skipped(), 2);
        assert_eq!(m.pairs_emitted, 2);
    }

    #[test]
    fn reset_metrics_zeroes_counters_only() {
        let mut mapper = DialogueMapper::new();
        mapper.process("A: one two three");
        mapper.reset_metrics();

        let m = mapper.metrics();
        assert_eq!(m.lines_seen, 0);
        assert_eq!(m.pairs_emitted, 0);

        // The engine still maps normally after a reset.
        assert_eq!(mapper.process("B: four").len(), 1);
    }

    #[test]
    fn counters_never_change_output() {
        let line = "Gus: same words every time";
        let mut busy = DialogueMapper::new();
        for _ in 0..100 {
            busy.process("X: filler filler filler");
        }

        assert_eq!(busy.process(line), DialogueMapper::new().process(line));
    }

    #[test]
    fn streams_into_pair_buffer() {
        use crate::pair_buf::PairBuffer;

        let mut mapper = DialogueMapper::new();
        let mut buf = PairBuffer::new();

        mapper.process_into("Alice: hello hello world", &mut buf);

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.get(0), Some(("Alice", "hello")));
        assert_eq!(buf.get(1), Some(("Alice", "hello")));
        assert_eq!(buf.get(2), Some(("Alice", "world")));
    }

    #[test]
    fn streams_into_closure_sink() {
        use crate::sink::FnSink;

        let mut count = 0usize;
        let mut mapper = DialogueMapper::new();
        mapper.process_into("Hal: open the doors", &mut FnSink(|_: &str, _: &str| count += 1));

        assert_eq!(count, 3);
    }

    #[test]
    fn unicode_dialogue_degrades_to_ascii_tokens() {
        assert_eq!(
            pairs_of("Ingrid: café, naïve — São Paulo"),
            [
                ("Ingrid".to_owned(), "caf".to_owned()),
                ("Ingrid".to_owned(), "nave".to_owned()),
                ("Ingrid".to_owned(), "so".to_owned()),
                ("Ingrid".to_owned(), "paulo".to_owned()),
            ]
        );
    }

    #[test]
    fn unicode_character_name_passes_through() {
        assert_eq!(pairs_of("Zoë: hi"), [("Zoë".to_owned(), "hi".to_owned())]);
    }
}
