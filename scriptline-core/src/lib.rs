//! Movie-script dialogue tokenization core.
//!
//! Turns script lines of the shape `"character: dialogue"` into a stream
//! of (character, word) pairs: the dialogue is lowercased, stripped down
//! to letters and spaces, and split into words, each keyed by the trimmed
//! character name. Aggregation (grouping, counting, deduplication) is
//! deliberately left to whatever consumes the stream.
//!
//! ```
//! use scriptline_core::DialogueMapper;
//!
//! let mut mapper = DialogueMapper::new();
//! let pairs = mapper.process("Alice: Hello, World! 123");
//!
//! let words: Vec<&str> = pairs.iter().map(|p| p.word.as_str()).collect();
//! assert_eq!(words, ["hello", "world"]);
//! ```
//!
//! The pipeline stages live in [`analyzer`] and are usable on their own;
//! [`mapper`] wires them together behind the [`sink`] output seam.

pub mod analyzer;
pub mod mapper;
pub mod pair_buf;
pub mod sink;

pub use mapper::{DialogueMapper, MapperMetrics};
pub use pair_buf::PairBuffer;
pub use sink::{FnSink, PairSink};

pub use scriptline_types::{LineOutcome, Pair, SkipReason};
