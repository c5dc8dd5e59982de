//! Line analysis pipeline.
//!
//! This module provides the per-line processing stages:
//! - **Splitter**: Splits a raw line into character and dialogue fields
//! - **Normalizer**: Reduces dialogue to lowercase letters and spaces
//! - **Tokenizer**: Splits normalized dialogue into words

pub mod normalizer;
pub mod splitter;
pub mod tokenizer;

pub use normalizer::DialogueNormalizer;
pub use splitter::split_line;
pub use tokenizer::Tokenizer;
