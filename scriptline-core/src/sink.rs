//! Pair output seam.
//!
//! The mapper never decides where pairs go; it hands every
//! (character, word) occurrence to a [`PairSink`]. This keeps the line
//! pipeline framework-independent: a driver may collect into a `Vec`, a
//! [`PairBuffer`](crate::pair_buf::PairBuffer), a channel adapter, or a
//! plain closure via [`FnSink`].
//!
//! Sinks must tolerate unbounded repeated keys and repeated pairs; the
//! mapping stage deduplicates nothing.

use scriptline_types::Pair;

/// Destination for emitted (character, word) pairs.
///
/// `accept` is called once per word occurrence, in line order. Both
/// arguments are borrowed; a sink that outlives the call must copy what
/// it keeps.
pub trait PairSink {
    /// Receives one emitted pair.
    fn accept(&mut self, character: &str, word: &str);
}

/// Collects owned [`Pair`]s in emission order.
impl PairSink for Vec<Pair> {
    #[inline]
    fn accept(&mut self, character: &str, word: &str) {
        self.push(Pair::new(character, word));
    }
}

/// Adapts a closure into a [`PairSink`].
///
/// A blanket impl over `FnMut` would collide with the concrete sink impls
/// under coherence rules, so closures go through this newtype instead.
///
/// # Example
///
/// ```
/// use scriptline_core::sink::{FnSink, PairSink};
///
/// let mut count = 0usize;
/// let mut sink = FnSink(|_character: &str, _word: &str| count += 1);
/// sink.accept("Alice", "hello");
/// drop(sink);
/// assert_eq!(count, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<F> PairSink for FnSink<F>
where
    F: FnMut(&str, &str),
{
    #[inline]
    fn accept(&mut self, character: &str, word: &str) {
        (self.0)(character, word);
    }
}
