/// Byte-level filter map for dialogue text.
///
/// Maps each ASCII byte to its normalized form: letters fold to
/// lowercase, the space byte passes through, and everything else maps to
/// `0x00`, the "delete" sentinel. Bytes >= 0x80 never consult the table;
/// they take the character path below.
#[rustfmt::skip]
const DIALOGUE_TABLE: [u8; 256] = [
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x20,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x00,0x00,0x00,0x00,0x00,
    0x00,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
];

/// Dialogue text normalizer.
///
/// Reduces a dialogue field to the token alphabet `[a-z ]`:
/// - ASCII letters fold to lowercase and pass through
/// - ASCII spaces pass through
/// - Everything else is deleted
///
/// Non-ASCII characters are case-folded before the filter is applied, so
/// a character whose lowering produces ASCII output (e.g. `İ` lowers to
/// `i` plus a combining mark) contributes its ASCII part. Deletion never
/// collapses anything: neighbouring deleted characters leave the spaces
/// around them in place, which the tokenizer later treats as a single
/// delimiter run.
///
/// # Examples
///
/// ```
/// use scriptline_core::analyzer::DialogueNormalizer;
///
/// let normalizer = DialogueNormalizer::new();
/// assert_eq!(normalizer.normalize(" Hello, World! 123"), " hello world ");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueNormalizer;

impl DialogueNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes `input` into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity, growing
    /// only when necessary. Output never exceeds the input length for
    /// ASCII input.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() {
            let b = bytes[i];

            if b < 128 {
                let mapped = DIALOGUE_TABLE[b as usize];
                if mapped != 0 {
                    out.push(mapped as char);
                }
                i += 1;
                continue;
            }

            // Multi-byte sequence. Fold first, filter second: lowering can
            // produce ASCII letters that survive the filter.
            // `i` always sits on a char boundary here.
            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();

            for lowered in ch.to_lowercase() {
                if lowered.is_ascii() {
                    let mapped = DIALOGUE_TABLE[lowered as usize];
                    if mapped != 0 {
                        out.push(mapped as char);
                    }
                }
            }
        }
    }

    /// Normalizes `input` and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
