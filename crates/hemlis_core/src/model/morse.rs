//! Morse sequence vocabulary and lossy-result records.
//!
//! # Responsibility
//! - Name the special tokens that appear in a Morse sequence.
//! - Carry transcoder output together with every placeholder substitution.
//!
//! # Invariants
//! - A sequence is whitespace-delimited tokens: alphabet codes, `/`, or `X`.
//! - `Transcoded::fallbacks` is ordered by `position`.

/// Token standing for one plaintext space (word break).
pub const WORD_SEPARATOR: &str = "/";
/// Token emitted for a plaintext character absent from the alphabet.
pub const ENCODE_FALLBACK: &str = "X";
/// Character emitted for a Morse token absent from the reverse alphabet.
pub const DECODE_FALLBACK: char = '_';

/// One lossy substitution made by a transcoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// Zero-based char index (encode) or token index (decode).
    pub position: usize,
    /// The character or token that could not be translated.
    pub source: String,
}

/// Transcoder output with the substitutions it had to make.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcoded {
    pub output: String,
    pub fallbacks: Vec<Fallback>,
}

impl Transcoded {
    /// Returns whether every input unit was translated exactly.
    pub fn is_lossless(&self) -> bool {
        self.fallbacks.is_empty()
    }
}
