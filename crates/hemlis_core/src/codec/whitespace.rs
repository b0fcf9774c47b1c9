//! Morse sequence <-> whitespace-only text transcoder.
//!
//! # Responsibility
//! - Substitute the four Morse symbol classes with blank-rendering characters.
//! - Prefix encoded payloads with a marker so scanners can locate them.
//!
//! # Invariants
//! - `.`, `-`, `/` and the separator space map 1:1 onto space, tab,
//!   no-break space and en space.
//! - Characters outside the table pass through unchanged in both directions.
//!   This includes the `X` placeholder for unencodable plaintext, which stays
//!   visible inside an otherwise blank payload.
//! - The marker never appears inside an encoded body.

/// Marks the start of an encoded payload (U+202F NARROW NO-BREAK SPACE).
pub const MARKER: char = '\u{202F}';

const DOT: char = ' ';
const DASH: char = '\t';
const SEPARATOR: char = '\u{00A0}';
const TOKEN_GAP: char = '\u{2002}';

/// Encodes a Morse sequence as marker-prefixed whitespace.
pub fn to_whitespace(sequence: &str) -> String {
    let mut encoded = String::with_capacity(sequence.len() * 3 + MARKER.len_utf8());
    encoded.push(MARKER);
    encoded.extend(sequence.chars().map(|symbol| match symbol {
        '.' => DOT,
        '-' => DASH,
        '/' => SEPARATOR,
        ' ' => TOKEN_GAP,
        other => other,
    }));
    encoded
}

/// Decodes whitespace text back into a Morse sequence.
///
/// A marker left in the input becomes a token gap, which Morse decoding
/// ignores, so callers may pass marker-prefixed payloads directly.
pub fn from_whitespace(text: &str) -> String {
    text.chars()
        .map(|symbol| match symbol {
            DOT => '.',
            DASH => '-',
            SEPARATOR => '/',
            TOKEN_GAP | MARKER => ' ',
            other => other,
        })
        .collect()
}

/// Returns the text after the first marker, or `None` when there is none.
pub fn strip_marker(text: &str) -> Option<&str> {
    text.split_once(MARKER).map(|(_, payload)| payload)
}
