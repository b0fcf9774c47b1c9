//! Plaintext <-> whitespace pipeline.
//!
//! # Responsibility
//! - Compose the Morse and whitespace stages into encode/decode entry points.
//! - Expose a round-trip self-check over the composed stages.
//!
//! # Invariants
//! - `encode` output always starts with exactly one marker.
//! - For plaintext made only of alphabet characters (any case) and spaces,
//!   `decode(encode(p)) == p.to_uppercase()`.
//! - Neither direction fails; lossy positions are reported, not raised.

use crate::codec::morse::{from_morse_report, to_morse_report};
use crate::codec::whitespace::{from_whitespace, to_whitespace};
use crate::model::morse::Transcoded;
use log::debug;

/// Transcoding direction selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to marker-prefixed whitespace.
    Encode,
    /// Whitespace back to uppercase plaintext.
    Decode,
}

/// Encodes a message into marker-prefixed whitespace.
pub fn encode(message: &str) -> String {
    encode_report(message).output
}

/// Decodes whitespace text into uppercase plaintext.
pub fn decode(message: &str) -> String {
    decode_report(message).output
}

/// Runs one message through the pipeline in the given direction.
pub fn transcode(message: &str, direction: Direction) -> String {
    transcode_report(message, direction).output
}

/// Like [`transcode`], but keeps the fallback positions.
pub fn transcode_report(message: &str, direction: Direction) -> Transcoded {
    match direction {
        Direction::Encode => encode_report(message),
        Direction::Decode => decode_report(message),
    }
}

/// Encodes a message and reports unencodable characters.
///
/// Input is upper-cased first. Reported positions index the upper-cased
/// text, which can differ from the input for characters like `ß`.
pub fn encode_report(message: &str) -> Transcoded {
    let upper = message.to_uppercase();
    let morse = to_morse_report(&upper);
    debug!(
        "event=encode module=pipeline status=ok chars={} fallbacks={}",
        upper.chars().count(),
        morse.fallbacks.len()
    );
    Transcoded {
        output: to_whitespace(&morse.output),
        fallbacks: morse.fallbacks,
    }
}

/// Decodes whitespace text and reports unrecognized Morse tokens.
pub fn decode_report(message: &str) -> Transcoded {
    let morse = from_whitespace(message);
    let decoded = from_morse_report(&morse);
    debug!(
        "event=decode module=pipeline status=ok chars={} fallbacks={}",
        decoded.output.chars().count(),
        decoded.fallbacks.len()
    );
    decoded
}

/// Outcome of [`self_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfCheckReport {
    /// Whitespace decoding reproduced the exact Morse sequence.
    pub morse_preserved: bool,
    /// Full decoding reproduced the upper-cased message.
    pub round_trip: bool,
}

impl SelfCheckReport {
    /// Returns whether both layers reproduced their input.
    pub fn passed(&self) -> bool {
        self.morse_preserved && self.round_trip
    }
}

/// Pushes a message through both stages and back, comparing each layer.
///
/// `round_trip` is only expected to hold for alphabet-covered input.
pub fn self_check(message: &str) -> SelfCheckReport {
    let upper = message.to_uppercase();
    let morse = to_morse_report(&upper).output;
    let hidden = to_whitespace(&morse);
    // The marker decodes to one extra leading gap.
    let recovered_morse = from_whitespace(&hidden);
    let morse_preserved = recovered_morse.strip_prefix(' ') == Some(morse.as_str());
    let round_trip = from_morse_report(&recovered_morse).output == upper;

    SelfCheckReport {
        morse_preserved,
        round_trip,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, self_check, transcode, Direction};
    use crate::codec::whitespace::MARKER;

    #[test]
    fn encode_is_case_insensitive() {
        assert_eq!(encode("sos"), encode("SOS"));
    }

    #[test]
    fn encode_prefixes_one_marker() {
        let encoded = encode("hello");
        assert!(encoded.starts_with(MARKER));
        assert_eq!(encoded.matches(MARKER).count(), 1);
    }

    #[test]
    fn transcode_dispatches_on_direction() {
        let hidden = transcode("ok", Direction::Encode);
        assert_eq!(hidden, encode("ok"));
        assert_eq!(transcode(&hidden, Direction::Decode), "OK");
    }

    #[test]
    fn decode_accepts_marker_stripped_payload() {
        let hidden = encode("abc");
        let body = &hidden[MARKER.len_utf8()..];
        assert_eq!(decode(body), "ABC");
    }

    #[test]
    fn self_check_passes_for_covered_input() {
        assert!(self_check("Hello World 123").passed());
    }

    #[test]
    fn self_check_flags_lossy_input() {
        let report = self_check("hi!");
        assert!(report.morse_preserved);
        assert!(!report.round_trip);
        assert!(!report.passed());
    }
}
