//! Plaintext <-> Morse sequence transcoder.
//!
//! # Responsibility
//! - Map plaintext characters to space-terminated Morse tokens and back.
//! - Substitute placeholders for anything outside the alphabet.
//!
//! # Invariants
//! - Never fails: unknown input becomes `X` (encode) or `_` (decode).
//! - Every placeholder is logged at `warn` and recorded as a `Fallback`.
//! - Encoded output always ends with a separator space when non-empty.

use crate::model::alphabet::{char_for, morse_for};
use crate::model::morse::{
    Fallback, Transcoded, DECODE_FALLBACK, ENCODE_FALLBACK, WORD_SEPARATOR,
};
use log::warn;

/// Encodes uppercase plaintext into a Morse sequence.
///
/// Lowercase letters are not in the alphabet; use
/// [`crate::service::pipeline::encode`] for case-insensitive input.
pub fn to_morse(plaintext: &str) -> String {
    to_morse_report(plaintext).output
}

/// Encodes plaintext and reports every unencodable character.
///
/// A plaintext space becomes ` / `; every other character becomes its code
/// followed by one space.
pub fn to_morse_report(plaintext: &str) -> Transcoded {
    let mut result = Transcoded::default();

    for (position, plain) in plaintext.chars().enumerate() {
        if plain == ' ' {
            result.output.push(' ');
            result.output.push_str(WORD_SEPARATOR);
            result.output.push(' ');
            continue;
        }

        match morse_for(plain) {
            Some(code) => result.output.push_str(code),
            None => {
                warn!(
                    "event=encode_fallback module=morse status=lossy position={} char={:?}",
                    position, plain
                );
                result.output.push_str(ENCODE_FALLBACK);
                result.fallbacks.push(Fallback {
                    position,
                    source: plain.to_string(),
                });
            }
        }
        result.output.push(' ');
    }

    result
}

/// Decodes a Morse sequence into uppercase plaintext.
pub fn from_morse(sequence: &str) -> String {
    from_morse_report(sequence).output
}

/// Decodes a Morse sequence and reports every unrecognized token.
///
/// Tokens are split on whitespace runs, so leading, trailing, and doubled
/// separators are tolerated.
pub fn from_morse_report(sequence: &str) -> Transcoded {
    let mut result = Transcoded::default();

    for (position, token) in sequence.split_whitespace().enumerate() {
        match char_for(token) {
            Some(plain) => result.output.push(plain),
            None => {
                warn!(
                    "event=decode_fallback module=morse status=lossy position={} token={:?}",
                    position, token
                );
                result.output.push(DECODE_FALLBACK);
                result.fallbacks.push(Fallback {
                    position,
                    source: token.to_string(),
                });
            }
        }
    }

    result
}
