//! Fixed plaintext <-> Morse symbol alphabet.
//!
//! # Responsibility
//! - Own the 39 supported plaintext characters and their Morse codes.
//! - Provide forward and reverse lookups built once per process.
//!
//! # Invariants
//! - The mapping is injective: no two characters share a code.
//! - Letters are uppercase only; callers upper-case before lookup.
//! - Tables are read-only after first access.

use crate::model::morse::WORD_SEPARATOR;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Supported plaintext characters paired with their Morse codes.
pub const ALPHABET: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('Å', ".--.-"),
    ('Ä', ".-.-"),
    ('Ö', "---."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (',', "--..--"),
    ('.', ".-.-.-"),
    ('?', "..--.."),
    ('/', "-..-."),
    ('-', "-....-"),
    ('(', "-.--."),
    (')', "-.--.-"),
];

static CHAR_TO_MORSE: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| ALPHABET.iter().copied().collect());

static MORSE_TO_CHAR: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    let mut reverse = ALPHABET
        .iter()
        .map(|&(plain, code)| (code, plain))
        .collect::<HashMap<_, _>>();
    reverse.insert(WORD_SEPARATOR, ' ');
    reverse
});

/// Returns the Morse code for one uppercase plaintext character.
pub fn morse_for(plain: char) -> Option<&'static str> {
    CHAR_TO_MORSE.get(&plain).copied()
}

/// Returns the plaintext character for one Morse token.
///
/// The word-separator token `/` maps back to a literal space.
pub fn char_for(token: &str) -> Option<char> {
    MORSE_TO_CHAR.get(token).copied()
}
