use hemlis_core::codec::morse::{from_morse, to_morse, to_morse_report};
use hemlis_core::codec::whitespace::{from_whitespace, strip_marker, to_whitespace};
use hemlis_core::model::alphabet::ALPHABET;
use hemlis_core::{decode, decode_report, encode, encode_report, Fallback, MARKER};

#[test]
fn sos_passes_through_both_stages() {
    assert_eq!(to_morse("SOS"), "... --- ... ");

    let hidden = encode("SOS");
    assert_eq!(hidden, to_whitespace("... --- ... "));
    assert!(hidden.starts_with(MARKER));
    assert_eq!(decode(&hidden), "SOS");
}

#[test]
fn word_boundary_becomes_no_break_space() {
    let hidden = encode("HELLO WORLD");
    assert!(hidden.contains('\u{00A0}'));
    assert_eq!(decode(&hidden), "HELLO WORLD");
}

#[test]
fn lowercase_round_trips_as_uppercase() {
    let message = "the quick brown fox jumps over the lazy dog 0123456789";
    assert_eq!(decode(&encode(message)), message.to_uppercase());
}

#[test]
fn nordic_letters_and_punctuation_round_trip() {
    let message = "Åsa, Ärlig (Östen)? 1/2 - 3.";
    assert_eq!(decode(&encode(message)), message.to_uppercase());
}

#[test]
fn whole_alphabet_round_trips() {
    let message = ALPHABET.iter().map(|(plain, _)| *plain).collect::<String>();
    let report = encode_report(&message);
    assert!(report.is_lossless());
    assert_eq!(decode(&report.output), message);
}

#[test]
fn unsupported_character_is_lossy_but_never_fails() {
    let morse = to_morse_report("HI!");
    assert_eq!(morse.output, ".... .. X ");

    let hidden = encode("hi!");
    let decoded = decode_report(&hidden);
    assert_eq!(decoded.output, "HI_");
    assert_eq!(
        decoded.fallbacks,
        vec![Fallback {
            position: 2,
            source: "X".to_string(),
        }]
    );
}

#[test]
fn emoji_is_replaced_by_placeholder() {
    let report = encode_report("\u{1F600}");
    assert_eq!(report.fallbacks.len(), 1);
    assert_eq!(report.fallbacks[0].source, "\u{1F600}");
    assert_eq!(decode(&report.output), "_");
}

#[test]
fn marker_is_present_exactly_once() {
    for message in ["a", "hello world", "?!", "   "] {
        let hidden = encode(message);
        assert!(hidden.starts_with(MARKER), "missing marker for {message:?}");
        assert_eq!(hidden.matches(MARKER).count(), 1);
    }
}

#[test]
fn whitespace_stage_is_a_bijection_on_morse_symbols() {
    let sequence = "-.-. --.- / ..--.. -....-  / ";
    let hidden = to_whitespace(sequence);
    assert_eq!(from_whitespace(strip_marker(&hidden).unwrap()), sequence);
    assert_eq!(from_morse(&from_whitespace(&hidden)), "CQ ?- ");
}

#[test]
fn spaces_only_message_round_trips() {
    assert_eq!(decode(&encode("  ")), "  ");
}
