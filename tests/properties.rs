// This is a part of singlebyte.
// See README.md and LICENSE.txt for details.

//! Sequence-level decoding properties, checked over arbitrary inputs.

use proptest::prelude::*;

use singlebyte::all;
use singlebyte::label::encoding_from_label;
use singlebyte::DecoderTrap;

proptest! {
    #[test]
    fn decode_lossy_yields_one_scalar_per_byte(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        for &enc in all::encodings() {
            let out = enc.decode_lossy(&bytes);
            prop_assert_eq!(out.chars().count(), bytes.len());
        }
    }

    #[test]
    fn ascii_input_decodes_to_itself(
        bytes in proptest::collection::vec(0u8..0x80, 0..512)
    ) {
        for &enc in all::encodings() {
            let out = enc.decode(&bytes, DecoderTrap::Strict).unwrap();
            prop_assert_eq!(out.as_bytes(), &bytes[..]);
        }
    }

    #[test]
    fn replace_and_ignore_never_fail(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        const REPLACEMENT_CHAR: char = '\u{fffd}';
        for &enc in all::encodings() {
            prop_assert!(enc.decode(&bytes, DecoderTrap::Replace).is_ok());
            prop_assert!(enc.decode(&bytes, DecoderTrap::Ignore).is_ok());
            let (out, replaced) = enc.decode_lossy_counted(&bytes);
            prop_assert!(replaced <= bytes.len());
            prop_assert!(out.chars().filter(|&ch| ch == REPLACEMENT_CHAR).count() >= replaced);
        }
    }
}

#[test]
fn strict_decoding_reports_the_first_unmapped_byte() {
    let enc = encoding_from_label("windows-1252").unwrap();
    let err = enc.decode(b"ok\x81\x81", DecoderTrap::Strict).unwrap_err();
    assert_eq!(err.upto, 3);
}

#[test]
fn decoding_restarts_cleanly_at_any_offset() {
    // Stateless decoding: splitting the input anywhere changes nothing.
    let enc = encoding_from_label("koi8-r").unwrap();
    let input: Vec<u8> = (0u8..=0xff).collect();
    let whole = enc.decode_lossy(&input);
    for split in [1usize, 7, 128, 255] {
        let (head, tail) = input.split_at(split);
        let mut parts = enc.decode_lossy(head);
        parts.push_str(&enc.decode_lossy(tail));
        assert_eq!(parts, whole);
    }
}
