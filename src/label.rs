// This is a part of singlebyte.
// See README.md and LICENSE.txt for details.

//! An interface for retrieving an encoding (or a set of encodings) from a string/numeric label.

use log::debug;

use crate::all;
use crate::types::EncodingRef;

/// Returns an encoding from given label, if any.
///
/// The label set follows the WHATWG Encoding standard's alias lists for the
/// single-byte encodings. Labels are matched after normalization: ASCII
/// whitespace is trimmed, ASCII letters are lowercased and `_` is treated
/// as `-`, so `"WINDOWS_1252"` and `"windows-1252"` resolve identically.
///
/// Unknown labels return `None`; they never fall back to another encoding.
pub fn encoding_from_label(label: &str) -> Option<EncodingRef> {
    let label = normalize(label);
    let enc: Option<EncodingRef> = match &label[..] {
        "866" |
        "cp866" |
        "csibm866" |
        "ibm866" =>
            Some(&all::IBM866),
        "csisolatin2" |
        "iso-8859-2" |
        "iso-8859-2:1987" |
        "iso-ir-101" |
        "iso8859-2" |
        "iso88592" |
        "l2" |
        "latin2" =>
            Some(&all::ISO_8859_2),
        "csisolatin3" |
        "iso-8859-3" |
        "iso-8859-3:1988" |
        "iso-ir-109" |
        "iso8859-3" |
        "iso88593" |
        "l3" |
        "latin3" =>
            Some(&all::ISO_8859_3),
        "csisolatin4" |
        "iso-8859-4" |
        "iso-8859-4:1988" |
        "iso-ir-110" |
        "iso8859-4" |
        "iso88594" |
        "l4" |
        "latin4" =>
            Some(&all::ISO_8859_4),
        "csisolatincyrillic" |
        "cyrillic" |
        "iso-8859-5" |
        "iso-8859-5:1988" |
        "iso-ir-144" |
        "iso8859-5" |
        "iso88595" =>
            Some(&all::ISO_8859_5),
        "arabic" |
        "asmo-708" |
        "csiso88596e" |
        "csiso88596i" |
        "csisolatinarabic" |
        "ecma-114" |
        "iso-8859-6" |
        "iso-8859-6-e" |
        "iso-8859-6-i" |
        "iso-8859-6:1987" |
        "iso-ir-127" |
        "iso8859-6" |
        "iso88596" =>
            Some(&all::ISO_8859_6),
        "csisolatingreek" |
        "ecma-118" |
        "elot-928" |
        "greek" |
        "greek8" |
        "iso-8859-7" |
        "iso-8859-7:1987" |
        "iso-ir-126" |
        "iso8859-7" |
        "iso88597" |
        "sun-eu-greek" =>
            Some(&all::ISO_8859_7),
        "csiso88598e" |
        "csisolatinhebrew" |
        "hebrew" |
        "iso-8859-8" |
        "iso-8859-8-e" |
        "iso-8859-8:1988" |
        "iso-ir-138" |
        "iso8859-8" |
        "iso88598" |
        "visual" =>
            Some(&all::ISO_8859_8),
        "csiso88598i" |
        "iso-8859-8-i" |
        "logical" =>
            Some(&all::whatwg::ISO_8859_8_I),
        "csisolatin6" |
        "iso-8859-10" |
        "iso-ir-157" |
        "iso8859-10" |
        "iso885910" |
        "l6" |
        "latin6" =>
            Some(&all::ISO_8859_10),
        "iso-8859-13" |
        "iso8859-13" |
        "iso885913" =>
            Some(&all::ISO_8859_13),
        "iso-8859-14" |
        "iso8859-14" |
        "iso885914" =>
            Some(&all::ISO_8859_14),
        "csisolatin9" |
        "iso-8859-15" |
        "iso8859-15" |
        "iso885915" |
        "l9" =>
            Some(&all::ISO_8859_15),
        "iso-8859-16" =>
            Some(&all::ISO_8859_16),
        "cskoi8r" |
        "koi" |
        "koi8" |
        "koi8-r" =>
            Some(&all::KOI8_R),
        "koi8-ru" |
        "koi8-u" =>
            Some(&all::KOI8_U),
        "csmacintosh" |
        "mac" |
        "macintosh" |
        "x-mac-roman" =>
            Some(&all::MACINTOSH),
        "dos-874" |
        "iso-8859-11" |
        "iso8859-11" |
        "iso885911" |
        "tis-620" |
        "windows-874" =>
            Some(&all::WINDOWS_874),
        "cp1250" |
        "windows-1250" |
        "x-cp1250" =>
            Some(&all::WINDOWS_1250),
        "cp1251" |
        "windows-1251" |
        "x-cp1251" =>
            Some(&all::WINDOWS_1251),
        "ansi-x3.4-1968" |
        "ascii" |
        "cp1252" |
        "cp819" |
        "csisolatin1" |
        "ibm819" |
        "iso-8859-1" |
        "iso-8859-1:1987" |
        "iso-ir-100" |
        "iso8859-1" |
        "iso88591" |
        "l1" |
        "latin1" |
        "us-ascii" |
        "windows-1252" |
        "x-cp1252" =>
            Some(&all::WINDOWS_1252),
        "cp1253" |
        "windows-1253" |
        "x-cp1253" =>
            Some(&all::WINDOWS_1253),
        "cp1254" |
        "csisolatin5" |
        "iso-8859-9" |
        "iso-8859-9:1989" |
        "iso-ir-148" |
        "iso8859-9" |
        "iso88599" |
        "l5" |
        "latin5" |
        "windows-1254" |
        "x-cp1254" =>
            Some(&all::WINDOWS_1254),
        "cp1255" |
        "windows-1255" |
        "x-cp1255" =>
            Some(&all::WINDOWS_1255),
        "cp1256" |
        "windows-1256" |
        "x-cp1256" =>
            Some(&all::WINDOWS_1256),
        "cp1257" |
        "windows-1257" |
        "x-cp1257" =>
            Some(&all::WINDOWS_1257),
        "cp1258" |
        "windows-1258" |
        "x-cp1258" =>
            Some(&all::WINDOWS_1258),
        "x-mac-cyrillic" |
        "x-mac-ukrainian" =>
            Some(&all::X_MAC_CYRILLIC),
        _ => None,
    };
    if enc.is_none() {
        debug!("unrecognized encoding label {:?}", label);
    }
    enc
}

/// Returns true when `label` resolves to a supported encoding.
pub fn is_supported(label: &str) -> bool {
    encoding_from_label(label).is_some()
}

fn normalize(label: &str) -> String {
    label
        .trim_matches([' ', '\t', '\n', '\r', '\x0c'])
        .chars()
        .map(|ch| if ch == '_' { '-' } else { ch.to_ascii_lowercase() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_labels_resolve() {
        for &enc in crate::all::encodings() {
            let resolved = encoding_from_label(enc.name()).unwrap();
            assert_eq!(resolved.name(), enc.name());
        }
    }

    #[test]
    fn test_labels_are_case_and_separator_insensitive() {
        assert_eq!(encoding_from_label("WINDOWS_1252").unwrap().name(), "windows-1252");
        assert_eq!(encoding_from_label("  Windows-1252\t").unwrap().name(), "windows-1252");
        assert_eq!(encoding_from_label("cp1252").unwrap().name(), "windows-1252");
        assert_eq!(encoding_from_label("KOI8_R").unwrap().name(), "koi8-r");
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(encoding_from_label("latin1").unwrap().name(), "windows-1252");
        assert_eq!(encoding_from_label("iso-8859-1").unwrap().name(), "windows-1252");
        assert_eq!(encoding_from_label("iso-8859-9").unwrap().name(), "windows-1254");
        assert_eq!(encoding_from_label("tis-620").unwrap().name(), "windows-874");
        assert_eq!(encoding_from_label("greek").unwrap().name(), "iso-8859-7");
        assert_eq!(encoding_from_label("866").unwrap().name(), "ibm866");
        assert_eq!(encoding_from_label("logical").unwrap().name(), "iso-8859-8-i");
        assert_eq!(encoding_from_label("x-mac-ukrainian").unwrap().name(), "x-mac-cyrillic");
    }

    #[test]
    fn test_unknown_labels_return_none() {
        assert!(encoding_from_label("iso-8859-99").is_none());
        assert!(encoding_from_label("utf-8").is_none());
        assert!(encoding_from_label("shift_jis").is_none());
        assert!(encoding_from_label("").is_none());
        assert!(!is_supported("iso-8859-99"));
        assert!(is_supported("windows-1251"));
    }
}
