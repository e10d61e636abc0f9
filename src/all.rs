// This is a part of singlebyte.
// See README.md and LICENSE.txt for details.

//! A list of all supported encodings. Useful for encodings fixed in the compile time.

use crate::codec::singlebyte::SingleByteEncoding;
use crate::types::EncodingRef;
use singlebyte_index as index;

macro_rules! singlebyte {
    (var=$var:ident, mod=$module:ident, name=$name:expr) => {
        pub static $var: SingleByteEncoding = SingleByteEncoding {
            name: $name,
            index_forward: index::$module::forward,
        };
    };
}

singlebyte!(var=IBM866, mod=ibm866, name="ibm866");
singlebyte!(var=ISO_8859_2, mod=iso_8859_2, name="iso-8859-2");
singlebyte!(var=ISO_8859_3, mod=iso_8859_3, name="iso-8859-3");
singlebyte!(var=ISO_8859_4, mod=iso_8859_4, name="iso-8859-4");
singlebyte!(var=ISO_8859_5, mod=iso_8859_5, name="iso-8859-5");
singlebyte!(var=ISO_8859_6, mod=iso_8859_6, name="iso-8859-6");
singlebyte!(var=ISO_8859_7, mod=iso_8859_7, name="iso-8859-7");
singlebyte!(var=ISO_8859_8, mod=iso_8859_8, name="iso-8859-8");
singlebyte!(var=ISO_8859_10, mod=iso_8859_10, name="iso-8859-10");
singlebyte!(var=ISO_8859_13, mod=iso_8859_13, name="iso-8859-13");
singlebyte!(var=ISO_8859_14, mod=iso_8859_14, name="iso-8859-14");
singlebyte!(var=ISO_8859_15, mod=iso_8859_15, name="iso-8859-15");
singlebyte!(var=ISO_8859_16, mod=iso_8859_16, name="iso-8859-16");
singlebyte!(var=KOI8_R, mod=koi8_r, name="koi8-r");
singlebyte!(var=KOI8_U, mod=koi8_u, name="koi8-u");
singlebyte!(var=MACINTOSH, mod=macintosh, name="macintosh");
singlebyte!(var=WINDOWS_874, mod=windows_874, name="windows-874");
singlebyte!(var=WINDOWS_1250, mod=windows_1250, name="windows-1250");
singlebyte!(var=WINDOWS_1251, mod=windows_1251, name="windows-1251");
singlebyte!(var=WINDOWS_1252, mod=windows_1252, name="windows-1252");
singlebyte!(var=WINDOWS_1253, mod=windows_1253, name="windows-1253");
singlebyte!(var=WINDOWS_1254, mod=windows_1254, name="windows-1254");
singlebyte!(var=WINDOWS_1255, mod=windows_1255, name="windows-1255");
singlebyte!(var=WINDOWS_1256, mod=windows_1256, name="windows-1256");
singlebyte!(var=WINDOWS_1257, mod=windows_1257, name="windows-1257");
singlebyte!(var=WINDOWS_1258, mod=windows_1258, name="windows-1258");
singlebyte!(var=X_MAC_CYRILLIC, mod=x_mac_cyrillic, name="x-mac-cyrillic");

pub mod whatwg {
    //! Encodings which names are simply different from the canonical ones.

    use crate::codec::singlebyte::SingleByteEncoding;
    use singlebyte_index as index;

    /// ISO-8859-8-I, the logical-order variant of ISO-8859-8.
    /// Shares the decode table with ISO-8859-8 but answers to its own labels.
    pub static ISO_8859_8_I: SingleByteEncoding = SingleByteEncoding {
        name: "iso-8859-8-i",
        index_forward: index::iso_8859_8::forward,
    };
}

static ENCODINGS: &[EncodingRef] = &[
    &IBM866,
    &ISO_8859_2,
    &ISO_8859_3,
    &ISO_8859_4,
    &ISO_8859_5,
    &ISO_8859_6,
    &ISO_8859_7,
    &ISO_8859_8,
    &whatwg::ISO_8859_8_I,
    &ISO_8859_10,
    &ISO_8859_13,
    &ISO_8859_14,
    &ISO_8859_15,
    &ISO_8859_16,
    &KOI8_R,
    &KOI8_U,
    &MACINTOSH,
    &WINDOWS_874,
    &WINDOWS_1250,
    &WINDOWS_1251,
    &WINDOWS_1252,
    &WINDOWS_1253,
    &WINDOWS_1254,
    &WINDOWS_1255,
    &WINDOWS_1256,
    &WINDOWS_1257,
    &WINDOWS_1258,
    &X_MAC_CYRILLIC,
];

/// Returns references to every supported encoding, in a stable order.
pub fn encodings() -> &'static [EncodingRef] {
    ENCODINGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_encoding_is_listed_once() {
        let mut names: Vec<&str> = encodings().iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), 28);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 28);
    }

    #[test]
    fn test_decode_byte_is_total_for_every_encoding() {
        for &enc in encodings() {
            for byte in 0..=0xffu8 {
                let first = enc.decode_byte(byte);
                assert_eq!(first, enc.decode_byte(byte), "{} is not deterministic", enc.name());
            }
        }
    }

    #[test]
    fn test_ascii_transparency_for_every_encoding() {
        for &enc in encodings() {
            for byte in 0..=0x7fu8 {
                assert_eq!(enc.decode_byte(byte), byte as char, "{} fails at {:#04x}", enc.name(), byte);
            }
        }
    }

    #[test]
    fn test_one_fixture_per_encoding() {
        assert_eq!(IBM866.decode_byte(0xc0), '\u{2514}');
        assert_eq!(ISO_8859_2.decode_byte(0xc0), '\u{154}');
        assert_eq!(ISO_8859_3.decode_byte(0xa1), '\u{126}');
        assert_eq!(ISO_8859_4.decode_byte(0xc0), '\u{100}');
        assert_eq!(ISO_8859_5.decode_byte(0xc0), '\u{420}');
        assert_eq!(ISO_8859_6.decode_byte(0xc7), '\u{627}');
        assert_eq!(ISO_8859_7.decode_byte(0xc0), '\u{390}');
        assert_eq!(ISO_8859_8.decode_byte(0xe0), '\u{5d0}');
        assert_eq!(whatwg::ISO_8859_8_I.decode_byte(0xe0), '\u{5d0}');
        assert_eq!(ISO_8859_10.decode_byte(0xc0), '\u{100}');
        assert_eq!(ISO_8859_13.decode_byte(0xc0), '\u{104}');
        assert_eq!(ISO_8859_14.decode_byte(0xa1), '\u{1e02}');
        assert_eq!(ISO_8859_15.decode_byte(0xa4), '\u{20ac}');
        assert_eq!(ISO_8859_16.decode_byte(0xa1), '\u{104}');
        assert_eq!(KOI8_R.decode_byte(0xc0), '\u{44e}');
        assert_eq!(KOI8_U.decode_byte(0xa4), '\u{454}');
        assert_eq!(MACINTOSH.decode_byte(0xf0), '\u{f8ff}');
        assert_eq!(WINDOWS_874.decode_byte(0xc0), '\u{e20}');
        assert_eq!(WINDOWS_1250.decode_byte(0xc0), '\u{154}');
        assert_eq!(WINDOWS_1251.decode_byte(0xc0), '\u{410}');
        assert_eq!(WINDOWS_1252.decode_byte(0x80), '\u{20ac}');
        assert_eq!(WINDOWS_1253.decode_byte(0xe1), '\u{3b1}');
        assert_eq!(WINDOWS_1254.decode_byte(0xf0), '\u{11f}');
        assert_eq!(WINDOWS_1255.decode_byte(0xe0), '\u{5d0}');
        assert_eq!(WINDOWS_1256.decode_byte(0xc0), '\u{6c1}');
        assert_eq!(WINDOWS_1257.decode_byte(0xc0), '\u{104}');
        assert_eq!(WINDOWS_1258.decode_byte(0xd5), '\u{1a0}');
        assert_eq!(X_MAC_CYRILLIC.decode_byte(0xc0), '\u{458}');
    }
}
