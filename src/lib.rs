// This is a part of singlebyte.
// See README.md and LICENSE.txt for details.

/*!

# Singlebyte

Single-byte legacy character encoding support for Rust. Each supported
encoding maps every byte value to at most one Unicode scalar value through
an immutable 256-entry table compiled into the binary; decoding is a pure,
stateless table lookup that cannot fail.

## Simple Usage

To decode a byte sequence:

```rust
use singlebyte::DecoderTrap;
use singlebyte::all::WINDOWS_1252;

assert_eq!(WINDOWS_1252.decode(&[99, 97, 102, 233], DecoderTrap::Strict),
           Ok("café".to_string()));
```

To decode a byte sequence with unmapped bytes:

```rust
use singlebyte::DecoderTrap;
use singlebyte::all::WINDOWS_1252;

assert!(WINDOWS_1252.decode(b"Acme\x81", DecoderTrap::Strict).is_err());
assert_eq!(WINDOWS_1252.decode(b"Acme\x81", DecoderTrap::Replace),
           Ok("Acme\u{fffd}".to_string()));
assert_eq!(WINDOWS_1252.decode(b"Acme\x81", DecoderTrap::Ignore),
           Ok("Acme".to_string()));
```

Getting the encoding from a string label:

```rust
use singlebyte::label::encoding_from_label;

let greek = encoding_from_label("greek").unwrap();
assert_eq!(greek.name(), "iso-8859-7");
assert_eq!(greek.decode_lossy(b"\xe1\xe2\xe3"), "αβγ");
```

## Detailed Usage

There are two ways to get an encoding:

* `singlebyte::all` has static items for every supported encoding.
  You should use them when the encoding would not change or only a handful
  of them are required. Combined with link-time optimization, any unused
  encoding would be discarded from the binary.
* `singlebyte::label` has functions to dynamically get an encoding from a
  given string ("label"). They will return a static reference to the
  encoding, which type is also known as `EncodingRef`. Label matching is
  case- and separator-insensitive, and an unknown label is reported as
  `None` rather than silently mapped to some fallback encoding.

Decoding one byte at a time is done with `decode_byte` (total, substitutes
U+FFFD for unmapped bytes) or `lookup` (returns `None` for unmapped bytes,
so they stay distinguishable from a legitimate U+FFFD mapping). Whole
sequences go through `decode` with a `DecoderTrap` error policy, or through
the infallible `decode_lossy`/`decode_lossy_counted`.

## Supported Encodings

All single-byte encodings in the WHATWG Encoding standard:

* IBM code page 866
* ISO 8859-{2,3,4,5,6,7,8,10,13,14,15,16} and ISO-8859-8-I
* KOI8-R, KOI8-U
* MacRoman (`macintosh`), Macintosh Cyrillic encoding (`x-mac-cyrillic`)
* Windows code pages 874, 1250, 1251, 1252 (resolving the ISO 8859-1
  labels), 1253, 1254 (resolving the ISO 8859-9 labels), 1255, 1256,
  1257, 1258

Multi-byte and stateful encodings are out of scope, as are encoding
detection and transliteration.

*/

pub use crate::codec::singlebyte::SingleByteEncoding;
pub use crate::types::{CodecError, DecoderTrap, EncodingRef};

pub mod types;

/// Codec implementations.
pub mod codec {
    pub mod singlebyte;
}

pub mod all;
pub mod diag;
pub mod label;
