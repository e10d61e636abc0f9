// This is a part of singlebyte.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Macros and utilities for testing decode index tables.

/// Makes a common test suite for single-byte decode indices.
///
/// The suite checks the invariants every table in this family must satisfy:
/// all 256 entries hold a valid Unicode scalar value or the `0xffff`
/// sentinel, the ASCII range decodes to itself, and no two byte values
/// decode to the same scalar value (so a canonical encoder can round-trip
/// every defined mapping).
#[macro_export]
macro_rules! single_byte_tests {
    () => {
        mod tests {
            use super::{forward, FORWARD_TABLE};

            #[test]
            fn test_every_entry_is_a_scalar_value_or_sentinel() {
                assert_eq!(FORWARD_TABLE.len(), 256);
                for i in 0..=0xffu8 {
                    let j = forward(i);
                    assert!(
                        j == 0xffff || char::from_u32(j as u32).is_some(),
                        "byte {:#04x} maps to a non-scalar value {:#06x}",
                        i,
                        j
                    );
                }
            }

            #[test]
            fn test_ascii_range_is_transparent() {
                for i in 0..=0x7fu8 {
                    assert_eq!(forward(i), i as u16);
                }
            }

            #[test]
            fn test_defined_mappings_are_unique() {
                for i in 0..256 {
                    if FORWARD_TABLE[i] == 0xffff {
                        continue;
                    }
                    for j in i + 1..256 {
                        assert_ne!(
                            FORWARD_TABLE[i], FORWARD_TABLE[j],
                            "bytes {:#04x} and {:#04x} decode to the same scalar value",
                            i, j
                        );
                    }
                }
            }
        }
    };
}
