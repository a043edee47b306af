use tracing::trace;

/// Value of a single callsign character in the WSPR packing alphabet.
///
/// Digits map to 0-9, letters (either case) to 10-35 and space to 36.
/// Any other byte maps to 0, matching the permissive fallback in WSJT-X
/// and derived encoders.
pub fn character_value(ch: u8) -> u32 {
    if ch.is_ascii_digit() {
        return (ch - b'0') as u32;
    }
    if ch.is_ascii_alphabetic() {
        return (ch.to_ascii_uppercase() - b'A') as u32 + 10;
    }
    if ch == b' ' {
        return 36;
    }
    0
}

/// Normalize a callsign into the fixed six-character field expected by the
/// packing cascade, which requires the separating digit in the third slot.
///
/// A callsign with a digit in its second position ("K1ABC") shifts one slot
/// right; one with a digit in its third position ("AA0NT") copies as is.
/// Characters beyond the copied window are dropped. A callsign matching
/// neither shape leaves all six slots blank, so it packs identically to an
/// absent callsign; deployed encoders transmit such messages rather than
/// rejecting them, and this implementation keeps that behavior.
fn callsign_slots(callsign: &str) -> [u8; 6] {
    let bytes = callsign.as_bytes();
    let mut slots = [b' '; 6];

    if bytes.len() >= 2 && bytes[1].is_ascii_digit() {
        let count = bytes.len().min(5);
        slots[1..1 + count].copy_from_slice(&bytes[..count]);
    } else if bytes.len() >= 3 && bytes[2].is_ascii_digit() {
        let count = bytes.len().min(6);
        slots[..count].copy_from_slice(&bytes[..count]);
    }

    slots
}

/// Pack a callsign into the 28-bit N field.
///
/// Mixed-radix cascade over the six slots: radix 36 covers the leading
/// alphanumeric, radix 10 the mandatory digit, and the three trailing
/// slots use radix 27 with letters at 0-25 and space at 26, hence the
/// offset of 10 subtracted from their character values. Arithmetic wraps
/// modulo 2^32 when an out-of-alphabet character drives a slot value to 0,
/// which keeps the output bit-compatible with deployed encoders.
pub fn pack_callsign_into_28bits(callsign: &str) -> u32 {
    let slots = callsign_slots(callsign);
    trace!(slots = %String::from_utf8_lossy(&slots), "callsign slot layout");

    let mut n = character_value(slots[0]) * 36 + character_value(slots[1]);
    n = n * 10 + character_value(slots[2]);
    n = n
        .wrapping_mul(27)
        .wrapping_add(character_value(slots[3]))
        .wrapping_sub(10);
    n = n
        .wrapping_mul(27)
        .wrapping_add(character_value(slots[4]))
        .wrapping_sub(10);
    n = n
        .wrapping_mul(27)
        .wrapping_add(character_value(slots[5]))
        .wrapping_sub(10);
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    mod character_values {
        use super::*;

        macro_rules! test_character_value {
            ($name:ident, $ch:expr, $value:expr) => {
                paste::item! {
                    #[test]
                    fn [< value_of_ $name _should_be_ $value >]() {
                        assert_eq!(character_value($ch), $value);
                    }
                }
            };
        }

        test_character_value!(zero, b'0', 0);
        test_character_value!(nine, b'9', 9);
        test_character_value!(uppercase_a, b'A', 10);
        test_character_value!(uppercase_z, b'Z', 35);
        test_character_value!(lowercase_a, b'a', 10);
        test_character_value!(lowercase_z, b'z', 35);
        test_character_value!(space, b' ', 36);
        test_character_value!(asterisk, b'*', 0);
        test_character_value!(slash, b'/', 0);
    }

    mod slot_layout {
        use super::*;

        #[test]
        fn digit_in_second_position_shifts_right() {
            assert_eq!(callsign_slots("K1ABC"), *b" K1ABC");
        }

        #[test]
        fn digit_in_third_position_copies_in_place() {
            assert_eq!(callsign_slots("AA0NT"), *b"AA0NT ");
        }

        #[test]
        fn short_callsign_pads_with_spaces() {
            assert_eq!(callsign_slots("K1A"), *b" K1A  ");
        }

        #[test]
        fn shifted_callsign_drops_characters_past_five() {
            assert_eq!(callsign_slots("A1BCDEF"), *b" A1BCD");
        }

        #[test]
        fn unshifted_callsign_drops_characters_past_six() {
            assert_eq!(callsign_slots("VE3ABCDE"), *b"VE3ABC");
        }

        #[test]
        fn callsign_without_separating_digit_packs_blank() {
            assert_eq!(callsign_slots("ABCDEF"), *b"      ");
        }

        #[test]
        fn single_character_callsign_packs_blank() {
            assert_eq!(callsign_slots("Q"), *b"      ");
        }
    }

    mod packed_28bits {
        use super::*;

        macro_rules! test_pack28bits {
            ($name:ident, $callsign:expr, $packed28:expr) => {
                paste::item! {
                    #[test]
                    fn [< with_ $name _packed_28bits_should_be_ $packed28 >]() {
                        assert_eq!(pack_callsign_into_28bits($callsign), $packed28);
                    }
                }
            };
        }

        test_pack28bits!(aa0nt, "AA0NT", 72837116);
        test_pack28bits!(k1abc, "K1ABC", 259047992);
        test_pack28bits!(k1a, "K1A", 259048691);
        test_pack28bits!(n6ab, "N6AB", 259736921);
        test_pack28bits!(g1abc, "G1ABC", 258260672);
        test_pack28bits!(ka1bcd, "KA1BCD", 143706369);
        test_pack28bits!(q1, "Q1", 260248625);
        test_pack28bits!(digits_73, "73", 256548221);
        test_pack28bits!(no_digit_fallback, "ABCDEF", 262905830);

        #[test]
        fn dropped_trailing_characters_do_not_change_packing() {
            assert_eq!(
                pack_callsign_into_28bits("VE3ABCDE"),
                pack_callsign_into_28bits("VE3ABC")
            );
            assert_eq!(
                pack_callsign_into_28bits("A1BCDEF"),
                pack_callsign_into_28bits("A1BCDE")
            );
        }

        #[test]
        fn blank_fallbacks_pack_alike() {
            // No separating digit and too-short callsigns both pack as six spaces
            assert_eq!(
                pack_callsign_into_28bits("ABCDEF"),
                pack_callsign_into_28bits("Q")
            );
            assert_eq!(
                pack_callsign_into_28bits("ABCDEF"),
                pack_callsign_into_28bits("9")
            );
        }
    }
}
