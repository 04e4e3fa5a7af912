//! Case-preserving Caesar rotation over the 26-letter ASCII alphabet.
//!
//! This is the correctness anchor for the whole harness: every test case is
//! encoded with [`shift`] and scored against the original phrase, so the
//! transform must be exactly invertible.

/// Rotate every ASCII letter in `text` by `strength` positions within its
/// own case register, wrapping modulo 26. Non-alphabetic characters pass
/// through unchanged. `strength` may be any integer (including negative);
/// it is normalized before use.
pub fn shift(text: &str, strength: i32) -> String {
    let k = strength.rem_euclid(26) as u8;
    text.chars().map(|c| rotate(c, k)).collect()
}

/// Inverse of `shift(_, strength)`.
pub fn unshift(text: &str, strength: i32) -> String {
    shift(text, -strength)
}

fn rotate(c: char, k: u8) -> char {
    let base = if c.is_ascii_lowercase() {
        b'a'
    } else if c.is_ascii_uppercase() {
        b'A'
    } else {
        return c;
    };
    (((c as u8 - base + k) % 26) + base) as char
}

#[cfg(test)]
mod tests {
    use super::{shift, unshift};

    #[test]
    fn shift_rotates_and_preserves_case() {
        assert_eq!(shift("AbC", 1), "BcD");
        assert_eq!(shift("hello world", 4), "lipps asvph");
        assert_eq!(shift("Zz", 1), "Aa");
    }

    #[test]
    fn non_alphabetic_characters_pass_through() {
        assert_eq!(shift("a1b2, c3!", 2), "c1d2, e3!");
        assert_eq!(shift("½ñ→", 13), "½ñ→");
    }

    #[test]
    fn zero_and_full_rotation_are_identity() {
        let t = "The quick brown fox, 1960!";
        assert_eq!(shift(t, 0), t);
        assert_eq!(shift(t, 26), t);
        assert_eq!(shift(t, -26), t);
    }

    #[test]
    fn inverse_round_trip_for_all_strengths() {
        let t = "hi I love you.";
        for s in -30..=30 {
            assert_eq!(shift(&shift(t, s), 26 - s.rem_euclid(26)), t, "strength {}", s);
            assert_eq!(unshift(&shift(t, s), s), t, "strength {}", s);
        }
    }

    #[test]
    fn length_and_character_class_are_preserved() {
        let t = "Attack at dawn; bring 3 torches!";
        for s in [1, 7, 13, 25] {
            let enc = shift(t, s);
            assert_eq!(enc.chars().count(), t.chars().count());
            for (a, b) in t.chars().zip(enc.chars()) {
                assert_eq!(a.is_ascii_alphabetic(), b.is_ascii_alphabetic());
                assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            }
        }
    }
}
