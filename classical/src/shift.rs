//! Shift (Caesar) cipher.
//!
//! ASCII letters rotate within their own case; every other character passes
//! through unchanged.

const ALPHABET_LEN: i64 = 26;

pub fn encrypt(text: &str, key: i64) -> String {
    rotate(text, key.rem_euclid(ALPHABET_LEN) as u8)
}

pub fn decrypt(text: &str, key: i64) -> String {
    let shift = key.rem_euclid(ALPHABET_LEN);
    rotate(text, ((ALPHABET_LEN - shift) % ALPHABET_LEN) as u8)
}

/// Rotates a single character by `shift` places, `shift` in `[0, 26)`.
pub(crate) fn rotate_char(c: char, shift: u8) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = (c as u8 - base + shift) % ALPHABET_LEN as u8;
    (base + offset) as char
}

fn rotate(text: &str, shift: u8) -> String {
    text.chars().map(|c| rotate_char(c, shift)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_caesar() {
        assert_eq!(encrypt("HELLO", 3), "KHOOR");
        assert_eq!(decrypt("KHOOR", 3), "HELLO");
        assert_eq!(encrypt("xyz", 3), "abc");
    }

    #[test]
    fn test_preserves_case_and_punctuation() {
        assert_eq!(encrypt("Hello, World!", 13), "Uryyb, Jbeyq!");
    }

    #[test]
    fn test_key_is_reduced() {
        assert_eq!(encrypt("abc", 29), encrypt("abc", 3));
        assert_eq!(encrypt("abc", -1), "zab");
        assert_eq!(encrypt("abc", 0), "abc");
    }

    proptest! {
        #[test]
        fn decrypt_inverts_encrypt(text in "[ -~]{0,64}", key in any::<i64>()) {
            prop_assert_eq!(decrypt(&encrypt(&text, key), key), text);
        }
    }
}
