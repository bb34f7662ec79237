//! Vigenère cipher.
//!
//! Each letter of the key (case-insensitive) gives a shift. The key position
//! advances only on letters of the text, so spaces and punctuation do not
//! consume key material.

use crate::errors::ClassicalError;
use crate::shift::rotate_char;

/// Fails with [`ClassicalError::InvalidKey`] if `key` is empty or contains a
/// non-letter.
pub fn encrypt(text: &str, key: &str) -> Result<String, ClassicalError> {
    let shifts = key_shifts(key)?;
    Ok(apply(text, &shifts, |s| s))
}

pub fn decrypt(text: &str, key: &str) -> Result<String, ClassicalError> {
    let shifts = key_shifts(key)?;
    Ok(apply(text, &shifts, |s| (26 - s) % 26))
}

fn key_shifts(key: &str) -> Result<Vec<u8>, ClassicalError> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ClassicalError::InvalidKey);
    }
    Ok(key.bytes().map(|b| b.to_ascii_lowercase() - b'a').collect())
}

fn apply(text: &str, shifts: &[u8], adjust: impl Fn(u8) -> u8) -> String {
    let mut position = 0;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let shift = adjust(shifts[position % shifts.len()]);
                position += 1;
                rotate_char(c, shift)
            } else {
                c
            }
        })
        .collect()
}
