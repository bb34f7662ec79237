//! One-time pad over bytes.

use rand::CryptoRng;

use crate::errors::ClassicalError;

/// Draws a `len`-byte key from a cryptographic random source.
pub fn generate_key<R: CryptoRng + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut key = vec![0u8; len];
    rng.fill_bytes(&mut key);
    key
}

/// XORs `message` with the first `message.len()` bytes of `key`.
///
/// Fails with [`ClassicalError::KeyTooShort`] if the key is shorter than the
/// message.
pub fn encrypt(message: &[u8], key: &[u8]) -> Result<Vec<u8>, ClassicalError> {
    xor(message, key)
}

/// Identical to [`encrypt`]; XOR is its own inverse.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, ClassicalError> {
    xor(ciphertext, key)
}

fn xor(data: &[u8], key: &[u8]) -> Result<Vec<u8>, ClassicalError> {
    if key.len() < data.len() {
        log::debug!("one-time pad key too short: {} < {}", key.len(), data.len());
        return Err(ClassicalError::KeyTooShort {
            key: key.len(),
            message: data.len(),
        });
    }
    Ok(data.iter().zip(key).map(|(d, k)| d ^ k).collect())
}
