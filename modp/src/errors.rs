//! Error types for the integer-group protocols.

use curve::CurveError;
use thiserror::Error;

/// Errors raised by Diffie-Hellman and ElGamal over `Z_p^*`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ModpError {
    /// The modulus is below 3 or the generator is outside `(1, p)`.
    #[error("group parameters require p >= 3 and 1 < g < p")]
    InvalidGroup,

    /// A value is not a unit modulo the modulus.
    #[error("element is not invertible modulo the modulus")]
    NonInvertibleElement,

    /// A private exponent, message or nonce lies outside its allowed range.
    #[error("value outside the allowed range")]
    InvalidScalarRange,

    /// A ciphertext component is outside `[1, p - 1]`.
    #[error("ciphertext component outside [1, p - 1]")]
    MalformedCiphertext,

    /// Every nonce drawn within the attempt limit was unusable.
    #[error("no usable nonce after {0} attempts")]
    NonceRetriesExhausted(u32),
}

impl From<CurveError> for ModpError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::NonInvertibleElement => ModpError::NonInvertibleElement,
            CurveError::InvalidModulus => ModpError::InvalidGroup,
            _ => ModpError::InvalidScalarRange,
        }
    }
}
