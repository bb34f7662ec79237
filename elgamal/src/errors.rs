//! Error types for EC-ElGamal.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur during encryption and decryption.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ElGamalError {
    /// Arithmetic or validation failure in the curve layer.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// The recipient's public key is the identity or not on the curve.
    #[error("public key must be a finite point on the curve")]
    InvalidPublicKey,

    /// The plaintext is not a point on the curve.
    #[error("message is not a point on the curve")]
    InvalidMessage,

    /// A ciphertext component is not a point on the curve.
    #[error("ciphertext component is not a point on the curve")]
    MalformedCiphertext,
}
