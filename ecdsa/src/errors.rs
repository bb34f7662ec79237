//! Error types for ECDSA signing and key handling.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur while creating keys or signatures.
///
/// Verification never fails with an error: an invalid signature, key or
/// message simply does not verify.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EcdsaError {
    /// Arithmetic or validation failure in the curve layer, including a private
    /// scalar outside `[1, q - 1]` ([`CurveError::InvalidScalarRange`]).
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// The verifying key is the point at infinity.
    #[error("verifying key is the point at infinity")]
    InvalidPoint,

    /// Every nonce drawn within the attempt limit was degenerate.
    ///
    /// This indicates a broken random source or unusable domain parameters.
    #[error("no usable nonce after {0} attempts")]
    NonceRetriesExhausted(u32),
}
