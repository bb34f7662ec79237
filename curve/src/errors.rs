//! Error types for field and curve arithmetic.

use thiserror::Error;

/// Errors raised by field arithmetic, point arithmetic and parameter validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The field modulus is smaller than 3.
    #[error("field modulus must be at least 3")]
    InvalidModulus,

    /// The curve parameters satisfy `4a^3 + 27b^2 = 0 (mod p)`.
    #[error("curve is singular: 4a^3 + 27b^2 = 0 (mod p)")]
    SingularCurve,

    /// An inversion was attempted on a value that is not a unit modulo the modulus.
    ///
    /// For a prime modulus this only happens for zero. Point addition routes this
    /// error even though its case analysis excludes a zero denominator.
    #[error("element is not invertible modulo the modulus")]
    NonInvertibleElement,

    /// A private scalar, nonce or bound lies outside `[1, q - 1]`.
    #[error("scalar outside the range [1, q - 1]")]
    InvalidScalarRange,

    /// A supplied point has coordinates outside the field or does not satisfy
    /// the curve equation.
    #[error("point is not on the curve")]
    MalformedPoint,

    /// The base point is the identity or is not on the curve.
    #[error("generator must be a finite point on the curve")]
    InvalidGenerator,

    /// The group order is smaller than 2 or does not annihilate the generator.
    #[error("order does not annihilate the generator")]
    InvalidOrder,
}
