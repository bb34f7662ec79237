use curve::{CurveError, DomainParams, Point, random_scalar};
use num_bigint::BigUint;
use rand::CryptoRng;
use serde::{Deserialize, Serialize};

use crate::errors::ElGamalError;

/// An EC-ElGamal ciphertext `(C1, C2)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ciphertext {
    /// `C1 = y * G`
    pub c1: Point,
    /// `C2 = M + y * Q`
    pub c2: Point,
}

/// Encrypts the point `message` to the holder of `public`.
///
/// # Errors
///
/// - [`ElGamalError::InvalidPublicKey`] if `public` is the identity or off the curve
/// - [`ElGamalError::InvalidMessage`] if `message` is off the curve
pub fn encrypt<R: CryptoRng + ?Sized>(
    params: &DomainParams,
    public: &Point,
    message: &Point,
    rng: &mut R,
) -> Result<Ciphertext, ElGamalError> {
    let curve = params.curve();
    if public.is_infinity() || !curve.is_on_curve(public) {
        log::debug!("rejected public key {public}");
        return Err(ElGamalError::InvalidPublicKey);
    }
    if !curve.is_on_curve(message) {
        return Err(ElGamalError::InvalidMessage);
    }

    let ephemeral = random_scalar(rng, params.order())?;
    encrypt_with_ephemeral(params, public, message, &ephemeral)
}

pub(crate) fn encrypt_with_ephemeral(
    params: &DomainParams,
    public: &Point,
    message: &Point,
    ephemeral: &BigUint,
) -> Result<Ciphertext, ElGamalError> {
    let curve = params.curve();
    let c1 = params.mul_generator(ephemeral)?;
    let shared = curve.scalar_mul(public, ephemeral)?;
    let c2 = curve.add(message, &shared)?;
    Ok(Ciphertext { c1, c2 })
}

/// Decrypts a ciphertext with the private scalar `private`.
///
/// # Errors
///
/// - [`CurveError::InvalidScalarRange`] if `private` is outside `[1, q - 1]`
/// - [`ElGamalError::MalformedCiphertext`] if either component is off the curve
pub fn decrypt(
    params: &DomainParams,
    private: &BigUint,
    ciphertext: &Ciphertext,
) -> Result<Point, ElGamalError> {
    if !params.is_valid_scalar(private) {
        return Err(CurveError::InvalidScalarRange.into());
    }

    let curve = params.curve();
    let Ciphertext { c1, c2 } = ciphertext;
    if !curve.is_on_curve(c1) || !curve.is_on_curve(c2) {
        log::debug!("rejected ciphertext ({c1}, {c2})");
        return Err(ElGamalError::MalformedCiphertext);
    }

    let shared = curve.scalar_mul(c1, private)?;
    Ok(curve.add(c2, &curve.negate(&shared))?)
}
