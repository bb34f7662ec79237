//! ECDSA signature generation and verification.

use curve::{CurveError, DomainParams, Point, mod_inverse, random_scalar};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::CryptoRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{DIGEST_BITS, MAX_SIGNING_ATTEMPTS};
use crate::errors::EcdsaError;

/// An ECDSA signature `(r, s)`.
///
/// Both components are in `[1, q - 1]` for signatures produced by this crate.
/// Signatures received from elsewhere are range-checked by [`verify`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// `r = x(y * G) mod q`, where `y` is the signing nonce
    pub r: BigUint,
    /// `s = y^-1 * (m + d * r) mod q`, where `d` is the signing key
    pub s: BigUint,
}

/// Why a nonce was discarded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum DegenerateNonce {
    PointAtInfinity,
    ZeroR,
    ZeroS,
    NotInvertible,
}

/// Signs the integer message `msg` with the private scalar `private`.
///
/// Draws a fresh nonce `y` from `[1, q - 1]` for every attempt and retries while
/// the nonce is degenerate (`y * G = O`, `r = 0` or `s = 0`). Nonces are never
/// reused: two signatures sharing a nonce reveal the private key.
///
/// # Errors
///
/// - [`CurveError::InvalidScalarRange`] if `private` is outside `[1, q - 1]`
/// - [`EcdsaError::NonceRetriesExhausted`] if [`MAX_SIGNING_ATTEMPTS`] nonces were all degenerate
pub fn sign<R: CryptoRng + ?Sized>(
    params: &DomainParams,
    private: &BigUint,
    msg: &BigUint,
    rng: &mut R,
) -> Result<Signature, EcdsaError> {
    if !params.is_valid_scalar(private) {
        return Err(CurveError::InvalidScalarRange.into());
    }

    for attempt in 1..=MAX_SIGNING_ATTEMPTS {
        let nonce = random_scalar(rng, params.order())?;
        match sign_with_nonce(params, private, msg, &nonce)? {
            Ok(signature) => return Ok(signature),
            Err(reason) => log::debug!("discarding degenerate nonce ({reason:?}), attempt {attempt}"),
        }
    }

    log::warn!("signing gave up after {MAX_SIGNING_ATTEMPTS} degenerate nonces");
    Err(EcdsaError::NonceRetriesExhausted(MAX_SIGNING_ATTEMPTS))
}

/// One signing attempt with a caller-chosen nonce.
///
/// The outer `Result` carries arithmetic failures; the inner one reports a
/// degenerate nonce that the caller should replace.
pub(crate) fn sign_with_nonce(
    params: &DomainParams,
    private: &BigUint,
    msg: &BigUint,
    nonce: &BigUint,
) -> Result<Result<Signature, DegenerateNonce>, EcdsaError> {
    let q = params.order();

    let commitment = params.mul_generator(nonce)?;
    let Some(x) = commitment.x() else {
        return Ok(Err(DegenerateNonce::PointAtInfinity));
    };

    let r = x.value() % q;
    if r.is_zero() {
        return Ok(Err(DegenerateNonce::ZeroR));
    }

    let nonce_inv = match mod_inverse(nonce, q) {
        Ok(inv) => inv,
        Err(CurveError::NonInvertibleElement) => return Ok(Err(DegenerateNonce::NotInvertible)),
        Err(e) => return Err(e.into()),
    };

    let s = (nonce_inv * ((msg % q) + private * &r)) % q;
    if s.is_zero() {
        return Ok(Err(DegenerateNonce::ZeroS));
    }

    Ok(Ok(Signature { r, s }))
}

/// Verifies `signature` on the integer message `msg` against the public point `public`.
///
/// Returns `false` for any invalid input: `r` or `s` outside `[1, q - 1]`, a
/// public point that is the identity or off the curve, or a failed signature
/// equation. Never panics and never errors.
pub fn verify(params: &DomainParams, public: &Point, msg: &BigUint, signature: &Signature) -> bool {
    let Signature { r, s } = signature;
    if !params.is_valid_scalar(r) || !params.is_valid_scalar(s) {
        log::debug!("signature component out of range");
        return false;
    }
    if public.is_infinity() || params.curve().validate_point(public).is_err() {
        return false;
    }

    match recover_r(params, public, msg, r, s) {
        Ok(Some(v)) => v == *r,
        Ok(None) => false,
        Err(e) => {
            log::debug!("verification arithmetic failed: {e}");
            false
        }
    }
}

/// Computes `x(u1 * G + u2 * Q) mod q`, or `None` if the sum is the identity.
fn recover_r(
    params: &DomainParams,
    public: &Point,
    msg: &BigUint,
    r: &BigUint,
    s: &BigUint,
) -> Result<Option<BigUint>, CurveError> {
    let q = params.order();
    let w = mod_inverse(s, q)?;
    let u1 = (msg % q) * &w % q;
    let u2 = r * &w % q;

    let point = params
        .curve()
        .multi_scalar_mul(&[(params.generator(), &u1), (public, &u2)])?;

    Ok(point.x().map(|x| x.value() % q))
}

/// Hashes a byte message to an integer for signing.
///
/// The SHA-256 digest is read as a big-endian integer and truncated to its
/// leftmost `bits(q)` bits when the group order is shorter than the digest.
pub fn hash_message(params: &DomainParams, msg: &[u8]) -> BigUint {
    let digest = Sha256::digest(msg);
    let e = BigUint::from_bytes_be(&digest);
    let order_bits = params.order().bits();
    if order_bits < DIGEST_BITS {
        e >> (DIGEST_BITS - order_bits)
    } else {
        e
    }
}

/// Signs the SHA-256 hash of a byte message.
pub fn sign_message<R: CryptoRng + ?Sized>(
    params: &DomainParams,
    private: &BigUint,
    msg: &[u8],
    rng: &mut R,
) -> Result<Signature, EcdsaError> {
    sign(params, private, &hash_message(params, msg), rng)
}

/// Verifies a signature made with [`sign_message`].
pub fn verify_message(
    params: &DomainParams,
    public: &Point,
    msg: &[u8],
    signature: &Signature,
) -> bool {
    verify(params, public, &hash_message(params, msg), signature)
}
