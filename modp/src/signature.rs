//! ElGamal signatures over `Z_p^*`.

use curve::{mod_inverse, random_scalar};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::CryptoRng;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_SIGNING_ATTEMPTS;
use crate::{ModpError, ModpGroup};

/// An ElGamal signature `(gamma, delta)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// `gamma = g^y mod p`
    pub gamma: BigUint,
    /// `delta = (m - x * gamma) * y^-1 mod (p - 1)`
    pub delta: BigUint,
}

/// Signs `message` with the private exponent `private`.
///
/// The nonce `y` is drawn from `[1, p - 2]` and redrawn until it is coprime to
/// `p - 1`.
pub fn sign<R: CryptoRng + ?Sized>(
    group: &ModpGroup,
    private: &BigUint,
    message: &BigUint,
    rng: &mut R,
) -> Result<Signature, ModpError> {
    let n = group.p_minus_one();
    for _ in 0..MAX_SIGNING_ATTEMPTS {
        let nonce = random_scalar(rng, &n)?;
        if nonce.gcd(&n).is_one() {
            return sign_with_nonce(group, private, message, &nonce);
        }
        log::trace!("nonce shares a factor with p - 1, redrawing");
    }

    log::warn!("signing gave up after {MAX_SIGNING_ATTEMPTS} unusable nonces");
    Err(ModpError::NonceRetriesExhausted(MAX_SIGNING_ATTEMPTS))
}

fn sign_with_nonce(
    group: &ModpGroup,
    private: &BigUint,
    message: &BigUint,
    nonce: &BigUint,
) -> Result<Signature, ModpError> {
    let n = group.p_minus_one();
    let gamma = group.pow_g(nonce);
    let nonce_inv = mod_inverse(nonce, &n)?;

    // m - x * gamma, kept non-negative modulo p - 1
    let xg = (private * &gamma) % &n;
    let diff = ((message % &n) + &n - xg) % &n;
    let delta = (diff * nonce_inv) % &n;

    Ok(Signature { gamma, delta })
}

/// Accepts iff `h^gamma * gamma^delta = g^m (mod p)` with `gamma` in
/// `[1, p - 1]` and `delta` in `[0, p - 2]`.
pub fn verify(group: &ModpGroup, public: &BigUint, message: &BigUint, sig: &Signature) -> bool {
    let Signature { gamma, delta } = sig;
    if !group.is_unit_range(gamma) || *delta >= group.p_minus_one() {
        log::debug!("signature component out of range");
        return false;
    }
    let left = group.mul(&group.pow(public, gamma), &group.pow(gamma, delta));
    let right = group.pow_g(message);
    left == right
}
