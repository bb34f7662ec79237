//! ElGamal encryption over `Z_p^*`.

use curve::{mod_inverse, random_scalar};
use num_bigint::BigUint;
use rand::CryptoRng;
use serde::{Deserialize, Serialize};

use crate::{ModpError, ModpGroup};

/// An ElGamal ciphertext `(c1, c2) = (g^y, m * h^y)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ciphertext {
    pub c1: BigUint,
    pub c2: BigUint,
}

/// Encrypts `message` (in `[1, p - 1]`) to the public key `h = g^x`.
///
/// The ephemeral exponent is drawn from `[1, p - 2]`.
pub fn encrypt<R: CryptoRng + ?Sized>(
    group: &ModpGroup,
    public: &BigUint,
    message: &BigUint,
    rng: &mut R,
) -> Result<Ciphertext, ModpError> {
    if !group.is_unit_range(public) || !group.is_unit_range(message) {
        return Err(ModpError::InvalidScalarRange);
    }
    let ephemeral = random_scalar(rng, &group.p_minus_one())?;
    Ok(encrypt_with_ephemeral(group, public, message, &ephemeral))
}

fn encrypt_with_ephemeral(
    group: &ModpGroup,
    public: &BigUint,
    message: &BigUint,
    ephemeral: &BigUint,
) -> Ciphertext {
    let c1 = group.pow_g(ephemeral);
    let shared = group.pow(public, ephemeral);
    let c2 = group.mul(message, &shared);
    Ciphertext { c1, c2 }
}

/// Decrypts with the private exponent `x`: `m = c2 * (c1^x)^-1 mod p`.
pub fn decrypt(
    group: &ModpGroup,
    private: &BigUint,
    ciphertext: &Ciphertext,
) -> Result<BigUint, ModpError> {
    let Ciphertext { c1, c2 } = ciphertext;
    if !group.is_unit_range(c1) || !group.is_unit_range(c2) {
        log::debug!("rejected ciphertext component outside [1, p - 1]");
        return Err(ModpError::MalformedCiphertext);
    }
    let shared = group.pow(c1, private);
    let shared_inv = mod_inverse(&shared, group.p())?;
    Ok(group.mul(c2, &shared_inv))
}
