//! Diffie-Hellman key agreement over `Z_p^*`.

use num_bigint::BigUint;

use crate::ModpGroup;

/// `g^private mod p`.
pub fn public_key(group: &ModpGroup, private: &BigUint) -> BigUint {
    group.pow_g(private)
}

/// `received^private mod p`.
pub fn shared_key(group: &ModpGroup, received: &BigUint, private: &BigUint) -> BigUint {
    group.pow(received, private)
}
