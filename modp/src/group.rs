use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::ModpError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct ModpGroupConfig {
    p: BigUint,
    g: BigUint,
}

/// The group `Z_p^*` with a chosen generator `g`.
///
/// Primality of `p` and the order of `g` are the caller's responsibility; a
/// composite modulus surfaces as [`ModpError::NonInvertibleElement`] when an
/// inverse does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModpGroupConfig", into = "ModpGroupConfig")]
pub struct ModpGroup {
    p: BigUint,
    g: BigUint,
}

impl ModpGroup {
    /// Requires `p >= 3` and `1 < g < p`.
    pub fn new(p: BigUint, g: BigUint) -> Result<Self, ModpError> {
        if p < BigUint::from(3u32) || g <= BigUint::one() || g >= p {
            return Err(ModpError::InvalidGroup);
        }
        Ok(Self { p, g })
    }

    pub fn from_u64(p: u64, g: u64) -> Result<Self, ModpError> {
        Self::new(BigUint::from(p), BigUint::from(g))
    }

    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    #[inline]
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// `p - 1`, the exponent modulus.
    pub fn p_minus_one(&self) -> BigUint {
        &self.p - 1u32
    }

    /// `base^exp mod p`.
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.p)
    }

    /// `g^exp mod p`.
    pub fn pow_g(&self, exp: &BigUint) -> BigUint {
        self.pow(&self.g, exp)
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Whether `v` lies in `[1, p - 1]`.
    pub fn is_unit_range(&self, v: &BigUint) -> bool {
        !v.is_zero() && *v < self.p
    }
}

impl TryFrom<ModpGroupConfig> for ModpGroup {
    type Error = ModpError;

    fn try_from(config: ModpGroupConfig) -> Result<Self, Self::Error> {
        Self::new(config.p, config.g)
    }
}

impl From<ModpGroup> for ModpGroupConfig {
    fn from(group: ModpGroup) -> Self {
        Self {
            p: group.p,
            g: group.g,
        }
    }
}
