//! Prime field arithmetic over an arbitrary-precision modulus.
//!
//! A [`PrimeField`] carries its modulus explicitly; every operation reduces its
//! result into `[0, p - 1]`. There is no process-wide modulus.

use core::fmt::{self, Display, Formatter};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;

/// Element of a prime field, always held in canonical form `[0, p - 1]`.
///
/// Values are produced by a [`PrimeField`]. A deserialized element has not been
/// checked against any modulus yet; use [`PrimeField::contains`] before trusting it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Canonical integer value.
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The field `Z/pZ` for a prime `p`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Creates the field for `modulus`.
    ///
    /// The modulus must be at least 3 so that `2` is invertible. Primality is not
    /// tested; with a composite modulus some non-zero elements are not units and
    /// [`PrimeField::inverse`] reports them as [`CurveError::NonInvertibleElement`].
    pub fn new(modulus: BigUint) -> Result<Self, CurveError> {
        if modulus < BigUint::from(3u32) {
            return Err(CurveError::InvalidModulus);
        }
        Ok(Self { modulus })
    }

    /// Field for a built-in modulus known to be a prime above 2.
    pub(crate) fn from_constant(modulus: BigUint) -> Self {
        Self { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Reduces an integer into the field.
    #[inline]
    pub fn element(&self, value: &BigUint) -> FieldElement {
        FieldElement(value % &self.modulus)
    }

    #[inline]
    pub fn from_u64(&self, value: u64) -> FieldElement {
        self.element(&BigUint::from(value))
    }

    /// Reduces a signed integer into the field.
    pub fn from_signed(&self, value: &BigInt) -> FieldElement {
        let modulus = BigInt::from(self.modulus.clone());
        let reduced = value.mod_floor(&modulus);
        // mod_floor by a positive modulus is never negative
        FieldElement(reduced.magnitude().clone())
    }

    #[inline]
    pub fn zero(&self) -> FieldElement {
        FieldElement(BigUint::zero())
    }

    #[inline]
    pub fn one(&self) -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Whether `element` is a canonical member of this field.
    #[inline]
    pub fn contains(&self, element: &FieldElement) -> bool {
        element.0 < self.modulus
    }

    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 + &b.0) % &self.modulus)
    }

    pub fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let a = &a.0 % &self.modulus;
        let b = &b.0 % &self.modulus;
        FieldElement((a + &self.modulus - b) % &self.modulus)
    }

    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 * &b.0) % &self.modulus)
    }

    #[inline]
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        self.mul(a, a)
    }

    pub fn neg(&self, a: &FieldElement) -> FieldElement {
        self.sub(&self.zero(), a)
    }

    /// Multiplies by a small constant.
    pub fn mul_u64(&self, a: &FieldElement, k: u64) -> FieldElement {
        FieldElement((&a.0 * k) % &self.modulus)
    }

    /// Returns the unique `y` with `a * y = 1 (mod p)`.
    pub fn inverse(&self, a: &FieldElement) -> Result<FieldElement, CurveError> {
        mod_inverse(&a.0, &self.modulus).map(FieldElement)
    }

    /// `a * b^-1`.
    pub fn div(&self, a: &FieldElement, b: &FieldElement) -> Result<FieldElement, CurveError> {
        let b_inv = self.inverse(b)?;
        Ok(self.mul(a, &b_inv))
    }
}

/// Modular inverse by the extended Euclidean algorithm.
///
/// Fails with [`CurveError::NonInvertibleElement`] when `gcd(a, m) != 1`, which
/// includes `a = 0 (mod m)`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, CurveError> {
    if m.is_zero() {
        return Err(CurveError::InvalidModulus);
    }
    let a = BigInt::from(a % m);
    let m = BigInt::from(m.clone());
    let egcd = a.extended_gcd(&m);
    if !egcd.gcd.is_one() {
        return Err(CurveError::NonInvertibleElement);
    }
    let inv = egcd.x.mod_floor(&m);
    Ok(inv.magnitude().clone())
}
