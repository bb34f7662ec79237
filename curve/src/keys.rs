//! Key generation for protocols over [`DomainParams`].

use num_bigint::BigUint;
use rand::CryptoRng;

use crate::errors::CurveError;
use crate::random::random_scalar;
use crate::{DomainParams, Point};

/// A private scalar `d` in `[1, q - 1]` and its public point `Q = d * G`.
///
/// The `Debug` output omits the private scalar. There is no serde form: a
/// stored key is its private scalar, rebuilt with [`KeyPair::from_private`].
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private: BigUint,
    public: Point,
}

impl KeyPair {
    /// Generates a key pair with a uniformly random private scalar.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::{DomainParams, KeyPair};
    ///
    /// let params = DomainParams::toy();
    /// let keys = KeyPair::generate(&params, &mut rand::rng()).expect("keygen");
    /// assert!(params.curve().is_on_curve(keys.public_point()));
    /// ```
    pub fn generate<R: CryptoRng + ?Sized>(
        params: &DomainParams,
        rng: &mut R,
    ) -> Result<Self, CurveError> {
        let private = random_scalar(rng, params.order())?;
        let public = params.mul_generator(&private)?;
        log::debug!("generated key pair with public point {public}");
        Ok(Self { private, public })
    }

    /// Rebuilds a key pair from a known private scalar.
    ///
    /// Fails with [`CurveError::InvalidScalarRange`] unless `d` is in `[1, q - 1]`.
    pub fn from_private(params: &DomainParams, private: BigUint) -> Result<Self, CurveError> {
        if !params.is_valid_scalar(&private) {
            return Err(CurveError::InvalidScalarRange);
        }
        let public = params.mul_generator(&private)?;
        Ok(Self { private, public })
    }

    #[inline]
    pub fn private_scalar(&self) -> &BigUint {
        &self.private
    }

    #[inline]
    pub fn public_point(&self) -> &Point {
        &self.public
    }

    /// Splits the pair into `(d, Q)`.
    pub fn into_parts(self) -> (BigUint, Point) {
        (self.private, self.public)
    }
}

impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
