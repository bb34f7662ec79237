//! Signing and verifying keys for ECDSA.

use curve::{DomainParams, KeyPair, Point};
use num_bigint::BigUint;
use rand::CryptoRng;
use serde::{Deserialize, Serialize};

use crate::errors::EcdsaError;
use crate::signatures::{self, Signature};

/// A secret signing key: a private scalar `d` in `[1, q - 1]` with its public point.
///
/// Keys are tied to the [`DomainParams`] they were created with; pass the same
/// parameters to every call. A signing key is not serializable; store
/// [`SigningKey::scalar`] and rebuild with [`SigningKey::from_scalar`].
///
/// # Example
///
/// ```
/// use curve::DomainParams;
/// use ecdsa::SigningKey;
///
/// let params = DomainParams::secp256k1();
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&params, &mut rng).expect("keygen");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningKey {
    keys: KeyPair,
}

/// A public verifying key: the point `Q = d * G`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Point,
}

impl SigningKey {
    /// Generates a random signing key.
    pub fn random<R: CryptoRng + ?Sized>(
        params: &DomainParams,
        rng: &mut R,
    ) -> Result<Self, EcdsaError> {
        Ok(Self {
            keys: KeyPair::generate(params, rng)?,
        })
    }

    /// Builds a signing key from a private scalar.
    ///
    /// Fails with [`curve::CurveError::InvalidScalarRange`] unless `d` is in `[1, q - 1]`.
    pub fn from_scalar(params: &DomainParams, d: BigUint) -> Result<Self, EcdsaError> {
        Ok(Self {
            keys: KeyPair::from_private(params, d)?,
        })
    }

    /// The private scalar `d`.
    #[inline]
    pub fn scalar(&self) -> &BigUint {
        self.keys.private_scalar()
    }

    /// Derives the public verifying key.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: self.keys.public_point().clone(),
        }
    }

    /// Signs an integer message.
    ///
    /// # Example
    ///
    /// ```
    /// use curve::DomainParams;
    /// use ecdsa::SigningKey;
    /// use num_bigint::BigUint;
    ///
    /// let params = DomainParams::toy();
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&params, &mut rng).expect("keygen");
    /// let msg = BigUint::from(10u32);
    ///
    /// let signature = signing_key.sign(&params, &mut rng, &msg).expect("signing failed");
    /// assert!(signing_key.verifying_key().verify(&params, &msg, &signature));
    /// ```
    pub fn sign<R: CryptoRng + ?Sized>(
        &self,
        params: &DomainParams,
        rng: &mut R,
        msg: &BigUint,
    ) -> Result<Signature, EcdsaError> {
        signatures::sign(params, self.keys.private_scalar(), msg, rng)
    }

    /// Signs the SHA-256 hash of a byte message.
    pub fn sign_message<R: CryptoRng + ?Sized>(
        &self,
        params: &DomainParams,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Signature, EcdsaError> {
        signatures::sign_message(params, self.keys.private_scalar(), msg, rng)
    }
}

impl VerifyingKey {
    /// Wraps a public point received from outside.
    ///
    /// # Errors
    ///
    /// - [`EcdsaError::InvalidPoint`] if `point` is the identity
    /// - [`curve::CurveError::MalformedPoint`] if `point` is not on the curve
    pub fn from_point(params: &DomainParams, point: Point) -> Result<Self, EcdsaError> {
        if point.is_infinity() {
            return Err(EcdsaError::InvalidPoint);
        }
        params.curve().validate_point(&point)?;
        Ok(Self { point })
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Verifies a signature on an integer message.
    pub fn verify(&self, params: &DomainParams, msg: &BigUint, sig: &Signature) -> bool {
        signatures::verify(params, &self.point, msg, sig)
    }

    /// Verifies a signature on the SHA-256 hash of a byte message.
    pub fn verify_message(&self, params: &DomainParams, msg: &[u8], sig: &Signature) -> bool {
        signatures::verify_message(params, &self.point, msg, sig)
    }
}

impl From<KeyPair> for SigningKey {
    fn from(keys: KeyPair) -> Self {
        Self { keys }
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Equivalent to [`SigningKey::verifying_key`].
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}
