//! Domain parameters: a curve together with a base point and its order.
//!
//! Parameters can be loaded from any serde format through
//! [`DomainParamsConfig`]; loading always re-validates them.

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::field::PrimeField;
use crate::{Curve, Point};

// secp256k1 (SEC 2), little-endian 32-bit digits
const SECP256K1_P: [u32; 8] = [
    0xfffffc2f, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
];
const SECP256K1_N: [u32; 8] = [
    0xd0364141, 0xbfd25e8c, 0xaf48a03b, 0xbaaedce6, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
];
const SECP256K1_GX: [u32; 8] = [
    0x16f81798, 0x59f2815b, 0x2dce28d9, 0x029bfcdb, 0xce870b07, 0x55a06295, 0xf9dcbbac, 0x79be667e,
];
const SECP256K1_GY: [u32; 8] = [
    0xfb10d4b8, 0x9c47d08f, 0xa6855419, 0xfd17b448, 0x0e1108a8, 0x5da4fbfc, 0x26a3c465, 0x483ada77,
];

/// Raw, unvalidated domain parameters as they appear in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParamsConfig {
    /// Field modulus.
    pub p: BigUint,
    /// Curve coefficient `a`.
    pub a: BigUint,
    /// Curve coefficient `b`.
    pub b: BigUint,
    /// Base point x-coordinate.
    pub gx: BigUint,
    /// Base point y-coordinate.
    pub gy: BigUint,
    /// Order of the base point.
    pub order: BigUint,
}

/// A curve, a base point `G` on it and the order `q` of `G`.
///
/// The order is supplied by the caller; it is checked (`q * G = O`) but never
/// derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DomainParamsConfig", into = "DomainParamsConfig")]
pub struct DomainParams {
    curve: Curve,
    generator: Point,
    order: BigUint,
}

impl DomainParams {
    /// Validates and bundles domain parameters.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidGenerator`] if `generator` is the identity or off the curve
    /// - [`CurveError::InvalidOrder`] if `order < 2` or `order * generator` is not the identity
    pub fn new(curve: Curve, generator: Point, order: BigUint) -> Result<Self, CurveError> {
        if generator.is_infinity() || !curve.is_on_curve(&generator) {
            return Err(CurveError::InvalidGenerator);
        }
        if order <= BigUint::one() {
            return Err(CurveError::InvalidOrder);
        }
        if !curve.scalar_mul(&generator, &order)?.is_infinity() {
            return Err(CurveError::InvalidOrder);
        }
        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    /// The 13-element group of `y^2 = x^3 + x + 6` over `F_11` with `G = (2, 7)`.
    pub fn toy() -> Self {
        Self::from_constants(
            BigUint::from(11u32),
            BigUint::from(1u32),
            BigUint::from(6u32),
            BigUint::from(2u32),
            BigUint::from(7u32),
            BigUint::from(13u32),
        )
    }

    /// secp256k1 parameters: `y^2 = x^3 + 7` over the 256-bit prime field.
    pub fn secp256k1() -> Self {
        Self::from_constants(
            BigUint::from_slice(&SECP256K1_P),
            BigUint::from(0u32),
            BigUint::from(7u32),
            BigUint::from_slice(&SECP256K1_GX),
            BigUint::from_slice(&SECP256K1_GY),
            BigUint::from_slice(&SECP256K1_N),
        )
    }

    // Built-in tables are checked by the tests below instead of at every call.
    fn from_constants(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        order: BigUint,
    ) -> Self {
        let field = PrimeField::from_constant(p);
        let generator = Point::Affine {
            x: field.element(&gx),
            y: field.element(&gy),
        };
        Self {
            curve: Curve::from_constants(field, a, b),
            generator,
            order,
        }
    }

    #[inline]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The base point `G`.
    #[inline]
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// The order `q` of the base point.
    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Whether `k` lies in `[1, q - 1]`.
    pub fn is_valid_scalar(&self, k: &BigUint) -> bool {
        *k >= BigUint::one() && *k < self.order
    }

    /// `k * G`.
    pub fn mul_generator(&self, k: &BigUint) -> Result<Point, CurveError> {
        self.curve.scalar_mul(&self.generator, k)
    }
}

impl TryFrom<DomainParamsConfig> for DomainParams {
    type Error = CurveError;

    fn try_from(config: DomainParamsConfig) -> Result<Self, Self::Error> {
        let curve = Curve::new(config.p, config.a, config.b)?;
        let generator = curve
            .point(config.gx, config.gy)
            .map_err(|_| CurveError::InvalidGenerator)?;
        Self::new(curve, generator, config.order)
    }
}

impl From<DomainParams> for DomainParamsConfig {
    fn from(params: DomainParams) -> Self {
        let (gx, gy) = match &params.generator {
            Point::Affine { x, y } => (x.value().clone(), y.value().clone()),
            // DomainParams never holds the identity as its generator
            Point::Infinity => (BigUint::default(), BigUint::default()),
        };
        Self {
            p: params.curve.modulus().clone(),
            a: params.curve.a().value().clone(),
            b: params.curve.b().value().clone(),
            gx,
            gy,
            order: params.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_config() -> DomainParamsConfig {
        DomainParamsConfig {
            p: BigUint::from(11u32),
            a: BigUint::from(1u32),
            b: BigUint::from(6u32),
            gx: BigUint::from(2u32),
            gy: BigUint::from(7u32),
            order: BigUint::from(13u32),
        }
    }

    #[test]
    fn test_toy_preset_is_valid() {
        let preset = DomainParams::toy();
        let checked = DomainParams::try_from(toy_config()).expect("valid");
        assert_eq!(preset, checked);
    }

    #[test]
    fn test_secp256k1_preset_is_valid() {
        let preset = DomainParams::secp256k1();
        let config = DomainParamsConfig::from(preset.clone());
        let checked = DomainParams::try_from(config).expect("valid");
        assert_eq!(preset, checked);
    }

    #[test]
    fn test_secp256k1_two_g() {
        let params = DomainParams::secp256k1();
        let two_g = params.mul_generator(&BigUint::from(2u32)).expect("mul");
        let expected_x = BigUint::parse_bytes(
            b"c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            16,
        )
        .expect("hex");
        assert_eq!(two_g.x().expect("finite").value(), &expected_x);
        assert!(params.curve().is_on_curve(&two_g));
    }

    #[test]
    fn test_rejects_generator_off_curve() {
        let mut config = toy_config();
        config.gy = BigUint::from(6u32);
        assert_eq!(
            DomainParams::try_from(config),
            Err(CurveError::InvalidGenerator)
        );
    }

    #[test]
    fn test_rejects_wrong_order() {
        let mut config = toy_config();
        config.order = BigUint::from(12u32);
        assert_eq!(DomainParams::try_from(config), Err(CurveError::InvalidOrder));

        let mut config = toy_config();
        config.order = BigUint::from(1u32);
        assert_eq!(DomainParams::try_from(config), Err(CurveError::InvalidOrder));
    }

    #[test]
    fn test_rejects_infinity_generator() {
        let curve = Curve::from_u64(11, 1, 6).expect("curve");
        assert_eq!(
            DomainParams::new(curve, Point::Infinity, BigUint::from(13u32)),
            Err(CurveError::InvalidGenerator)
        );
    }

    #[test]
    fn test_rejects_singular_config() {
        let mut config = toy_config();
        config.a = BigUint::from(0u32);
        config.b = BigUint::from(0u32);
        assert_eq!(DomainParams::try_from(config), Err(CurveError::SingularCurve));
    }

    #[test]
    fn test_config_roundtrip_through_bincode() {
        let params = DomainParams::toy();
        let bytes = bincode::serialize(&params).expect("serialize");
        let decoded: DomainParams = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_deserialize_validates() {
        let mut config = toy_config();
        config.order = BigUint::from(7u32);
        let bytes = bincode::serialize(&config).expect("serialize");
        let decoded: Result<DomainParams, _> = bincode::deserialize(&bytes);
        assert!(decoded.is_err());
    }

    #[test]
    fn test_scalar_range() {
        let params = DomainParams::toy();
        assert!(!params.is_valid_scalar(&BigUint::from(0u32)));
        assert!(params.is_valid_scalar(&BigUint::from(1u32)));
        assert!(params.is_valid_scalar(&BigUint::from(12u32)));
        assert!(!params.is_valid_scalar(&BigUint::from(13u32)));
    }
}
