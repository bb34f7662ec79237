//! Elliptic curve arithmetic over prime fields.
//!
//! This crate provides arbitrary-precision prime field arithmetic, short
//! Weierstrass curves `y^2 = x^3 + a*x + b`, affine points with the group law,
//! domain parameters (curve, base point, order) and key generation. The curve is
//! always an explicit value passed to each operation.

mod affine;
mod errors;
mod field;
mod group;
mod keys;
mod params;
mod random;
mod weierstrass;

pub use affine::Point;
pub use errors::CurveError;
pub use field::{mod_inverse, FieldElement, PrimeField};
pub use keys::KeyPair;
pub use params::{DomainParams, DomainParamsConfig};
pub use random::random_scalar;
pub use weierstrass::Curve;
