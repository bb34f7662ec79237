//! Curve context for `y^2 = x^3 + a*x + b (mod p)`.

use num_bigint::BigUint;

use crate::errors::CurveError;
use crate::field::{FieldElement, PrimeField};
use crate::Point;

/// Immutable description of a short Weierstrass curve over a prime field.
///
/// A `Curve` is a plain value: it is built once, borrowed by every point
/// operation, and never mutated, so any number of curves can be used side by
/// side (including from several threads).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Curve {
    field: PrimeField,
    a: FieldElement,
    b: FieldElement,
}

impl Curve {
    /// Builds the curve `y^2 = x^3 + a*x + b` over `Z/pZ`.
    ///
    /// The coefficients are reduced modulo `p`. Singular parameters
    /// (`4a^3 + 27b^2 = 0 mod p`) are rejected.
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Result<Self, CurveError> {
        let field = PrimeField::new(p)?;
        let a = field.element(&a);
        let b = field.element(&b);
        let curve = Self { field, a, b };
        if curve.discriminant().is_zero() {
            return Err(CurveError::SingularCurve);
        }
        Ok(curve)
    }

    /// Convenience constructor for small curves.
    pub fn from_u64(p: u64, a: u64, b: u64) -> Result<Self, CurveError> {
        Self::new(BigUint::from(p), BigUint::from(a), BigUint::from(b))
    }

    /// Builds a curve from constant parameters that are known to be valid.
    pub(crate) fn from_constants(field: PrimeField, a: BigUint, b: BigUint) -> Self {
        let a = field.element(&a);
        let b = field.element(&b);
        Self { field, a, b }
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// `4a^3 + 27b^2 mod p`.
    pub fn discriminant(&self) -> FieldElement {
        let f = &self.field;
        let a3 = f.mul(&f.square(&self.a), &self.a);
        let b2 = f.square(&self.b);
        f.add(&f.mul_u64(&a3, 4), &f.mul_u64(&b2, 27))
    }

    /// Right-hand side `x^3 + a*x + b`.
    fn rhs(&self, x: &FieldElement) -> FieldElement {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        let ax = f.mul(&self.a, x);
        f.add(&f.add(&x3, &ax), &self.b)
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    ///
    /// The identity is always on the curve. Coordinates outside `[0, p - 1]` are not.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                self.field.contains(x)
                    && self.field.contains(y)
                    && self.field.square(y) == self.rhs(x)
            }
        }
    }

    /// Checks a point received from outside the library.
    pub fn validate_point(&self, point: &Point) -> Result<(), CurveError> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            log::debug!("rejected point off the curve: {point}");
            Err(CurveError::MalformedPoint)
        }
    }

    /// Creates the affine point `(x, y)`, which must satisfy the curve equation.
    ///
    /// Coordinates must already lie in `[0, p - 1]`.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point, CurveError> {
        if &x >= self.modulus() || &y >= self.modulus() {
            return Err(CurveError::MalformedPoint);
        }
        let point = Point::Affine {
            x: self.field.element(&x),
            y: self.field.element(&y),
        };
        self.validate_point(&point)?;
        Ok(point)
    }

    /// Convenience constructor for points on small curves.
    pub fn point_u64(&self, x: u64, y: u64) -> Result<Point, CurveError> {
        self.point(BigUint::from(x), BigUint::from(y))
    }

    /// The identity element.
    #[inline]
    pub fn identity(&self) -> Point {
        Point::Infinity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_singular_curve() {
        // y^2 = x^3 has discriminant 0
        assert_eq!(Curve::from_u64(11, 0, 0), Err(CurveError::SingularCurve));
        // 4*(-3)^3 + 27*2^2 = -108 + 108 = 0
        assert_eq!(Curve::from_u64(11, 8, 2), Err(CurveError::SingularCurve));
    }

    #[test]
    fn test_rejects_small_modulus() {
        assert_eq!(Curve::from_u64(2, 1, 1), Err(CurveError::InvalidModulus));
    }

    #[test]
    fn test_coefficients_are_reduced() {
        let curve = Curve::from_u64(11, 12, 17).expect("curve");
        assert_eq!(curve.a().value(), &BigUint::from(1u32));
        assert_eq!(curve.b().value(), &BigUint::from(6u32));
    }

    #[test]
    fn test_point_on_curve() {
        let curve = Curve::from_u64(11, 1, 6).expect("curve");

        for (x, y) in [(2, 7), (5, 2), (8, 3), (3, 6), (2, 4)] {
            let p = curve.point_u64(x, y).expect("on curve");
            assert!(curve.is_on_curve(&p));
        }
        assert!(curve.is_on_curve(&Point::Infinity));
    }

    #[test]
    fn test_point_off_curve() {
        let curve = Curve::from_u64(11, 1, 6).expect("curve");

        assert_eq!(curve.point_u64(2, 5), Err(CurveError::MalformedPoint));
        assert_eq!(curve.point_u64(13, 7), Err(CurveError::MalformedPoint));
        assert_eq!(curve.point_u64(2, 18), Err(CurveError::MalformedPoint));
    }

    #[test]
    fn test_validate_rejects_unreduced_coordinates() {
        let curve = Curve::from_u64(11, 1, 6).expect("curve");
        let wide = PrimeField::new(BigUint::from(101u32)).expect("field");
        // (13, 7) reduces to (2, 7) mod 11 but is not canonical
        let point = Point::Affine {
            x: wide.from_u64(13),
            y: wide.from_u64(7),
        };
        assert_eq!(curve.validate_point(&point), Err(CurveError::MalformedPoint));
    }
}
