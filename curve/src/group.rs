//! Group law for points on a [`Curve`].

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::errors::CurveError;
use crate::{Curve, Point};

impl Curve {
    /// Negate a point: `(x, y) -> (x, -y)`.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: self.field().neg(y),
            },
        }
    }

    /// Point addition: `P + Q`.
    ///
    /// The only error is [`CurveError::NonInvertibleElement`] from the chord
    /// slope, which cannot occur once equal x-coordinates have been handled.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point, CurveError> {
        let (x1, y1, x2, y2) = match (p, q) {
            (Point::Infinity, _) => return Ok(q.clone()),
            (_, Point::Infinity) => return Ok(p.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double(p);
            }
            // Q = -P
            return Ok(Point::Infinity);
        }

        let f = self.field();

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = f.div(&f.sub(y2, y1), &f.sub(x2, x1))?;

        // x3 = λ^2 - x1 - x2
        let x3 = f.sub(&f.sub(&f.square(&lambda), x1), x2);

        // y3 = λ(x1 - x3) - y1
        let y3 = f.sub(&f.mul(&lambda, &f.sub(x1, &x3)), y1);

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Point doubling: `2P`.
    pub fn double(&self, p: &Point) -> Result<Point, CurveError> {
        let (x, y) = match p {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Affine { x, y } => (x, y),
        };

        // vertical tangent at a 2-torsion point
        if y.is_zero() {
            return Ok(Point::Infinity);
        }

        let f = self.field();

        // λ = (3x^2 + a) / (2y)
        let numerator = f.add(&f.mul_u64(&f.square(x), 3), self.a());
        let denominator = f.mul_u64(y, 2);
        let lambda = f.div(&numerator, &denominator)?;

        // x3 = λ^2 - 2x
        let x3 = f.sub(&f.square(&lambda), &f.mul_u64(x, 2));

        // y3 = λ(x - x3) - y
        let y3 = f.sub(&f.mul(&lambda, &f.sub(x, &x3)), y);

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// `P - Q`.
    pub fn sub(&self, p: &Point, q: &Point) -> Result<Point, CurveError> {
        self.add(p, &self.negate(q))
    }

    /// Scalar multiplication `k * P`, double-and-add from the most significant bit.
    ///
    /// Runs one doubling per bit of `k` and at most one addition per set bit.
    pub fn scalar_mul(&self, p: &Point, k: &BigUint) -> Result<Point, CurveError> {
        if p.is_infinity() || k.is_zero() {
            return Ok(Point::Infinity);
        }

        let mut result = Point::Infinity;
        for i in (0..k.bits()).rev() {
            result = self.double(&result)?;
            if k.bit(i) {
                result = self.add(&result, p)?;
            }
        }

        Ok(result)
    }

    /// Scalar multiplication by a signed integer: `k * P`, with
    /// `(-k) * P = k * (-P)`.
    pub fn scalar_mul_signed(&self, p: &Point, k: &BigInt) -> Result<Point, CurveError> {
        match k.sign() {
            Sign::Minus => self.scalar_mul(&self.negate(p), k.magnitude()),
            Sign::NoSign | Sign::Plus => self.scalar_mul(p, k.magnitude()),
        }
    }

    pub fn mul_u64(&self, p: &Point, n: u64) -> Result<Point, CurveError> {
        self.scalar_mul(p, &BigUint::from(n))
    }

    /// Computes `sum(k_i * P_i)`.
    pub fn multi_scalar_mul(&self, terms: &[(&Point, &BigUint)]) -> Result<Point, CurveError> {
        let mut result = Point::Infinity;
        for (point, scalar) in terms {
            let term = self.scalar_mul(point, scalar)?;
            result = self.add(&result, &term)?;
        }
        Ok(result)
    }
}
