use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::field::FieldElement;

/// Point on a short Weierstrass curve in affine coordinates, or the point at
/// infinity (the group identity).
///
/// Points carry no reference to their curve; every operation goes through a
/// [`Curve`](crate::Curve) value. Finite points produced by curve operations
/// satisfy the curve equation. Points obtained any other way (deserialization,
/// direct construction) should be checked with
/// [`Curve::validate_point`](crate::Curve::validate_point).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// The identity element.
    #[default]
    Infinity,
    /// A finite point `(x, y)`.
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The x-coordinate, or `None` for the identity.
    #[inline]
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate, or `None` for the identity.
    #[inline]
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => f.write_str("O"),
            Point::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}
