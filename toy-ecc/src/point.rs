//!
//! Points on a [`Curve`] and the group law
//!

use crate::{
    field::{mod_inv, reduce},
    Curve, Error, Result,
};
use alloc::sync::Arc;
use core::{fmt, ops::Neg};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Coordinates of a curve point
///
/// The group identity (point at infinity) is its own variant, so an affine
/// point which happens to sit at `(0, 0)` is never mistaken for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coordinates {
    /// The point at infinity, neutral element of the group
    Identity,

    /// Affine coordinates, both canonical in `[0, p)`
    Affine {
        /// x-coordinate
        x: BigInt,
        /// y-coordinate
        y: BigInt,
    },
}

/// Point on a short Weierstrass curve
///
/// A point shares its curve through an [`Arc`]; every operation returns a new
/// point on the same curve.
#[derive(Clone, Debug)]
#[must_use]
pub struct Point {
    curve: Arc<Curve>,
    coordinates: Coordinates,
}

impl Point {
    /// The point at infinity on `curve`
    pub fn identity(curve: &Arc<Curve>) -> Self {
        Self {
            curve: Arc::clone(curve),
            coordinates: Coordinates::Identity,
        }
    }

    /// Construct an affine point, reducing its coordinates modulo `p`
    ///
    /// Curve membership is not checked, see [`Point::new_valid`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCurve`] when `curve` is singular.
    pub fn new(curve: &Arc<Curve>, x: BigInt, y: BigInt) -> Result<Self> {
        if !curve.is_non_singular() {
            return Err(Error::InvalidCurve);
        }

        let p = curve.p();
        Ok(Self {
            curve: Arc::clone(curve),
            coordinates: Coordinates::Affine {
                x: reduce(&x, p),
                y: reduce(&y, p),
            },
        })
    }

    /// Construct an affine point which must satisfy the curve equation
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCurve`] when `curve` is singular, [`Error::InvalidPoint`]
    /// when `(x, y)` is not on it.
    pub fn new_valid(curve: &Arc<Curve>, x: BigInt, y: BigInt) -> Result<Self> {
        let point = Self::new(curve, x, y)?;

        if !point.is_valid() {
            log::debug!("point ({}) is not on {}", point, curve);
            return Err(Error::InvalidPoint);
        }

        Ok(point)
    }

    /// Decode coordinates using the `(0, 0)` convention for the identity
    ///
    /// Collaborators which exchange bare coordinate pairs encode the point at
    /// infinity as `(0, 0)`; this maps it back onto [`Coordinates::Identity`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCurve`] when `curve` is singular.
    pub fn from_legacy(curve: &Arc<Curve>, x: BigInt, y: BigInt) -> Result<Self> {
        let point = Self::new(curve, x, y)?;

        match &point.coordinates {
            Coordinates::Affine { x, y } if x.is_zero() && y.is_zero() => {
                Ok(Self::identity(curve))
            }
            _ => Ok(point),
        }
    }

    /// Encode the point as a coordinate pair, the identity becoming `(0, 0)`
    #[must_use]
    pub fn to_legacy(&self) -> (BigInt, BigInt) {
        match &self.coordinates {
            Coordinates::Identity => (BigInt::zero(), BigInt::zero()),
            Coordinates::Affine { x, y } => (x.clone(), y.clone()),
        }
    }

    /// Curve this point lives on
    #[must_use]
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// Point coordinates
    #[must_use]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Affine x-coordinate, `None` for the identity
    #[must_use]
    pub fn x(&self) -> Option<&BigInt> {
        match &self.coordinates {
            Coordinates::Identity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// Affine y-coordinate, `None` for the identity
    #[must_use]
    pub fn y(&self) -> Option<&BigInt> {
        match &self.coordinates {
            Coordinates::Identity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    /// Is this the point at infinity?
    #[must_use]
    pub fn is_identity(&self) -> bool {
        matches!(self.coordinates, Coordinates::Identity)
    }

    /// Does the point satisfy the curve equation? The identity always does.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match &self.coordinates {
            Coordinates::Identity => true,
            Coordinates::Affine { x, y } => self.curve.contains(x, y),
        }
    }

    /// Do both points share a curve?
    #[must_use]
    pub fn same_curve(&self, other: &Point) -> bool {
        Arc::ptr_eq(&self.curve, &other.curve) || self.curve == other.curve
    }

    /// Additive inverse `(x, -y mod p)`
    pub fn negate(&self) -> Point {
        match &self.coordinates {
            Coordinates::Identity => self.clone(),
            Coordinates::Affine { x, y } => {
                let y = reduce(&-y, self.curve.p());
                self.affine(x.clone(), y)
            }
        }
    }

    /// Group addition `self + other`
    ///
    /// # Errors
    ///
    /// [`Error::DomainMismatch`] when the points are on different curves,
    /// [`Error::NoInverseExists`] when a slope denominator is not invertible
    /// (only possible for a composite modulus).
    pub fn add(&self, other: &Point) -> Result<Point> {
        if !self.same_curve(other) {
            return Err(Error::DomainMismatch);
        }

        let ((x1, y1), (x2, y2)) = match (&self.coordinates, &other.coordinates) {
            (Coordinates::Identity, _) => return Ok(other.clone()),
            (_, Coordinates::Identity) => return Ok(self.clone()),
            (Coordinates::Affine { x: x1, y: y1 }, Coordinates::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 {
            // Either P + (-P), or P + P with P of order two
            if y1 != y2 || y1.is_zero() {
                return Ok(Self::identity(&self.curve));
            }
            return self.double();
        }

        let p = self.curve.p();
        let slope = reduce(&((y1 - y2) * mod_inv(&(x1 - x2), p)?), p);
        let x3 = reduce(&(&slope * &slope - x1 - x2), p);
        let y3 = reduce(&(&slope * &(x1 - &x3) - y1), p);

        Ok(self.affine(x3, y3))
    }

    /// Group doubling `2·self`
    ///
    /// # Errors
    ///
    /// [`Error::NoInverseExists`] when `y == 0`: the tangent is vertical and the
    /// point has order two. [`Point::add`] maps that case onto the identity.
    pub fn double(&self) -> Result<Point> {
        let (x, y) = match &self.coordinates {
            Coordinates::Identity => return Ok(self.clone()),
            Coordinates::Affine { x, y } => (x, y),
        };

        if y.is_zero() {
            return Err(Error::NoInverseExists);
        }

        let p = self.curve.p();
        let numerator = BigInt::from(3) * x * x + self.curve.a();
        let denominator = BigInt::from(2) * y;
        let slope = reduce(&(numerator * mod_inv(&denominator, p)?), p);
        let x3 = reduce(&(&slope * &slope - BigInt::from(2) * x), p);
        let y3 = reduce(&(&slope * &(x - &x3) - y), p);

        Ok(self.affine(x3, y3))
    }

    /// Scalar multiplication `scalar·self` by double-and-add
    ///
    /// Bits of `|scalar|` are consumed least significant first; a negative
    /// scalar negates the result.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::NoInverseExists`] from the group law.
    pub fn scalar_multiply(&self, scalar: &BigInt) -> Result<Point> {
        let bits = scalar.bits();

        log::trace!("scalar multiplication over {} bits", bits);

        let mut total = Self::identity(&self.curve);
        let mut doubling = self.clone();
        let mut remaining = scalar.abs();

        for _ in 0..bits {
            if remaining.is_odd() {
                total = total.add(&doubling)?;
            }
            doubling = doubling.add(&doubling)?;
            remaining >>= 1;
        }

        if scalar.is_negative() {
            total = total.negate();
        }

        Ok(total)
    }

    fn affine(&self, x: BigInt, y: BigInt) -> Point {
        Point {
            curve: Arc::clone(&self.curve),
            coordinates: Coordinates::Affine { x, y },
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.same_curve(other) && self.coordinates == other.coordinates
    }
}

impl Eq for Point {}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_legacy();
        write!(f, "x = {} y = {}", x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn textbook() -> Arc<Curve> {
        Arc::new(Curve::new(BigInt::from(2), BigInt::from(2), BigInt::from(17)))
    }

    fn point(curve: &Arc<Curve>, x: i64, y: i64) -> Point {
        Point::new(curve, BigInt::from(x), BigInt::from(y)).unwrap()
    }

    #[test]
    fn membership() {
        let c = textbook();
        assert!(point(&c, 5, 1).is_valid());
        assert!(!point(&c, 5, 2).is_valid());
        assert!(Point::identity(&c).is_valid());
        assert_eq!(
            Point::new_valid(&c, BigInt::from(5), BigInt::from(2)),
            Err(Error::InvalidPoint)
        );
    }

    #[test]
    fn coordinates_are_reduced() {
        let c = textbook();
        assert_eq!(point(&c, 22, -16), point(&c, 5, 1));
    }

    #[test]
    fn singular_curve_has_no_points() {
        let c = Arc::new(Curve::new(BigInt::from(-3), BigInt::from(2), BigInt::from(5)));
        assert_eq!(
            Point::new(&c, BigInt::from(1), BigInt::from(0)),
            Err(Error::InvalidCurve)
        );
    }

    #[test]
    fn doubling() {
        let c = textbook();
        assert_eq!(point(&c, 5, 1).double().unwrap(), point(&c, 6, 3));
        assert!(Point::identity(&c).double().unwrap().is_identity());
    }

    #[test]
    fn addition() {
        let c = textbook();
        let g = point(&c, 5, 1);
        let g2 = point(&c, 6, 3);
        assert_eq!(g.add(&g2).unwrap(), point(&c, 10, 6));
        assert_eq!(g2.add(&g).unwrap(), point(&c, 10, 6));
        assert_eq!(g.add(&g).unwrap(), g2);
    }

    #[test]
    fn identity_is_neutral() {
        let c = textbook();
        let o = Point::identity(&c);
        let g = point(&c, 5, 1);
        assert_eq!(g.add(&o).unwrap(), g);
        assert_eq!(o.add(&g).unwrap(), g);
        assert!(o.add(&o).unwrap().is_identity());
    }

    #[test]
    fn mutual_inverses_sum_to_identity() {
        let c = textbook();
        let g = point(&c, 5, 1);
        assert!(g.add(&point(&c, 5, 16)).unwrap().is_identity());
        assert!(g.add(&-&g).unwrap().is_identity());
    }

    #[test]
    fn points_on_other_curves_do_not_mix() {
        let c = textbook();
        let other = Arc::new(Curve::new(BigInt::from(1), BigInt::from(1), BigInt::from(23)));
        let g = point(&c, 5, 1);
        let h = point(&other, 3, 10);
        assert_eq!(g.add(&h), Err(Error::DomainMismatch));
        assert_ne!(g, point(&other, 5, 1));
    }

    #[test]
    fn equal_curves_behind_different_handles() {
        let g = point(&textbook(), 5, 1);
        let h = point(&textbook(), 6, 3);
        assert_eq!(g.add(&h).unwrap(), point(&textbook(), 10, 6));
    }

    #[test]
    fn order_two_point_at_origin() {
        // y² = x³ + x over F_23 contains the genuine point (0, 0) of order two
        let c = Arc::new(Curve::new(BigInt::from(1), BigInt::from(0), BigInt::from(23)));
        let t = point(&c, 0, 0);
        assert!(t.is_valid());
        assert!(!t.is_identity());
        assert_eq!(t.double(), Err(Error::NoInverseExists));
        assert!(t.add(&t).unwrap().is_identity());
        assert_eq!(t.scalar_multiply(&BigInt::from(1)).unwrap(), t);
        assert!(t.scalar_multiply(&BigInt::from(2)).unwrap().is_identity());
        assert_eq!(t.scalar_multiply(&BigInt::from(3)).unwrap(), t);

        let decoded = Point::from_legacy(&c, BigInt::from(0), BigInt::from(0)).unwrap();
        assert!(decoded.is_identity());
    }

    #[test]
    fn legacy_encoding() {
        let c = textbook();
        assert_eq!(Point::identity(&c).to_legacy(), (BigInt::zero(), BigInt::zero()));
        let g = Point::from_legacy(&c, BigInt::from(5), BigInt::from(1)).unwrap();
        assert_eq!(g.to_legacy(), (BigInt::from(5), BigInt::from(1)));
    }

    #[test]
    fn multiples_of_the_generator() {
        let c = textbook();
        let g = point(&c, 5, 1);
        let expected = [
            (5, 1),
            (6, 3),
            (10, 6),
            (3, 1),
            (9, 16),
            (16, 13),
            (0, 6),
            (13, 7),
            (7, 6),
            (7, 11),
            (13, 10),
            (0, 11),
            (16, 4),
            (9, 1),
            (3, 16),
            (10, 11),
            (6, 14),
            (5, 16),
        ];

        for (n, &(x, y)) in expected.iter().enumerate() {
            let k = BigInt::from(n as i64 + 1);
            assert_eq!(g.scalar_multiply(&k).unwrap(), point(&c, x, y), "{}·G", k);
        }

        assert!(g.scalar_multiply(&BigInt::from(19)).unwrap().is_identity());
        assert_eq!(g.scalar_multiply(&BigInt::from(20)).unwrap(), g);
        assert!(g.scalar_multiply(&BigInt::zero()).unwrap().is_identity());
    }

    #[test]
    fn genuine_point_with_zero_x() {
        let c = textbook();
        let p = point(&c, 0, 6);
        assert!(p.is_valid());
        assert!(!p.is_identity());
    }

    #[test]
    fn negative_scalar() {
        let c = textbook();
        let g = point(&c, 5, 1);
        let minus_three = g.scalar_multiply(&BigInt::from(-3)).unwrap();
        assert_eq!(minus_three, point(&c, 10, 11));
        assert_eq!(minus_three, g.scalar_multiply(&BigInt::from(3)).unwrap().negate());
        let y = minus_three.y().unwrap();
        assert!(*y >= BigInt::zero() && y < c.p());
    }

    #[test]
    fn multi_word_scalars() {
        let c = textbook();
        let g = point(&c, 5, 1);
        let big = (BigInt::one() << 64usize) + BigInt::one();
        let huge = (BigInt::one() << 200usize) + BigInt::from(5);

        assert_eq!(g.scalar_multiply(&BigInt::from(259)).unwrap(), point(&c, 0, 11));
        assert_eq!(g.scalar_multiply(&BigInt::from(-259)).unwrap(), point(&c, 0, 6));
        assert_eq!(g.scalar_multiply(&big).unwrap(), point(&c, 5, 16));
        assert_eq!(g.scalar_multiply(&huge).unwrap(), point(&c, 7, 11));
    }

    #[test]
    fn scalar_multiplication_of_identity() {
        let c = textbook();
        let o = Point::identity(&c);
        assert!(o.scalar_multiply(&BigInt::from(7)).unwrap().is_identity());
        assert!(o.scalar_multiply(&BigInt::from(-7)).unwrap().is_identity());
    }

    #[test]
    fn display() {
        let c = textbook();
        assert_eq!(alloc::format!("{}", point(&c, 5, 1)), "x = 5 y = 1");
        assert_eq!(alloc::format!("{}", Point::identity(&c)), "x = 0 y = 0");
    }
}
