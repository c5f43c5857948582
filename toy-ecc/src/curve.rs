//!
//! Module containing the definition of the curve container
//!

use crate::{field::reduce, Error, Result};
use core::fmt;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Short Weierstrass curve `y² = x³ + ax + b` over the field of integers modulo `p`
///
/// The coefficients are stored as given and reduced modulo `p` wherever they
/// take part in arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Curve {
    /// Coefficient a
    a: BigInt,

    /// Coefficient b
    b: BigInt,

    /// Prime modulus p
    p: BigInt,
}

impl Curve {
    /// Construct the curve from its coefficients and modulus
    ///
    /// These values are not getting verified for validity, see [`Curve::validate`]
    pub const fn new(a: BigInt, b: BigInt, p: BigInt) -> Self {
        Self { a, b, p }
    }

    /// Coefficient a
    #[must_use]
    pub const fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient b
    #[must_use]
    pub const fn b(&self) -> &BigInt {
        &self.b
    }

    /// Field modulus p
    #[must_use]
    pub const fn p(&self) -> &BigInt {
        &self.p
    }

    /// `(4a³ + 27b²) mod p`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCurve`] when `p <= 1`.
    pub fn discriminant(&self) -> Result<BigInt> {
        if !self.has_usable_modulus() {
            return Err(Error::InvalidCurve);
        }

        let a_cubed = &self.a * &self.a * &self.a;
        let b_squared = &self.b * &self.b;

        Ok(reduce(
            &(BigInt::from(4) * a_cubed + BigInt::from(27) * b_squared),
            &self.p,
        ))
    }

    /// Check whether the curve is non-singular, i.e. whether its points form a group
    #[must_use]
    pub fn is_non_singular(&self) -> bool {
        self.discriminant().map_or(false, |d| !d.is_zero())
    }

    /// Consume the curve, returning it only when it is usable for the group law
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCurve`] for a singular curve or a modulus `p <= 1`.
    pub fn validate(self) -> Result<Self> {
        if self.is_non_singular() {
            Ok(self)
        } else {
            log::debug!("rejecting singular curve: {}", self);
            Err(Error::InvalidCurve)
        }
    }

    /// Both sides of the curve equation for `(x, y)`: `(y² mod p, (x³ + ax + b) mod p)`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCurve`] when `p <= 1`.
    pub fn equation_sides(&self, x: &BigInt, y: &BigInt) -> Result<(BigInt, BigInt)> {
        if !self.has_usable_modulus() {
            return Err(Error::InvalidCurve);
        }

        let lhs = reduce(&(y * y), &self.p);
        let rhs = reduce(&(x * x * x + &self.a * x + &self.b), &self.p);

        Ok((lhs, rhs))
    }

    /// Check whether `(x, y)` satisfies the curve equation
    #[must_use]
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        matches!(self.equation_sides(x, y), Ok((lhs, rhs)) if lhs == rhs)
    }

    fn has_usable_modulus(&self) -> bool {
        self.p > BigInt::one()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Curve: y^2 mod {p} = x^3 + {a} x + {b} mod {p}",
            a = self.a,
            b = self.b,
            p = self.p
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn curve(a: i64, b: i64, p: i64) -> Curve {
        Curve::new(BigInt::from(a), BigInt::from(b), BigInt::from(p))
    }

    #[test]
    fn textbook_curve_is_non_singular() {
        let c = curve(2, 2, 17);
        // 4·8 + 27·4 = 140 = 4 (mod 17)
        assert_eq!(c.discriminant(), Ok(BigInt::from(4)));
        assert!(c.is_non_singular());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn vanishing_discriminant_is_singular() {
        // 4·(-27) + 27·4 = 0
        let c = curve(-3, 2, 5);
        assert!(!c.is_non_singular());
        assert_eq!(c.validate(), Err(Error::InvalidCurve));

        assert!(!curve(0, 0, 17).is_non_singular());
    }

    #[test]
    fn unusable_modulus_is_rejected() {
        assert!(!curve(2, 2, 0).is_non_singular());
        assert!(!curve(2, 2, 1).is_non_singular());
        assert!(!curve(2, 2, -17).is_non_singular());
        assert_eq!(curve(2, 2, 0).discriminant(), Err(Error::InvalidCurve));
        assert!(!curve(2, 2, 0).contains(&BigInt::from(0), &BigInt::from(0)));
    }

    #[test]
    fn equation_check() {
        let c = curve(2, 2, 17);
        let (x, y) = (BigInt::from(5), BigInt::from(1));
        assert_eq!(
            c.equation_sides(&x, &y),
            Ok((BigInt::from(1), BigInt::from(1)))
        );
        assert!(c.contains(&x, &y));
        assert!(!c.contains(&x, &BigInt::from(2)));
    }

    #[test]
    fn negative_coefficients_reduce() {
        // a = -15 = 2 (mod 17), b = 19 = 2 (mod 17)
        let c = curve(-15, 19, 17);
        assert!(c.contains(&BigInt::from(5), &BigInt::from(1)));
        assert_eq!(c.discriminant(), curve(2, 2, 17).discriminant());
    }

    #[test]
    fn describe() {
        assert_eq!(
            curve(2, 2, 17).to_string(),
            "Curve: y^2 mod 17 = x^3 + 2 x + 2 mod 17"
        );
    }
}
