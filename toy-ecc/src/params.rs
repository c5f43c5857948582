//!
//! Domain parameters: the curve, a base point and the order of that point
//!

use crate::{Curve, Point, Result, SigningKey};
use alloc::sync::Arc;
use hex_literal::hex;
use num_bigint::{BigInt, Sign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Domain parameters of the signature and encryption schemes
///
/// These values are not getting verified for validity until a curve or point
/// is requested from them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainParameters {
    /// Coefficient a
    pub a: BigInt,

    /// Coefficient b
    pub b: BigInt,

    /// Field modulus p
    pub p: BigInt,

    /// Affine coordinates of the base point G
    pub generator: (BigInt, BigInt),

    /// Order q of the base point
    pub order: BigInt,
}

impl DomainParameters {
    /// `y² = x³ + 2x + 2` over F₁₇ with `G = (5, 1)` of prime order 19
    #[must_use]
    pub fn textbook() -> Self {
        Self {
            a: BigInt::from(2),
            b: BigInt::from(2),
            p: BigInt::from(17),
            generator: (BigInt::from(5), BigInt::from(1)),
            order: BigInt::from(19),
        }
    }

    /// secp256k1 as standardized in SEC 2
    #[must_use]
    pub fn secp256k1() -> Self {
        let int = |bytes: &[u8]| BigInt::from_bytes_be(Sign::Plus, bytes);

        Self {
            a: BigInt::from(0),
            b: BigInt::from(7),
            p: int(&hex!(
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
            )),
            generator: (
                int(&hex!(
                    "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"
                )),
                int(&hex!(
                    "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
                )),
            ),
            order: int(&hex!(
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
            )),
        }
    }

    /// Validated curve
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidCurve`] for a singular curve.
    pub fn curve(&self) -> Result<Arc<Curve>> {
        Curve::new(self.a.clone(), self.b.clone(), self.p.clone())
            .validate()
            .map(Arc::new)
    }

    /// Base point on the validated curve
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidCurve`] or [`crate::Error::InvalidPoint`].
    pub fn generator(&self) -> Result<Point> {
        let (x, y) = self.generator.clone();
        Point::new_valid(&self.curve()?, x, y)
    }

    /// Signing key for `secret` over these parameters
    pub fn signing_key(&self, secret: BigInt) -> Result<SigningKey> {
        SigningKey::from_secret(self.generator()?, self.order.clone(), secret)
    }
}
