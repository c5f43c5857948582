//!
//! Module containing the definition of the public key container
//!

use crate::{ecdsa, Error, Point, Result, Signature};
use num_bigint::{BigInt, Sign};
use signature::Verifier;

/// Public key of the signature scheme: base point, its order and `V = s·G`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct VerifyingKey {
    /// Base point G
    generator: Point,

    /// Order q of the base point
    order: BigInt,

    /// Verification point V
    point: Point,
}

impl VerifyingKey {
    /// Construct a new public key from its components
    ///
    /// # Errors
    ///
    /// - [`Error::DomainMismatch`] when `point` is not on the curve of `generator`
    /// - [`Error::InvalidPoint`] when either point fails the curve equation
    /// - [`Error::InvalidScalar`] when `order <= 1`
    pub fn from_components(generator: Point, order: BigInt, point: Point) -> Result<Self> {
        if !generator.same_curve(&point) {
            return Err(Error::DomainMismatch);
        }

        if !generator.is_valid() || !point.is_valid() {
            return Err(Error::InvalidPoint);
        }

        if order <= BigInt::from(1) {
            return Err(Error::InvalidScalar);
        }

        Ok(Self {
            generator,
            order,
            point,
        })
    }

    /// Base point G
    pub const fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order q of the base point
    #[must_use]
    pub const fn order(&self) -> &BigInt {
        &self.order
    }

    /// Verification point V
    pub const fn point(&self) -> &Point {
        &self.point
    }

    /// Verify a signature over an integer
    pub fn verify_data(&self, data: &BigInt, signature: &Signature) -> Result<bool> {
        ecdsa::verify(&self.generator, data, &self.order, signature, &self.point)
    }

    /// `T.x mod q` as recomputed during verification, `None` for the identity
    pub fn verification_value(
        &self,
        data: &BigInt,
        signature: &Signature,
    ) -> Result<Option<BigInt>> {
        ecdsa::verification_value(&self.generator, data, &self.order, signature, &self.point)
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> core::result::Result<(), signature::Error> {
        let data = BigInt::from_bytes_be(Sign::Plus, msg);

        if self.verify_data(&data, signature)? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}
