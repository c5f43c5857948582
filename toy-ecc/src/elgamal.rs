//! ElGamal encryption over the curve group.
//!
//! A message is a point `M` on the curve. With a base point `P` and the
//! recipient's public point `Q = n·P`, the sender picks an ephemeral scalar `k`
//! and publishes `(C1, C2) = (k·P, M + k·Q)`. The recipient recovers
//! `M = C2 - n·C1`.
//!
//! The ephemeral scalar is supplied by the caller; nothing here draws random
//! numbers.

use crate::{Error, Point, Result};
use num_bigint::BigInt;

/// ElGamal ciphertext `(C1, C2)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Ciphertext {
    /// Ephemeral point `k·P`
    c1: Point,

    /// Masked message `M + k·Q`
    c2: Point,
}

impl Ciphertext {
    /// Create a new ciphertext container from its two points
    ///
    /// # Errors
    ///
    /// [`Error::DomainMismatch`] when the points are on different curves.
    pub fn from_components(c1: Point, c2: Point) -> Result<Self> {
        if !c1.same_curve(&c2) {
            return Err(Error::DomainMismatch);
        }

        Ok(Self { c1, c2 })
    }

    /// Ephemeral point `C1`
    pub fn c1(&self) -> &Point {
        &self.c1
    }

    /// Masked message `C2`
    pub fn c2(&self) -> &Point {
        &self.c2
    }
}

/// Encrypt `message` to the holder of the secret behind `public`
///
/// # Errors
///
/// - [`Error::DomainMismatch`] when the points do not share a curve
/// - [`Error::InvalidPoint`] when `message` is not on the curve
pub fn encrypt(base: &Point, public: &Point, message: &Point, k: &BigInt) -> Result<Ciphertext> {
    if !message.same_curve(base) || !public.same_curve(base) {
        return Err(Error::DomainMismatch);
    }

    if !message.is_valid() {
        log::debug!("refusing to encrypt off-curve message point {}", message);
        return Err(Error::InvalidPoint);
    }

    let c1 = base.scalar_multiply(k)?;
    let c2 = message.add(&public.scalar_multiply(k)?)?;

    Ciphertext::from_components(c1, c2)
}

/// Recover the message point with the recipient's secret scalar
pub fn decrypt(ciphertext: &Ciphertext, secret: &BigInt) -> Result<Point> {
    let shared = ciphertext.c1().scalar_multiply(secret)?;
    ciphertext.c2().add(&shared.negate())
}
