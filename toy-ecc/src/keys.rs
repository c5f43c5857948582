//!
//! Key derivation
//!

use crate::{Point, Result};
use num_bigint::BigInt;

/// Derive the public point `Q = secret·G` from a base point and a secret scalar
///
/// Used for the ElGamal key exchange as well as for the verification point of
/// the signature scheme.
pub fn derive_public_key(generator: &Point, secret: &BigInt) -> Result<Point> {
    generator.scalar_multiply(secret)
}
