//! Low-level primitives of the ECDSA-like signature scheme.
//!
//! # ⚠️ Warning: Toy scheme!
//!
//! The nonce is derived from a hash of the signed data alone, so two messages
//! with colliding digests share it, and nothing here runs in constant time.
//! The scheme only mirrors the structure of ECDSA.
//!
//! All functions take the base point `G` and the order `q` of the subgroup it
//! generates explicitly. The signed data is an integer `d`:
//!
//! - sign: `e = H(d)`, `s1 = (e·G).x mod q`, `s2 = (d + s·s1)·e⁻¹ mod q`
//! - verify: `w = s2⁻¹`, `T = (d·w)·G + (s1·w)·V`, accept iff `T.x mod q == s1`

use crate::{
    field::{mod_inv, reduce},
    Error, Point, Result, Signature,
};
use blake2::Blake2b512;
use digest::Digest;
use num_bigint::{BigInt, Sign};
use num_traits::One;

/// Verification point `V = secret·G`
pub fn signing_key(generator: &Point, secret: &BigInt) -> Result<Point> {
    crate::derive_public_key(generator, secret)
}

/// Hash `data` with `D`, reading the digest as a big-endian unsigned integer
///
/// `data` is fed to the hash in its minimal two's complement big-endian form.
#[must_use]
pub fn hash_data<D: Digest>(data: &BigInt) -> BigInt {
    let digest = D::digest(data.to_signed_bytes_be());
    BigInt::from_bytes_be(Sign::Plus, digest.as_slice())
}

/// Sign `data` with the nonce derived from its BLAKE2b-512 digest
pub fn sign(generator: &Point, data: &BigInt, order: &BigInt, secret: &BigInt) -> Result<Signature> {
    sign_digest::<Blake2b512>(generator, data, order, secret)
}

/// Sign `data` with the nonce derived from its `D` digest
pub fn sign_digest<D: Digest>(
    generator: &Point,
    data: &BigInt,
    order: &BigInt,
    secret: &BigInt,
) -> Result<Signature> {
    sign_prehashed(generator, data, order, secret, &hash_data::<D>(data))
}

/// Sign `data` using a caller-supplied nonce `e`
///
/// # Errors
///
/// - [`Error::InvalidScalar`] when `order <= 1`
/// - [`Error::NoInverseExists`] when `e` is not invertible modulo `order`
/// - [`Error::Signature`] when `e·G` is the identity or either part reduces to zero
pub fn sign_prehashed(
    generator: &Point,
    data: &BigInt,
    order: &BigInt,
    secret: &BigInt,
    e: &BigInt,
) -> Result<Signature> {
    check_order(order)?;

    let e_inv = mod_inv(e, order)?;
    let eg = generator.scalar_multiply(e)?;

    let s1 = match eg.x() {
        Some(x) => reduce(x, order),
        None => {
            log::debug!("nonce multiple of the base point is the identity");
            return Err(Error::Signature);
        }
    };
    let s2 = reduce(&((secret * &s1 + data) * e_inv), order);

    Signature::from_components(s1, s2)
}

/// Recompute `T.x mod q` for a signature, `None` when `T` is the identity
///
/// # Errors
///
/// - [`Error::InvalidScalar`] when `order <= 1`
/// - [`Error::Signature`] when a part of `signature` lies outside `[1, order)`
/// - [`Error::DomainMismatch`] when `public` is not on the curve of `generator`
pub fn verification_value(
    generator: &Point,
    data: &BigInt,
    order: &BigInt,
    signature: &Signature,
    public: &Point,
) -> Result<Option<BigInt>> {
    check_order(order)?;

    if !in_range(signature, order) {
        return Err(Error::Signature);
    }

    let w = mod_inv(signature.s2(), order)?;
    let v1 = reduce(&(data * &w), order);
    let v2 = reduce(&(signature.s1() * &w), order);

    let t = generator
        .scalar_multiply(&v1)?
        .add(&public.scalar_multiply(&v2)?)?;

    Ok(t.x().map(|x| reduce(x, order)))
}

/// Verify `signature` over `data` against the verification point `public`
///
/// Signatures with a part outside `[1, order)` are rejected outright.
///
/// # Errors
///
/// [`Error::InvalidScalar`] when `order <= 1`, otherwise see
/// [`verification_value`].
pub fn verify(
    generator: &Point,
    data: &BigInt,
    order: &BigInt,
    signature: &Signature,
    public: &Point,
) -> Result<bool> {
    check_order(order)?;

    if !in_range(signature, order) {
        return Ok(false);
    }

    let value = verification_value(generator, data, order, signature, public)?;
    Ok(value.as_ref() == Some(signature.s1()))
}

fn check_order(order: &BigInt) -> Result<()> {
    if *order <= BigInt::one() {
        return Err(Error::InvalidScalar);
    }
    Ok(())
}

/// Both parts in `[1, order)`; positivity is guaranteed by [`Signature`]
fn in_range(signature: &Signature, order: &BigInt) -> bool {
    signature.s1() < order && signature.s2() < order
}
