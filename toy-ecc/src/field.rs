//! Prime field helpers over arbitrary precision integers.
//!
//! Field elements are plain [`BigInt`]s kept in the canonical range `[0, p)`.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

/// Reduce `value` into the canonical range `[0, modulus)`.
///
/// `modulus` must be positive.
#[inline]
#[must_use]
pub fn reduce(value: &BigInt, modulus: &BigInt) -> BigInt {
    value.mod_floor(modulus)
}

/// Compute `x` such that `(a·x) mod m == 1` using the extended Euclidean
/// algorithm.
///
/// `a` is reduced into `[0, m)` first, so negative inputs are accepted. The
/// returned inverse is canonical.
///
/// # Errors
///
/// [`Error::NoInverseExists`] when `gcd(a, m) != 1`, or when `m <= 1` (no
/// residue satisfies the congruence).
pub fn mod_inv(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    if *m <= BigInt::one() {
        return Err(Error::NoInverseExists);
    }

    let a = reduce(a, m);
    let egcd = a.extended_gcd(m);

    if !egcd.gcd.is_one() {
        return Err(Error::NoInverseExists);
    }

    Ok(reduce(&egcd.x, m))
}
