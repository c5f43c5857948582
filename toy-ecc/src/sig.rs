//!
//! Module containing the definition of the Signature container
//!

use crate::Error;
use core::fmt;
use num_bigint::BigInt;
use num_traits::Signed;

/// Container of the signature pair `(s1, s2)`
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Signature {
    /// Signature part s1, the reduced x-coordinate of `e·G`
    s1: BigInt,

    /// Signature part s2
    s2: BigInt,
}

opaque_debug::implement!(Signature);

impl Signature {
    /// Create a new Signature container from its components
    ///
    /// # Errors
    ///
    /// [`Error::Signature`] unless both parts are positive.
    pub fn from_components(s1: BigInt, s2: BigInt) -> crate::Result<Self> {
        if !s1.is_positive() || !s2.is_positive() {
            return Err(Error::Signature);
        }

        Ok(Self { s1, s2 })
    }

    /// Signature part s1
    #[must_use]
    pub fn s1(&self) -> &BigInt {
        &self.s1
    }

    /// Signature part s2
    #[must_use]
    pub fn s2(&self) -> &BigInt {
        &self.s2
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.s1, self.s2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn debug_hides_components() {
        let signature = Signature::from_components(BigInt::from(13), BigInt::from(3)).unwrap();
        assert_eq!(format!("{:?}", signature), "Signature { ... }");
        assert_eq!(format!("{}", signature), "[13, 3]");
    }

    #[test]
    fn parts_must_be_positive() {
        assert_eq!(
            Signature::from_components(BigInt::from(0), BigInt::from(3)),
            Err(Error::Signature)
        );
        assert_eq!(
            Signature::from_components(BigInt::from(13), BigInt::from(-3)),
            Err(Error::Signature)
        );
    }
}
