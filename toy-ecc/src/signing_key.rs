//!
//! Module containing the definition of the private key container
//!

use crate::{ecdsa, Error, Point, Signature, VerifyingKey};
use blake2::Blake2b512;
use digest::Digest;
use num_bigint::{BigInt, Sign};
use num_traits::Signed;
use signature::Signer;
use zeroize::Zeroizing;

/// Private key of the signature scheme.
///
/// Signs with the nonce derived from the data's BLAKE2b-512 digest unless
/// another digest is picked through [`SigningKey::sign_data_digest`].
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct SigningKey {
    /// Public key
    verifying_key: VerifyingKey,

    /// Secret scalar s
    secret: Zeroizing<BigInt>,
}

opaque_debug::implement!(SigningKey);

impl SigningKey {
    /// Construct a private key from the base point, its order and the secret scalar,
    /// deriving the verification point `V = s·G`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScalar`] unless `0 < secret < order`, plus the errors of
    /// [`VerifyingKey::from_components`].
    pub fn from_secret(
        generator: Point,
        order: BigInt,
        secret: BigInt,
    ) -> crate::Result<Self> {
        let secret = Zeroizing::new(secret);

        if !secret.is_positive() || *secret >= order {
            return Err(Error::InvalidScalar);
        }

        let point = ecdsa::signing_key(&generator, &secret)?;
        let verifying_key = VerifyingKey::from_components(generator, order, point)?;

        Ok(Self {
            verifying_key,
            secret,
        })
    }

    /// Public key
    pub const fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Secret scalar s
    ///
    /// If you decide to clone this value, please consider using [`Zeroize::zeroize`](::zeroize::Zeroize::zeroize()) to zero out the memory after you're done using the clone
    #[must_use]
    pub fn secret(&self) -> &BigInt {
        &self.secret
    }

    /// Sign an integer
    pub fn sign_data(&self, data: &BigInt) -> crate::Result<Signature> {
        self.sign_data_digest::<Blake2b512>(data)
    }

    /// Sign an integer, deriving the nonce with the digest `D`
    pub fn sign_data_digest<D: Digest>(&self, data: &BigInt) -> crate::Result<Signature> {
        let vk = self.verifying_key();
        ecdsa::sign_digest::<D>(vk.generator(), data, vk.order(), &self.secret)
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> Result<Signature, signature::Error> {
        let data = BigInt::from_bytes_be(Sign::Plus, msg);
        Ok(self.sign_data(&data)?)
    }
}
