#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

//!
//! # Examples
//!
//! Sign and verify with the textbook domain parameters
//!
//! ```
//! use toy_ecc::{BigInt, DomainParameters};
//! use toy_ecc::signature::{Signer, Verifier};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = DomainParameters::textbook();
//! let signing_key = params.signing_key(BigInt::from(7))?;
//! let verifying_key = signing_key.verifying_key();
//!
//! let signature = signing_key.try_sign(b"hello")?;
//! assert!(verifying_key.verify(b"hello", &signature).is_ok());
//! # Ok(())
//! # }
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ecdsa;
pub mod elgamal;
pub mod field;
pub mod io;

mod curve;
mod error;
mod keys;
mod params;
mod point;
mod sig;
mod signing_key;
mod verifying_key;

pub use crate::{
    curve::Curve,
    error::{Error, Result},
    keys::derive_public_key,
    params::DomainParameters,
    point::{Coordinates, Point},
    sig::Signature,
    signing_key::SigningKey,
    verifying_key::VerifyingKey,
};

pub use num_bigint::BigInt;
pub use signature;
