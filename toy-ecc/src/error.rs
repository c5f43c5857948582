//! Error types

/// Result type with the `toy-ecc` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The discriminant `4a³ + 27b²` vanishes modulo `p`, or `p` is not a usable modulus
    InvalidCurve,

    /// The modular inverse is undefined for the given operands
    NoInverseExists,

    /// The point does not satisfy the curve equation
    InvalidPoint,

    /// The operands live on different curves
    DomainMismatch,

    /// A secret scalar or group order is out of range
    InvalidScalar,

    /// Signature generation produced a degenerate value
    Signature,

    /// The input provider ran out of values
    MissingInput,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidCurve => write!(f, "toy-ecc: curve is singular"),
            Error::NoInverseExists => write!(f, "toy-ecc: no modular inverse exists"),
            Error::InvalidPoint => write!(f, "toy-ecc: point is not on the curve"),
            Error::DomainMismatch => write!(f, "toy-ecc: points are on different curves"),
            Error::InvalidScalar => write!(f, "toy-ecc: scalar out of range"),
            Error::Signature => write!(f, "toy-ecc: degenerate signature"),
            Error::MissingInput => write!(f, "toy-ecc: input exhausted"),
        }
    }
}

impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_err: Error) -> signature::Error {
        signature::Error::new()
    }
}
