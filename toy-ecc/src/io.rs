//! Collaborator interfaces: where values come from and where results go.
//!
//! The arithmetic never prompts or prints by itself. An [`InputProvider`]
//! hands out integers on request (one per prompt), and an [`OutputSink`]
//! receives curves, points, signatures and verdicts. The driver functions in
//! this module chain both around the core operations, following the flow of an
//! interactive session.
//!
//! Coordinates read from a provider use the `(0, 0)` convention for the point
//! at infinity, see [`Point::from_legacy`].

use crate::{
    derive_public_key,
    elgamal::{self, Ciphertext},
    Curve, Error, Point, Result, Signature, SigningKey, VerifyingKey,
};
use alloc::{collections::VecDeque, sync::Arc};
use core::fmt::{self, Write};
use num_bigint::BigInt;

/// Source of integers for curve parameters, coordinates and scalars
pub trait InputProvider {
    /// Produce the next integer, `prompt` describing what is asked for
    fn next_integer(&mut self, prompt: &str) -> Result<BigInt>;
}

/// Receiver of results meant for display
pub trait OutputSink {
    /// A curve description
    fn curve(&mut self, curve: &Curve);

    /// A point, the identity as `(0, 0)`
    fn point(&mut self, point: &Point);

    /// A validity or group membership verdict
    fn validity(&mut self, valid: bool);

    /// A signature pair
    fn signature(&mut self, signature: &Signature);

    /// The recomputed `T.x mod q` next to the expected `s1`
    fn verification(&mut self, computed: Option<&BigInt>, expected: &BigInt);

    /// A free-form notice
    fn notice(&mut self, message: &str);
}

/// In-memory [`InputProvider`] answering prompts from a queue of values
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    values: VecDeque<BigInt>,
}

impl Scripted {
    /// Queue up `values`, handed out in order
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Values not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl InputProvider for Scripted {
    fn next_integer(&mut self, prompt: &str) -> Result<BigInt> {
        let value = self.values.pop_front().ok_or(Error::MissingInput)?;
        log::trace!("{} {}", prompt, value);
        Ok(value)
    }
}

/// [`OutputSink`] rendering plain text lines into any [`fmt::Write`]
///
/// The first formatting error is kept and reported by [`FmtSink::finish`];
/// later output is dropped.
#[derive(Debug)]
pub struct FmtSink<W: Write> {
    writer: W,
    status: fmt::Result,
}

impl<W: Write> FmtSink<W> {
    /// Render into `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            status: Ok(()),
        }
    }

    /// Hand back the writer, or the first formatting error
    pub fn finish(self) -> core::result::Result<W, fmt::Error> {
        self.status.map(|()| self.writer)
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.status.is_ok() {
            self.status = self
                .writer
                .write_fmt(args)
                .and_then(|()| self.writer.write_char('\n'));
        }
    }
}

impl<W: Write> OutputSink for FmtSink<W> {
    fn curve(&mut self, curve: &Curve) {
        self.line(format_args!("{}", curve));
    }

    fn point(&mut self, point: &Point) {
        self.line(format_args!("{}", point));
    }

    fn validity(&mut self, valid: bool) {
        self.line(format_args!("{}", valid));
    }

    fn signature(&mut self, signature: &Signature) {
        self.line(format_args!("{}", signature));
    }

    fn verification(&mut self, computed: Option<&BigInt>, expected: &BigInt) {
        match computed {
            Some(computed) => self.line(format_args!("{} {}", computed, expected)),
            None => self.line(format_args!("identity {}", expected)),
        }
    }

    fn notice(&mut self, message: &str) {
        self.line(format_args!("{}", message));
    }
}

/// Read `(a, b, p)` and validate the curve
///
/// # Errors
///
/// [`Error::InvalidCurve`] after telling the sink when the curve is singular.
pub fn read_curve(input: &mut impl InputProvider, sink: &mut impl OutputSink) -> Result<Arc<Curve>> {
    let a = input.next_integer("enter the a value for curve:")?;
    let b = input.next_integer("enter the b value for curve:")?;
    let p = input.next_integer("enter the prime p the for the field:")?;

    match Curve::new(a, b, p).validate() {
        Ok(curve) => Ok(Arc::new(curve)),
        Err(err) => {
            sink.notice("This is not a valid member of the group.");
            Err(err)
        }
    }
}

/// Read a point on `curve` without checking the curve equation
pub fn read_point(input: &mut impl InputProvider, curve: &Arc<Curve>) -> Result<Point> {
    let x = input.next_integer("enter the x value for point:")?;
    let y = input.next_integer("enter the y value for point:")?;
    Point::from_legacy(curve, x, y)
}

/// Read a point on `curve` which must satisfy the curve equation
///
/// # Errors
///
/// [`Error::InvalidPoint`] after telling the sink when it does not.
pub fn read_valid_point(
    input: &mut impl InputProvider,
    sink: &mut impl OutputSink,
    curve: &Arc<Curve>,
) -> Result<Point> {
    let point = read_point(input, curve)?;

    if !point.is_valid() {
        sink.notice("The given point is not valid.");
        return Err(Error::InvalidPoint);
    }

    Ok(point)
}

/// Publish `secret·base`, the public half of a key exchange
pub fn exchange_start(
    sink: &mut impl OutputSink,
    base: &Point,
    secret: &BigInt,
) -> Result<Point> {
    let public = derive_public_key(base, secret)?;
    sink.point(&public);
    Ok(public)
}

/// Read the secret `n` and publish `n·base`
pub fn exchange_key(
    input: &mut impl InputProvider,
    sink: &mut impl OutputSink,
    base: &Point,
) -> Result<Point> {
    let secret = zeroize::Zeroizing::new(input.next_integer("enter secret int n:")?);
    exchange_start(sink, base, &secret)
}

/// Read a message point and an ephemeral scalar, encrypt, and publish `(C1, C2)`
pub fn encrypt_interactive(
    input: &mut impl InputProvider,
    sink: &mut impl OutputSink,
    base: &Point,
    public: &Point,
) -> Result<Ciphertext> {
    sink.notice("Enter the message:");
    let message = read_valid_point(input, sink, base.curve())?;
    let k = zeroize::Zeroizing::new(input.next_integer("Choose random element k:")?);

    let ciphertext = elgamal::encrypt(base, public, &message, &k)?;
    sink.point(ciphertext.c1());
    sink.point(ciphertext.c2());

    Ok(ciphertext)
}

/// Read the secret signing scalar for `base` of order `order`
///
/// # Errors
///
/// [`Error::InvalidScalar`] unless `0 < s < order`.
pub fn read_signing_key(
    input: &mut impl InputProvider,
    base: &Point,
    order: &BigInt,
) -> Result<SigningKey> {
    let secret = input.next_integer("Input secret signing key 1 < s < q-1: ")?;
    SigningKey::from_secret(base.clone(), order.clone(), secret)
}

/// Verify `signature` over `data`, reporting the recomputed value next to `s1`
///
/// # Errors
///
/// [`Error::Signature`] when a part of `signature` lies outside `[1, q)`.
pub fn report_verification(
    sink: &mut impl OutputSink,
    key: &VerifyingKey,
    data: &BigInt,
    signature: &Signature,
) -> Result<bool> {
    let computed = key.verification_value(data, signature)?;
    sink.verification(computed.as_ref(), signature.s1());
    key.verify_data(data, signature)
}

/// Describe `curve` and report whether it forms a group
pub fn describe_curve(sink: &mut impl OutputSink, curve: &Curve) -> bool {
    let valid = curve.is_non_singular();
    sink.curve(curve);
    sink.validity(valid);
    valid
}

/// Show `point` and report whether it lies on its curve
pub fn describe_point(sink: &mut impl OutputSink, point: &Point) -> bool {
    let valid = point.is_valid();
    sink.point(point);
    sink.validity(valid);
    valid
}

/// Read the data to sign, sign it and publish `(s1, s2)`
pub fn sign_interactive(
    input: &mut impl InputProvider,
    sink: &mut impl OutputSink,
    key: &SigningKey,
) -> Result<(BigInt, Signature)> {
    let data = input.next_integer("enter the data to sign:")?;
    let signature = key.sign_data(&data)?;
    sink.signature(&signature);
    Ok((data, signature))
}
