//! Exact rational numbers.
//!
//! This module provides the fraction type every matrix cell is stored as.
//! Values are backed by `dashu::rational::RBig`, which keeps them in lowest
//! terms with a positive denominator, zero spelled `0/1`. Every operation
//! returns a fresh value, nothing mutates in place.
//!
//! Floating point only shows up at the edges: [`Rational::to_f64`],
//! [`Rational::powf`] for non-integer exponents, and comparisons against
//! `f64`. Everything between two rationals is exact.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{Integer, RationalError};

/// An exact rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

/// Anything a [`Rational`] can be built from.
///
/// Matrix constructors accept rows of mixed sources and coerce every cell
/// through [`Rational::from_source`].
#[derive(Clone, Debug, PartialEq)]
pub enum RationalSource {
    /// An integer, optionally combined with an explicit denominator.
    Integer(Integer),
    /// A finite binary float, converted exactly.
    Float(f64),
    /// An existing rational, copied.
    Rational(Rational),
    /// A string of the form `n` or `n/d`.
    Text(String),
}

impl RationalSource {
    fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Rational(_) => "rational",
            Self::Text(_) => "string",
        }
    }
}

impl Rational {
    /// Creates a rational from numerator and denominator, reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] if the denominator is zero.
    pub fn new(
        numerator: impl Into<Integer>,
        denominator: impl Into<Integer>,
    ) -> Result<Self, RationalError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RationalError::InvalidArgument(
                "denominator cannot be zero".to_string(),
            ));
        }

        // RBig takes an unsigned denominator; its sign moves up.
        let mut numerator = numerator.into().into_inner();
        if denominator.is_negative() {
            numerator = -numerator;
        }
        Ok(Self(RBig::from_parts(
            numerator,
            denominator.into_inner().unsigned_abs(),
        )))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] if the denominator is zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(numerator, denominator)
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: impl Into<Integer>) -> Self {
        Self(RBig::from(n.into().into_inner()))
    }

    /// Builds a rational from any supported source.
    ///
    /// A denominator may only accompany an integer source. An explicit
    /// denominator of one is accepted with every source, since it changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] for a zero denominator, a
    /// denominator paired with a non-integer source, a malformed string, or a
    /// non-finite float.
    pub fn from_source(
        source: impl Into<RationalSource>,
        denominator: Option<Integer>,
    ) -> Result<Self, RationalError> {
        let source = source.into();
        let denominator = denominator.filter(|d| !d.is_one());

        match (source, denominator) {
            (RationalSource::Integer(n), Some(d)) => Self::new(n, d),
            (RationalSource::Integer(n), None) => Ok(Self::from_integer(n)),
            (other, Some(_)) => Err(RationalError::InvalidArgument(format!(
                "a denominator cannot be combined with a {} value",
                other.kind()
            ))),
            (RationalSource::Float(value), None) => Self::try_from(value),
            (RationalSource::Rational(r), None) => Ok(r),
            (RationalSource::Text(text), None) => text.parse(),
        }
    }

    /// Returns the numerator. Carries the sign.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.0.cmp(&RBig::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        DashuSigned::is_positive(&self.0)
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the rational is zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Divides, failing instead of panicking on a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Computes self^exp exactly. Negative exponents invert the base.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] when raising zero to a
    /// negative power, and [`RationalError::InvalidArgument`] when the
    /// exponent's magnitude exceeds `u32::MAX`.
    pub fn pow(&self, exp: i64) -> Result<Self, RationalError> {
        let magnitude = u32::try_from(exp.unsigned_abs()).map_err(|_| {
            RationalError::InvalidArgument(format!("exponent {exp} is too large"))
        })?;
        let raised = Self(self.0.pow(magnitude as usize));

        if exp < 0 {
            raised.recip()
        } else {
            Ok(raised)
        }
    }

    /// Raises to a non-integer power.
    ///
    /// The result is a floating approximation; this is the one arithmetic
    /// operation that gives up exactness.
    #[must_use]
    pub fn powf(&self, exp: f64) -> f64 {
        self.to_f64().powf(exp)
    }

    /// Returns the nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.0.numerator(), self.0.denominator())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad as a whole so matrix columns can align cells.
        if self.is_integer() {
            f.pad(&self.0.numerator().to_string())
        } else {
            f.pad(&format!("{}/{}", self.0.numerator(), self.0.denominator()))
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parses `n` or `n/d`, with an optional leading `-` on the numerator.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            RationalError::InvalidArgument(format!("'{text}' is not of the form 'n' or 'n/d'"))
        };

        let (numer, denom) = match text.split_once('/') {
            Some((numer, denom)) => (numer, Some(denom)),
            None => (text, None),
        };
        let digits = numer.strip_prefix('-').unwrap_or(numer);
        if !is_digits(digits) || denom.is_some_and(|d| !is_digits(d)) {
            return Err(malformed());
        }

        let numer: Integer = numer.parse().map_err(|_| malformed())?;
        let denom: Integer = match denom {
            Some(d) => d.parse().map_err(|_| malformed())?,
            None => Integer::one(),
        };

        Self::new(numer, denom)
    }
}

impl TryFrom<f64> for Rational {
    type Error = RationalError;

    /// Converts a finite float exactly: every finite `f64` is
    /// `mantissa * 2^exponent` for integers `mantissa` and `exponent`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(RationalError::InvalidArgument(format!(
                "{value} has no rational value"
            )));
        }
        if value == 0.0 {
            return Ok(Self::zero());
        }

        let bits = value.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & 0x000f_ffff_ffff_ffff;
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1 << 52), biased - 1075)
        };

        let mut numer = IBig::from(mantissa);
        if value.is_sign_negative() {
            numer = -numer;
        }
        let shift = exponent.unsigned_abs() as usize;

        if exponent >= 0 {
            Ok(Self(RBig::from(numer << shift)))
        } else {
            Ok(Self(RBig::from_parts(numer, UBig::ONE << shift)))
        }
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.0 == RBig::from(*other)
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.0.cmp(&RBig::from(*other)))
    }
}

impl PartialEq<f64> for Rational {
    fn eq(&self, other: &f64) -> bool {
        self.to_f64() == *other
    }
}

impl PartialOrd<f64> for Rational {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.to_f64().partial_cmp(other)
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

/// # Panics
///
/// Panics if the divisor is zero. Use [`Rational::checked_div`] to get an
/// error instead.
impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");
        Self(self.0 / rhs.0)
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(n)
    }
}

impl From<Integer> for RationalSource {
    fn from(n: Integer) -> Self {
        Self::Integer(n)
    }
}

impl From<i64> for RationalSource {
    fn from(n: i64) -> Self {
        Self::Integer(Integer::new(n))
    }
}

impl From<i32> for RationalSource {
    fn from(n: i32) -> Self {
        Self::Integer(Integer::from(n))
    }
}

impl From<f64> for RationalSource {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Rational> for RationalSource {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl From<&Rational> for RationalSource {
    fn from(r: &Rational) -> Self {
        Self::Rational(r.clone())
    }
}

impl From<&str> for RationalSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RationalSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
