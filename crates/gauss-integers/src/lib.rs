//! # gauss-integers
//!
//! Exact number types for the gauss elimination engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals kept in lowest terms (`Rational`)
//! - Construction from integers, floats, other rationals or `n/d` strings
//!   (`RationalSource`)
//!
//! ## Exactness
//!
//! Addition, subtraction, multiplication and division never round. The only
//! floating point paths are `Rational::to_f64`, `Rational::powf` and
//! comparisons against `f64`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use integer::Integer;
pub use rational::{Rational, RationalSource};
