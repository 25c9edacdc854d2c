/// Birthday collision probability
///
/// This module handles:
/// - Exact factorials over arbitrary-precision integers
/// - The exact rational probability that N people share a birthday
/// - Truncation to a fixed number of decimal digits
use crate::error::{BirthdayError, Result};
use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

/// Number of distinct birthdays
pub const DAYS: u32 = 365;

/// Fractional digits kept in displayed probabilities
pub const PROBABILITY_DIGITS: u32 = 5;

lazy_static! {
    /// 365!, computed on first use and shared by every row
    static ref DAYS_FACTORIAL: BigUint = (1..=DAYS).map(BigUint::from).product();
}

/// Exact factorial of `n`.
///
/// Negative input is a `Domain` error.
pub fn factorial(n: i64) -> Result<BigUint> {
    if n < 0 {
        return Err(BirthdayError::Domain(n));
    }
    if n == i64::from(DAYS) {
        return Ok(DAYS_FACTORIAL.clone());
    }
    Ok((1..=n as u64).map(BigUint::from).product())
}

/// Exact probability that at least two of `n` people share a birthday.
///
/// Computed as `1 - 365! / ((365 - n)! * 365^n)` with no rounding at all.
/// More than 365 people always collide, so the result is exactly one.
pub fn probability(n: u32) -> Result<BigRational> {
    if n > DAYS {
        return Ok(BigRational::one());
    }

    let remaining = factorial(i64::from(DAYS) - i64::from(n))?;
    let denominator = remaining * BigUint::from(DAYS).pow(n);
    let distinct = BigRational::new(BigInt::from(DAYS_FACTORIAL.clone()), BigInt::from(denominator));

    Ok(BigRational::one() - distinct)
}

/// Truncate a probability in [0, 1] to `PROBABILITY_DIGITS` fractional digits.
///
/// Returns the value as an integer count of 10^-digits units, so
/// 0.507297... becomes 50729.
pub fn truncate_units(p: &BigRational) -> u32 {
    let scale = BigRational::from_integer(BigInt::from(10u32.pow(PROBABILITY_DIGITS)));
    let scaled = (p * scale).floor().to_integer();
    if scaled < BigInt::zero() {
        return 0;
    }
    scaled.to_u32().unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "probability_test.rs"]
mod probability_test;
