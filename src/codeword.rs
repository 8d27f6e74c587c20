//! Codeword selection: the termination / flush step.
//!
//! The encoder leaves behind an exact rational interval `[low, high)`;
//! this module picks the short binary fraction `0.b1b2...bk` that lies
//! inside it. Both bounds are rendered as truncated binary digit strings,
//! the working precision is doubled until the renderings diverge (no fixed
//! precision suffices, because the interval width shrinks without bound as
//! input grows), and the codeword is then read off around the first
//! diverging digit, with a forward carry scan when `high` terminates
//! exactly at that digit.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::model::Interval;

/// Baseline working precision in binary digits after the point.
const BASE_PRECISION: usize = 100;

/// Cap for the precision-doubling search. Hitting it means the interval
/// bounds could not be separated within ~6.5 million digits, i.e. the
/// input was pathological enough that we refuse to keep doubling.
const MAX_PRECISION: usize = 100 << 16;

/// A finite binary digit string interpreted as the fractional part
/// `0.b1b2...bk` of a number in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codeword {
    digits: String,
}

impl Codeword {
    /// Select a codeword inside the half-open interval `[low, high)`.
    ///
    /// The produced value satisfies `low <= value < high`, and no strictly
    /// shorter binary fraction lies in the open interval `(low, high)`;
    /// codeword length is the compression metric, so every digit counts.
    ///
    /// # Errors
    /// - [`Error::MalformedInterval`] if the bounds violate
    ///   `0 <= low < high <= 1` (an upstream invariant breach, fatal).
    /// - [`Error::PrecisionExhausted`] if the bounds cannot be separated
    ///   within the precision cap.
    pub fn from_interval(interval: &Interval) -> Result<Self> {
        let low = interval.low();
        let high = interval.high();
        if low.is_negative() || low >= high || high > &BigRational::one() {
            return Err(Error::MalformedInterval);
        }

        // Precision-doubling search: re-render both bounds until their
        // truncations diverge at some digit position.
        let mut precision = BASE_PRECISION;
        let (mut low_digits, high_digits, r) = loop {
            let lo = binary_digits(low, precision);
            let hi = binary_digits(high, precision);
            match first_divergence(&lo, &hi)? {
                Some(r) => break (lo, hi, r),
                None => {
                    precision *= 2;
                    if precision > MAX_PRECISION {
                        return Err(Error::PrecisionExhausted(MAX_PRECISION));
                    }
                }
            }
        };

        // At position r, `low` carries a 0 and `high` a 1.
        let digits = if high_digits.len() > r + 1 {
            // `high` has significant digits past r, so truncating it there
            // drops below `high` while staying above `low`.
            high_digits[..r + 1].to_vec()
        } else {
            // `high` terminates at r. Keep `low`'s digits through r and
            // binary-increment the tail with a forward carry scan; the
            // zero padding guarantees the carry is absorbed.
            let padded = low_digits.len().max(high_digits.len()) + 10;
            low_digits.resize(padded, b'0');

            let mut out = low_digits[..r + 1].to_vec();
            for &digit in &low_digits[r + 1..] {
                match digit {
                    // carrying: a 1 passes the carry along unchanged
                    b'1' => out.push(b'1'),
                    // the first 0 absorbs the carry; done
                    _ => {
                        out.push(b'1');
                        break;
                    }
                }
            }
            out
        };

        // The vector only ever holds b'0' / b'1'.
        Ok(Self {
            digits: digits.into_iter().map(char::from).collect(),
        })
    }

    /// The digit string, without the implicit leading `0.`.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of binary digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether the codeword has no digits (value 0).
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The exact rational value `0.b1b2...bk`.
    pub fn value(&self) -> BigRational {
        let mut numer = BigInt::zero();
        for byte in self.digits.bytes() {
            numer <<= 1u32;
            if byte == b'1' {
                numer += 1u32;
            }
        }
        BigRational::new(numer, BigInt::one() << self.digits.len())
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl FromStr for Codeword {
    type Err = Error;

    /// Parse a bare digit string such as `"0110"`.
    fn from_str(s: &str) -> Result<Self> {
        match s.chars().find(|&c| c != '0' && c != '1') {
            Some(c) => Err(Error::InvalidDigit(c)),
            None => Ok(Self {
                digits: s.to_owned(),
            }),
        }
    }
}

/// Render `value` (in `[0, 1]`) as binary fraction digits.
///
/// A dyadic rational terminates as soon as the remainder hits zero, so it
/// renders minimally with no trailing zeros; anything else is truncated
/// (rounded toward zero) to exactly `precision` digits. A value of 1 never
/// exhausts its remainder and renders as `precision` ones, the truncation
/// of `0.111...`.
fn binary_digits(value: &BigRational, precision: usize) -> Vec<u8> {
    let mut numer = value.numer().clone();
    let denom = value.denom().clone();

    let mut digits = Vec::new();
    for _ in 0..precision {
        if numer.is_zero() {
            break;
        }
        numer <<= 1u32;
        if numer >= denom {
            digits.push(b'1');
            numer -= &denom;
        } else {
            digits.push(b'0');
        }
    }
    if digits.is_empty() {
        digits.push(b'0');
    }
    digits
}

/// First position at which the two renderings diverge, reading positions
/// past a string's end as 0.
///
/// `None` means the truncations are indistinguishable at this precision
/// (their difference is below one unit in the last place) and the caller
/// must re-render with more digits. A divergence where `low` holds the 1
/// means the bounds are out of order, which well-formed input cannot
/// produce.
fn first_divergence(low: &[u8], high: &[u8]) -> Result<Option<usize>> {
    let len = low.len().max(high.len());
    for i in 0..len {
        let lo = low.get(i).copied().unwrap_or(b'0');
        let hi = high.get(i).copied().unwrap_or(b'0');
        if lo != hi {
            if lo == b'1' {
                return Err(Error::MalformedInterval);
            }
            return Ok(Some(i));
        }
    }
    Ok(None)
}
