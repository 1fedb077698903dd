//! BigDec definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::consts::{pow10, ONE};
use crate::defs::Error;
use crate::defs::MAX_DEFAULT_PRECISION;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// An arbitrary precision decimal number: a big-integer mantissa scaled by a
/// power of ten. The represented value is `mantissa × 10^(-offset)`.
///
/// Values are immutable: every operation returns a new instance, normalized to
/// canonical form (no trailing zero digits in the fractional part, zero has
/// offset 0, and the offset never exceeds `max_precision`).
#[derive(Debug, Clone)]
pub struct BigDec {
    mantissa: BigInt,
    offset: usize,
    max_precision: usize,
}

impl BigDec {
    /// Creates a value equal to `mantissa × 10^(-offset)` keeping at most
    /// `max_precision` fractional digits. The result is normalized: trailing
    /// zero digits are stripped, and if `offset` exceeds `max_precision` the
    /// extra digits are truncated away.
    pub fn from_parts(mantissa: BigInt, offset: usize, max_precision: usize) -> Self {
        let mut v = BigDec {
            mantissa,
            offset,
            max_precision,
        };
        v.normalize();
        v
    }

    // Intermediate state for inner calculations; the caller is responsible for
    // normalizing before the value becomes observable.
    pub(crate) fn raw(mantissa: BigInt, offset: usize, max_precision: usize) -> Self {
        BigDec {
            mantissa,
            offset,
            max_precision,
        }
    }

    /// Returns a copy of `self` keeping at most `new_precision` fractional
    /// digits. Digits beyond the new precision are truncated away.
    pub fn with_precision(&self, new_precision: usize) -> Self {
        Self::from_parts(self.mantissa.clone(), self.offset, new_precision)
    }

    /// Calculates the power of 0.1: `10^(-power)`, with at least `max_precision`
    /// fractional digits of capacity. Non-positive `power` produces an integer.
    pub fn pow_frac_of_ten(power: i64, max_precision: usize) -> Self {
        if power <= 0 {
            Self::from_parts(pow10(-power as usize), 0, max_precision)
        } else {
            Self::from_parts(
                BigInt::one(),
                power as usize,
                max_precision.max(power as usize),
            )
        }
    }

    /// The significant digits with sign.
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of implied digits to the right of the decimal point.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The offset ceiling this value is normalized to.
    pub fn max_precision(&self) -> usize {
        self.max_precision
    }

    /// 10^offset.
    pub(crate) fn offset_power(&self) -> BigInt {
        pow10(self.offset)
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Returns true if the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.offset == 0
    }

    pub(crate) fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    /// The absolute value of `self`.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            Self::raw(-&self.mantissa, self.offset, self.max_precision)
        } else {
            self.clone()
        }
    }

    // Brings the value to canonical form: truncates the offset down to
    // `max_precision` and strips trailing zero digits.
    pub(crate) fn normalize(&mut self) {
        if self.offset > self.max_precision {
            let diff = self.offset - self.max_precision;
            self.mantissa /= pow10(diff);
            self.offset = self.max_precision;
        }
        self.reduce_trailing_zeroes();
    }

    // Reduces the offset while the mantissa is divisible by 10.
    fn reduce_trailing_zeroes(&mut self) {
        if self.mantissa.is_zero() {
            self.offset = 0;
            return;
        }

        if self.offset == 0 {
            return;
        }

        let magnitude = self.mantissa.abs();
        if !(&magnitude % 10u32).is_zero() {
            return;
        }

        let s = magnitude.to_string();
        let trimmed = s.trim_end_matches('0');
        let reducible = (s.len() - trimmed.len()).min(self.offset);
        self.mantissa /= pow10(reducible);
        self.offset -= reducible;
    }

    /// Adds `rhs` to `self`. The result keeps the larger of the two precisions.
    pub fn add(&self, rhs: &Self) -> Self {
        let max_offset = self.offset.max(rhs.offset);

        let mut value_a = self.mantissa.clone();
        if self.offset < max_offset {
            value_a *= pow10(max_offset - self.offset);
        }

        let mut value_b = rhs.mantissa.clone();
        if rhs.offset < max_offset {
            value_b *= pow10(max_offset - rhs.offset);
        }

        Self::from_parts(
            value_a + value_b,
            max_offset,
            self.max_precision.max(rhs.max_precision),
        )
    }

    /// Subtracts `rhs` from `self`.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&Self::raw(
            -&rhs.mantissa,
            rhs.offset,
            rhs.max_precision,
        ))
    }

    /// Multiplies `self` by `rhs`. The result keeps the larger of the two
    /// precisions; fractional digits beyond it are truncated away.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::from_parts(
            &self.mantissa * &rhs.mantissa,
            self.offset + rhs.offset,
            self.max_precision.max(rhs.max_precision),
        )
    }

    /// Divides `self` by `rhs`, rounded to the combined precision.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `rhs` is zero (unconditionally, including `0 / 0`).
    ///  - Internal: precision bookkeeping produced a negative offset.
    pub fn div(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.is_zero() {
            return Ok(Self::from_parts(BigInt::zero(), 0, MAX_DEFAULT_PRECISION));
        }

        let desired = self.max_precision.max(rhs.max_precision);

        if rhs == &*ONE {
            return Ok(self.with_precision(desired));
        }

        if self == rhs {
            return Ok(ONE.with_precision(desired));
        }

        // A working offset of ten times the precision leaves enough headroom
        // for the truncation error of the integer division below.
        let real_local = desired.max(self.offset.max(rhs.offset));
        let awaited = real_local * 10;
        let add_exp = awaited - self.offset;
        let mut value = &self.mantissa * pow10(add_exp);
        value /= &rhs.mantissa;

        let new_offset = awaited.checked_sub(rhs.offset).ok_or(Error::Internal)?;

        Ok(Self::raw(value, new_offset, real_local).round(desired))
    }

    /// Rounds to `n` fractional digits using round-half-to-even. When the
    /// value already fits `n` digits this only widens the precision.
    pub fn round(&self, n: usize) -> Self {
        if self.offset <= n {
            return self.with_precision(n.max(MAX_DEFAULT_PRECISION));
        }

        let left_pow = pow10(self.offset - n);
        let negative = self.is_negative();
        let (mut value, tail) = self.mantissa.abs().div_rem(&left_pow);

        let twice = &tail * 2u32;
        match twice.cmp(&left_pow) {
            Ordering::Less => {}
            Ordering::Equal => {
                // round to even
                if value.is_odd() {
                    value += 1;
                }
            }
            Ordering::Greater => value += 1,
        }

        if negative {
            value = -value;
        }

        Self::from_parts(value, n, n)
    }

    /// Truncates to `n` fractional digits without rounding.
    pub fn floor_to(&self, n: usize) -> Self {
        if self.offset <= n {
            return self.clone();
        }

        let diff = self.offset - n;
        let value = &self.mantissa / pow10(diff);
        Self::from_parts(value, self.offset - diff, n.max(MAX_DEFAULT_PRECISION))
    }

    /// The integer part of the value, truncated toward zero.
    pub fn floor(&self) -> BigInt {
        &self.mantissa / self.offset_power()
    }
}

impl PartialEq for BigDec {
    fn eq(&self, other: &Self) -> bool {
        // instances are canonical, so the pairs compare directly;
        // max_precision does not participate
        self.offset == other.offset && self.mantissa == other.mantissa
    }
}

impl Eq for BigDec {}

impl Hash for BigDec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mantissa.hash(state);
        self.offset.hash(state);
    }
}

impl Ord for BigDec {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        if other.is_zero() {
            return if self.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        if self.is_zero() {
            return if other.is_negative() {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        if self.is_negative() != other.is_negative() {
            return if self.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        // same sign: the sign of the difference decides without any
        // cross-multiplication of the magnitudes
        match self.sub(other).mantissa.sign() {
            Sign::Minus => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigDec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
