//! Integer and decimal powers.

use crate::common::consts::{EIGHTH, HALF, ONE, QUARTER, SIXTEENTH, ZERO};
use crate::common::util::decimal_digits;
use crate::defs::Error;
use crate::num::BigDec;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

impl BigDec {
    /// Integer power by binary exponentiation. A negative exponent inverts
    /// the base first.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `exp` is negative.
    pub fn powi(&self, exp: impl Into<BigInt>) -> Result<Self, Error> {
        let exp: BigInt = exp.into();

        if self.is_zero() && exp.is_zero() {
            return Ok(ONE.with_precision(self.max_precision()));
        }

        if exp.is_one() {
            return Ok(self.clone());
        }

        if exp.is_zero() {
            return Ok(ONE.with_precision(self.max_precision()));
        }

        // intermediates carry tenfold precision, keeping the per-step
        // truncation of the squarings out of the digits that survive the
        // final rounding
        let desired = self.max_precision();
        let work = desired * 10;

        let mut y = exp;
        let mut x = self.with_precision(work);
        if y.is_negative() {
            y = -y;
            x = ONE.with_precision(work).div(&x)?;
        }

        let mut result = ONE.with_precision(work);
        while y.is_positive() {
            if y.is_odd() {
                result = result.mul(&x);
            }
            x = x.mul(&x);
            y = &y / 2u32;
        }

        Ok(result.round(desired))
    }

    /// Decimal power. The exponent splits into an integer part, raised by
    /// binary exponentiation, and a fractional part, covered by square root
    /// fast paths for exact halves down to sixteenths or by
    /// `exp(fraction × ln(base))` in the general case.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `exp` is negative.
    ///  - InvalidArgument: `self` is negative and `exp` has a fractional
    ///    part; the result is not a real number.
    ///  - Overflow: the integer part of `exp` does not fit the precision
    ///    bookkeeping.
    pub fn pow(&self, exp: &Self) -> Result<Self, Error> {
        if self.is_zero() {
            if exp.is_zero() {
                // 0 ^ 0 = 1
                return Ok(ONE.with_precision(self.max_precision()));
            }

            if exp < &*ZERO {
                return Err(Error::DivisionByZero);
            }

            return Ok(self.clone());
        }

        if self == &*ONE {
            return Ok(self.clone());
        }

        if exp.add(&ONE).is_zero() {
            return ONE.div(self);
        }

        let mut exp = exp.clone();
        let mut need_reverse = false;
        if exp.mantissa().is_negative() {
            exp = -exp;
            need_reverse = true;
        }

        // the smaller the mantissa is against the offset, the more digits the
        // buffered intermediates need
        let mut pow_additional = 4usize;
        if self.offset() > 0 {
            let digits = decimal_digits(self.mantissa()) as i64;
            let buffer = 3 * (self.offset() as i64 - digits + 1).max(0);
            pow_additional += buffer as usize;
        }

        let desired = exp.max_precision().max(self.max_precision());
        let desired_buf = desired + pow_additional;
        let entier = exp.floor();
        let tail = exp.sub(&Self::from_bigint(entier.clone()));

        if tail.is_zero() {
            let pow_precision = if self.offset() == 0 {
                desired_buf
            } else {
                let scale = entier.to_usize().ok_or(Error::Overflow)?;
                desired_buf.max(self.offset() * scale)
            };

            let mut t = self.with_precision(pow_precision).powi(entier)?;
            if t.is_zero() {
                return Err(Error::Internal);
            }

            if need_reverse {
                t = ONE.div(&t.with_precision(desired_buf))?;
            }

            return Ok(t.round(desired));
        }

        if self.mantissa().is_negative() {
            return Err(Error::InvalidArgument);
        }

        let mut result = if need_reverse {
            self.with_precision(10_000).powi(entier)?
        } else {
            self.powi(entier)?
        };

        let tail_part = if tail == *HALF {
            self.sqrt()?.with_precision(desired_buf)
        } else if tail == *QUARTER {
            self.sqrt()?.sqrt()?.with_precision(desired_buf)
        } else if tail == *EIGHTH {
            self.sqrt()?.sqrt()?.sqrt()?.with_precision(desired_buf)
        } else if tail == *SIXTEENTH {
            self.sqrt()?
                .sqrt()?
                .sqrt()?
                .sqrt()?
                .with_precision(desired_buf)
        } else {
            // a^b = e^(b * ln(a))
            tail.mul(&self.with_precision(desired_buf).ln()?).exp()?
        };

        result = result.mul(&tail_part);
        if need_reverse {
            result = ONE.div(&result)?;
        }

        Ok(result.round(desired))
    }

    /// Decimal power with a double exponent. See [`BigDec::pow`].
    pub fn powf(&self, exp: f64) -> Result<Self, Error> {
        self.pow(&Self::try_from(exp)?)
    }

    /// Decimal power with a 128-bit decimal exponent. See [`BigDec::pow`].
    pub fn pow_decimal(&self, exp: Decimal) -> Result<Self, Error> {
        self.pow(&Self::from(exp))
    }
}
