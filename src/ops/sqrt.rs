//! Square root.

use crate::common::consts::{pow10, ONE, ZERO};
use crate::defs::{Error, PRECISION_BUFFER};
use crate::num::BigDec;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

impl BigDec {
    /// Integer square root, truncated: Newton's method descending from a
    /// bit-length derived guess that is always above the root.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `value` is negative.
    pub fn isqrt(value: &BigInt) -> Result<BigInt, Error> {
        if value.is_zero() {
            return Ok(BigInt::zero());
        }

        if value.is_negative() {
            return Err(Error::InvalidArgument);
        }

        // 2^(bits/2 + 1) > sqrt(value), so the iteration decreases
        // monotonically and the first non-decreasing step is the answer
        let bit_length = value.bits() as usize;
        let mut root: BigInt = BigInt::one() << (bit_length / 2 + 1);

        loop {
            let next: BigInt = (&root + value / &root) / 2u32;
            if next >= root {
                return Ok(root);
            }
            root = next;
        }
    }

    /// Square root, truncated to the precision of `self`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` is negative.
    pub fn sqrt(&self) -> Result<Self, Error> {
        if self.mantissa().is_negative() {
            return Err(Error::InvalidArgument);
        }

        if self.is_zero() {
            return Ok(ZERO.with_precision(self.max_precision()));
        }

        if self == &*ONE {
            return Ok(ONE.with_precision(self.max_precision()));
        }

        // self = a * 10^-offset, sqrt(self) = isqrt(a') * 10^-b
        // with a' the mantissa rescaled to exactly 2b fractional digits
        let max_precision = self.max_precision();
        let mut b = max_precision + PRECISION_BUFFER;

        let scale_exp = 2 * b as i64 - self.offset() as i64;
        let a = match scale_exp {
            1.. => self.mantissa() * pow10(scale_exp as usize),
            0 => self.mantissa().clone(),
            _ => self.mantissa() / pow10(-scale_exp as usize),
        };

        let mut root = Self::isqrt(&a)?;
        if b > max_precision {
            root /= pow10(b - max_precision);
            b = max_precision;
        }

        Ok(Self::from_parts(root, b, max_precision))
    }
}
