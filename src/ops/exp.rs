//! Exponential function.

use crate::common::consts::{pow10, ONE};
use crate::defs::{Error, PRECISION_BUFFER};
use crate::num::BigDec;
use crate::ops::consts::{self, E, TABLE_GRANULARITY};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

impl BigDec {
    /// e raised to the power of `self`.
    ///
    /// Range-reduces by the integer part (through integer powers of `e`) and
    /// by the precomputed modifier table, then expands the residual with the
    /// Maclaurin series evaluated in fixed-scale integer arithmetic.
    pub fn exp(&self) -> Result<Self, Error> {
        let max_precision = self.max_precision();

        if self.is_zero() {
            return Ok(ONE.with_precision(max_precision));
        }

        if self.mantissa().is_negative() {
            let positive = (-self).exp()?;
            let inverted = ONE
                .with_precision(max_precision + PRECISION_BUFFER)
                .div(&positive)?;
            return Ok(inverted.round(max_precision));
        }

        let work_precision = max_precision + PRECISION_BUFFER;

        let entier = self.floor();
        let mut frac = self.sub(&Self::from_bigint(entier.clone()));
        let mut multiplier = if entier.is_zero() {
            ONE.with_precision(work_precision)
        } else {
            E.powi(entier)?
        };

        // push the remaining fraction toward zero through the modifier table
        let mut frac_f64 = frac.to_f64();
        while frac_f64.abs() >= TABLE_GRANULARITY {
            let modifier = consts::nearest_by_exp(frac_f64);
            frac = frac.sub(&modifier.exp);
            multiplier = multiplier.mul(&modifier.multiplier);
            frac_f64 = frac.to_f64();
        }

        // Maclaurin series on the residual: sum and term are integers at a
        // fixed scale of 10^w, the loop ends once a term degenerates
        let w = work_precision.max(frac.offset()) + PRECISION_BUFFER;
        let scale = pow10(w);
        let t = frac.mantissa() * pow10(w - frac.offset());

        let mut sum = scale.clone();
        let mut term = scale.clone();
        let mut i = 1u32;
        loop {
            term = (&term * &t) / (&scale * i);
            sum += &term;
            if term.abs() <= BigInt::from(10) {
                break;
            }
            i += 1;
        }

        let series = Self::raw(sum, w, w);
        Ok(series.mul(&multiplier).round(max_precision))
    }
}
