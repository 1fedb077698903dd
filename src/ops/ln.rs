//! Natural logarithm.

use crate::common::consts::{HUNDREDTH, ONE, ZERO};
use crate::common::util::ln_estimate;
use crate::defs::{Error, MAX_DEFAULT_PRECISION, PRECISION_LN_BUFFER};
use crate::num::BigDec;
use crate::ops::consts::{self, E, LN_SERIES_THRESHOLD};

impl BigDec {
    /// Natural logarithm.
    ///
    /// Range-reduces by integer powers of `e` first, then by the precomputed
    /// modifier table until the working value is within 1/1024 of 1, and
    /// expands the residual with the Mercator series for `ln(1+z)`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` is not positive.
    pub fn ln(&self) -> Result<Self, Error> {
        if self <= &*ZERO {
            return Err(Error::InvalidArgument);
        }

        let max_precision = self.max_precision();
        if self == &*ONE {
            return Ok(ZERO.with_precision(max_precision));
        }

        let z_precision = max_precision.max(self.offset()) + PRECISION_LN_BUFFER;

        // small inputs produce a large working value instead of a tiny one
        let invert = self <= &*HUNDREDTH;
        let mut z = if invert {
            ONE.div(&self.with_precision(z_precision))?
        } else {
            self.with_precision(z_precision)
        };

        let mut result = ZERO.clone();
        if z > *E {
            // a logarithm estimate picks most of the power directly
            let est = ln_estimate(z.mantissa())
                - z.offset() as f64 * core::f64::consts::LN_10;
            let p1 = est.floor() as i64;
            if p1 > 0 {
                let denominator = E.powi(p1)?;
                z = z.div(&denominator)?;
                result = result.add(&Self::from(p1));
            }

            while z > *E {
                result = result.add(&ONE);
                z = z.div(&E)?;
            }
        }

        // maximize the approximation of z to 1 through the modifier table
        while ONE.sub(&z).abs() >= *LN_SERIES_THRESHOLD {
            let modifier = consts::nearest_by_multiplier(z.to_f64());
            result = result.sub(&modifier.exp);
            z = z.mul(&modifier.multiplier);
        }

        let epsilon_precision = max_precision + PRECISION_LN_BUFFER;
        let epsilon =
            Self::pow_frac_of_ten(epsilon_precision as i64 + 1, MAX_DEFAULT_PRECISION);
        if epsilon <= *ZERO {
            return Err(Error::Internal);
        }

        let z = z.round(z_precision).sub(&ONE);
        let mut numerator = z.with_precision(z.max_precision() + PRECISION_LN_BUFFER);
        result = result.add(&numerator);

        let mut last_cycle = false;
        let mut i = 2i64;
        while (!last_cycle || i < 10) && i < 10_000 && !numerator.is_zero() {
            numerator = numerator.mul(&z);
            let term = numerator.div(&Self::from(i))?;
            last_cycle = term.abs() < epsilon;

            if i % 2 == 0 {
                result = result.sub(&term);
            } else {
                result = result.add(&term);
            }
            i += 1;
        }

        if invert {
            result = -result;
        }

        Ok(result.round(max_precision))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> BigDec {
        s.parse().unwrap()
    }

    fn assert_close(actual: &BigDec, expected: &str, eps: &str) {
        let diff = actual.sub(&dec(expected)).abs();
        assert!(
            diff < dec(eps),
            "expected {expected} +- {eps}, got {actual}"
        );
    }

    #[test]
    fn test_ln_domain() {
        assert_eq!(dec("0").ln(), Err(Error::InvalidArgument));
        assert_eq!(dec("-1").ln(), Err(Error::InvalidArgument));
        assert_eq!(dec("-0.0001").ln(), Err(Error::InvalidArgument));
    }

    #[test]
    fn test_ln_one() {
        assert_eq!(dec("1").ln().unwrap(), dec("0"));
        assert_eq!(dec("1").with_precision(50).ln().unwrap().max_precision(), 50);
    }

    #[test]
    fn test_ln_known_values() {
        assert_close(&dec("2").ln().unwrap(), "0.693147180559945309", "0.000000000000000002");
        assert_close(
            &dec("10").ln().unwrap(),
            "2.302585092994045684",
            "0.000000000000000002",
        );
        assert_close(
            &dec("0.5").ln().unwrap(),
            "-0.693147180559945309",
            "0.000000000000000002",
        );
        assert_close(
            &dec("1337").ln().unwrap(),
            "7.198183577101943178",
            "0.000000000000000002",
        );
    }

    #[test]
    fn test_ln_e() {
        let e18 = E.round(18);
        assert_close(&e18.ln().unwrap(), "1", "0.000000000000000002");
    }

    #[test]
    fn test_ln_small_input_inverts() {
        // ln(0.001) = -ln(1000)
        assert_close(
            &dec("0.001").ln().unwrap(),
            "-6.907755278982137052",
            "0.000000000000000002",
        );
        let a = dec("0.0042").ln().unwrap();
        let b = dec("1").div(&dec("0.0042")).unwrap().ln().unwrap();
        assert_close(&a.add(&b), "0", "0.000000000000000004");
    }

    #[test]
    fn test_ln_large_input() {
        // ln(10^40) = 40 ln(10)
        let v = dec("1e+40").ln().unwrap();
        assert_close(&v, "92.103403719761827361", "0.000000000000000002");
    }

    #[test]
    fn test_ln_high_precision() {
        let v = dec("2").with_precision(50).ln().unwrap();
        assert_close(
            &v,
            "0.69314718055994530941723212145817656807550013436026",
            "0.00000000000000000000000000000000000000000000000002",
        );
    }
}
