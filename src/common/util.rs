//! Utility functions.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Number of decimal digits in the magnitude of `v`. Zero has one digit.
pub(crate) fn decimal_digits(v: &BigInt) -> usize {
    if v.is_zero() {
        1
    } else {
        v.abs().to_string().len()
    }
}

/// Lower estimate of the natural logarithm of the magnitude of `v`.
/// The result is below `ln |v|` by at most `ln 2`.
pub(crate) fn ln_estimate(v: &BigInt) -> f64 {
    let bits = v.bits();
    if bits <= 1 {
        0.0
    } else {
        (bits - 1) as f64 * core::f64::consts::LN_2
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(&BigInt::from(0)), 1);
        assert_eq!(decimal_digits(&BigInt::from(9)), 1);
        assert_eq!(decimal_digits(&BigInt::from(10)), 2);
        assert_eq!(decimal_digits(&BigInt::from(-12345)), 5);
        assert_eq!(decimal_digits(&BigInt::from(10u64.pow(19))), 20);
    }

    #[test]
    fn test_ln_estimate() {
        for v in [1i64, 2, 3, 10, 1000, i64::MAX] {
            let est = ln_estimate(&BigInt::from(v));
            let exact = (v as f64).ln();
            assert!(est <= exact + 1e-9);
            assert!(exact - est <= core::f64::consts::LN_2 + 1e-9);
        }
    }
}
