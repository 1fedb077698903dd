//! Static constants.

use crate::num::BigDec;
use lazy_static::lazy_static;
use num_bigint::BigInt;
use num_traits::Pow;

/// Largest exponent held by the precomputed power-of-ten table.
const POW10_TABLE_DEPTH: usize = 2000;

lazy_static! {

    /// 10 as a big integer.
    pub(crate) static ref BIGINT_TEN: BigInt = BigInt::from(10);

    /// Powers of ten from 10^0 up to 10^2000.
    static ref POW10_TABLE: Vec<BigInt> = {
        let mut table = Vec::with_capacity(POW10_TABLE_DEPTH + 1);
        let mut last = BigInt::from(1);
        table.push(last.clone());
        for _ in 1..=POW10_TABLE_DEPTH {
            last *= 10;
            table.push(last.clone());
        }
        table
    };

    /// 10^3000, combined from the table entries.
    static ref POW10_3000: BigInt = &POW10_TABLE[1000] * &POW10_TABLE[2000];

    /// 0
    pub(crate) static ref ZERO: BigDec = BigDec::from(0);

    /// 1
    pub(crate) static ref ONE: BigDec = BigDec::from(1);

    /// 2
    pub(crate) static ref TWO: BigDec = BigDec::from(2);

    /// 0.5
    pub(crate) static ref HALF: BigDec = "0.5".parse().expect("constant HALF initialization");

    /// 0.25
    pub(crate) static ref QUARTER: BigDec = "0.25".parse().expect("constant QUARTER initialization");

    /// 0.125
    pub(crate) static ref EIGHTH: BigDec = "0.125".parse().expect("constant EIGHTH initialization");

    /// 0.0625
    pub(crate) static ref SIXTEENTH: BigDec = "0.0625".parse().expect("constant SIXTEENTH initialization");

    /// 0.01, the inversion threshold of the natural logarithm.
    pub(crate) static ref HUNDREDTH: BigDec = "0.01".parse().expect("constant HUNDREDTH initialization");
}

/// Returns 10 raised to the power of `exp`.
/// Exponents up to 2000 (and 3000) come from the precomputed table,
/// anything else is computed on demand.
pub(crate) fn pow10(exp: usize) -> BigInt {
    if exp <= POW10_TABLE_DEPTH {
        POW10_TABLE[exp].clone()
    } else if exp == 3000 {
        POW10_3000.clone()
    } else {
        Pow::pow(&*BIGINT_TEN, exp)
    }
}
