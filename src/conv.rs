//! Conversion between BigDec and the native numeric types.

use crate::common::consts::pow10;
use crate::defs::{Error, MAX_DECIMAL_SCALE, MAX_DEFAULT_PRECISION};
use crate::num::BigDec;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

// Floating point mantissas are snapped to a nearby multiple of a power of ten
// when they are close enough to one, to absorb the binary representation noise
// of values such as 0.1 + 0.2. The gate is the length of the shortest decimal
// form, below it the mantissa is taken as is.
const F64_DIGITS_GATE: usize = 18;
const F64_SNAP_RULES: &[(u32, u32)] = &[(1_000_000, 15), (10_000, 10), (1_000, 3)];
const F32_DIGITS_GATE: usize = 9;
const F32_SNAP_RULES: &[(u32, u32)] = &[(1_000_000, 55), (10_000, 53), (1_000, 10)];

fn snap_mantissa(mantissa: &mut BigInt, rules: &[(u32, u32)]) {
    for &(modulus, tolerance) in rules {
        let modulus = BigInt::from(modulus);
        let rem = &*mantissa % &modulus;
        if rem.is_zero() {
            return;
        }
        if rem <= BigInt::from(tolerance) {
            *mantissa -= rem;
            return;
        }
        if rem >= &modulus - tolerance {
            *mantissa += modulus - rem;
            return;
        }
    }
}

fn from_float_repr(negative: bool, repr: &str, gate: usize, rules: &[(u32, u32)]) -> Result<BigDec, Error> {
    let parsed = crate::parser::parse(repr)?;
    let mut mantissa = parsed.mantissa().clone();

    if repr.len() >= gate {
        snap_mantissa(&mut mantissa, rules);
    }

    if negative {
        mantissa = -mantissa;
    }

    let offset = parsed.offset();
    Ok(BigDec::from_parts(
        mantissa,
        offset,
        offset.max(MAX_DEFAULT_PRECISION),
    ))
}

impl BigDec {
    /// Creates a value from a big integer with the default precision.
    pub fn from_bigint(value: BigInt) -> Self {
        Self::from_parts(value, 0, MAX_DEFAULT_PRECISION)
    }

    /// The integer part of the value, truncated toward zero.
    pub fn to_bigint(&self) -> BigInt {
        self.floor()
    }

    /// Creates a value from a double precision float through its shortest
    /// decimal form, snapping away the binary representation noise.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `value` is not finite.
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::InvalidArgument);
        }
        if value == 0.0 {
            return Ok(Self::from_parts(BigInt::zero(), 0, MAX_DEFAULT_PRECISION));
        }

        let repr = format!("{}", value.abs());
        from_float_repr(value < 0.0, &repr, F64_DIGITS_GATE, F64_SNAP_RULES)
    }

    /// Creates a value from a single precision float. See [`BigDec::from_f64`].
    pub fn from_f32(value: f32) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::InvalidArgument);
        }
        if value == 0.0 {
            return Ok(Self::from_parts(BigInt::zero(), 0, MAX_DEFAULT_PRECISION));
        }

        let repr = format!("{}", value.abs());
        from_float_repr(value < 0.0, &repr, F32_DIGITS_GATE, F32_SNAP_RULES)
    }

    /// The nearest double precision float. Values outside the f64 range
    /// collapse to infinity.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    /// The nearest single precision float.
    pub fn to_f32(&self) -> f32 {
        self.to_string().parse().unwrap_or(f32::NAN)
    }
}

impl TryFrom<f64> for BigDec {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<f32> for BigDec {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self, Error> {
        Self::from_f32(value)
    }
}

impl From<BigInt> for BigDec {
    fn from(value: BigInt) -> Self {
        Self::from_bigint(value)
    }
}

impl From<&BigDec> for BigInt {
    fn from(value: &BigDec) -> Self {
        value.to_bigint()
    }
}

impl From<Decimal> for BigDec {
    fn from(value: Decimal) -> Self {
        let scale = value.scale() as usize;
        Self::from_parts(
            BigInt::from(value.mantissa()),
            scale,
            scale.max(MAX_DEFAULT_PRECISION),
        )
    }
}

impl TryFrom<&BigDec> for Decimal {
    type Error = Error;

    /// Narrows to the 96-bit decimal. Fractional digits that do not fit are
    /// dropped; an integer part that does not fit is an overflow, and so is a
    /// nonzero value collapsing to zero.
    fn try_from(value: &BigDec) -> Result<Self, Error> {
        if value.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let negative = value.mantissa().is_negative();
        let mut mantissa = value.mantissa().abs();
        let mut scale = value.offset();

        if scale > MAX_DECIMAL_SCALE {
            mantissa /= pow10(scale - MAX_DECIMAL_SCALE);
            scale = MAX_DECIMAL_SCALE;
        }

        while scale > 0 && mantissa.bits() > 96 {
            mantissa /= 10u32;
            scale -= 1;
        }

        if mantissa.is_zero() || mantissa.bits() > 96 {
            return Err(Error::Overflow);
        }

        let (_, digits) = mantissa.to_u32_digits();
        let lo = digits.first().copied().unwrap_or(0);
        let mid = digits.get(1).copied().unwrap_or(0);
        let hi = digits.get(2).copied().unwrap_or(0);

        Ok(Decimal::from_parts(lo, mid, hi, negative, scale as u32))
    }
}

impl TryFrom<BigDec> for Decimal {
    type Error = Error;

    fn try_from(value: BigDec) -> Result<Self, Error> {
        Decimal::try_from(&value)
    }
}

macro_rules! impl_int_conv {
    ($($t:ty => $to:ident),* $(,)?) => {$(
        impl From<$t> for BigDec {
            fn from(value: $t) -> Self {
                Self::from_parts(BigInt::from(value), 0, MAX_DEFAULT_PRECISION)
            }
        }

        impl TryFrom<&BigDec> for $t {
            type Error = Error;

            fn try_from(value: &BigDec) -> Result<Self, Error> {
                value.to_bigint().$to().ok_or(Error::Overflow)
            }
        }

        impl TryFrom<BigDec> for $t {
            type Error = Error;

            fn try_from(value: BigDec) -> Result<Self, Error> {
                <$t>::try_from(&value)
            }
        }
    )*};
}

impl_int_conv!(
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    i128 => to_i128,
    isize => to_isize,
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    u128 => to_u128,
    usize => to_usize,
);

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> BigDec {
        s.parse().unwrap()
    }

    #[test]
    fn test_int_conversions() {
        assert_eq!(BigDec::from(42u8), dec("42"));
        assert_eq!(BigDec::from(-13i64), dec("-13"));
        assert_eq!(i32::try_from(&dec("1337")).unwrap(), 1337);
        assert_eq!(i32::try_from(&dec("13.99")).unwrap(), 13);
        assert_eq!(i32::try_from(&dec("-13.99")).unwrap(), -13);
        assert_eq!(u8::try_from(&dec("255")).unwrap(), 255);
        assert_eq!(u8::try_from(dec("256")), Err(Error::Overflow));
        assert_eq!(u64::try_from(dec("-1")), Err(Error::Overflow));
        assert_eq!(i64::try_from(&dec("9223372036854775808")), Err(Error::Overflow));
    }

    #[test]
    fn test_bigint_conversions() {
        let huge: BigInt = "123456789012345678901234567890".parse().unwrap();
        let v = BigDec::from_bigint(huge.clone());
        assert_eq!(v.to_string(), "123456789012345678901234567890");
        assert_eq!(BigInt::from(&v), huge);
        assert_eq!(dec("-7.5").to_bigint(), BigInt::from(-7));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(BigDec::try_from(0.5f64).unwrap(), dec("0.5"));
        assert_eq!(BigDec::try_from(-0.125f64).unwrap(), dec("-0.125"));
        assert_eq!(BigDec::try_from(0.0f64).unwrap(), dec("0"));
        assert_eq!(BigDec::try_from(1e20f64).unwrap(), dec("100000000000000000000"));

        // representation noise is snapped away
        assert_eq!(BigDec::try_from(0.1f64 + 0.2).unwrap(), dec("0.3"));
        assert_eq!(BigDec::try_from(0.3f64).unwrap(), dec("0.3"));

        // a genuinely long mantissa survives
        let third = BigDec::try_from(1.0f64 / 3.0).unwrap();
        assert_eq!(third, dec("0.3333333333333333"));
    }

    #[test]
    fn test_from_f32() {
        assert_eq!(BigDec::try_from(0.1f32).unwrap(), dec("0.1"));
        assert_eq!(BigDec::try_from(-2.5f32).unwrap(), dec("-2.5"));
        assert_eq!(BigDec::try_from(1.0f32 / 3.0).unwrap(), dec("0.33333334"));
    }

    #[test]
    fn test_from_float_rejects_non_finite() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(BigDec::try_from(v), Err(Error::InvalidArgument));
        }
        for v in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(BigDec::try_from(v), Err(Error::InvalidArgument));
        }
    }

    #[test]
    fn test_to_float() {
        assert_eq!(dec("0.1").to_f64(), 0.1);
        assert_eq!(dec("-13.37").to_f64(), -13.37);
        assert_eq!(dec("0").to_f64(), 0.0);
        assert_eq!(dec("0.5").to_f32(), 0.5f32);

        let round_trip = BigDec::try_from(0.30000000000000004f64).unwrap();
        assert_eq!(round_trip.to_f64(), 0.3);
    }

    #[test]
    fn test_decimal_conversions() {
        let d = Decimal::new(1337, 2);
        assert_eq!(BigDec::from(d), dec("13.37"));

        let v = dec("-42.000001");
        assert_eq!(Decimal::try_from(&v).unwrap().to_string(), "-42.000001");

        // scale narrows to 28, dropping digits beyond it
        let tiny = BigDec::pow_frac_of_ten(30, 30).mul(&dec("1234567"));
        let narrowed = Decimal::try_from(&tiny).unwrap();
        assert_eq!(narrowed.to_string(), "0.0000000000000000000000012345");

        let max = Decimal::MAX;
        assert_eq!(Decimal::try_from(&BigDec::from(max)).unwrap(), max);
    }

    #[test]
    fn test_decimal_overflow() {
        let too_wide = dec("79228162514264337593543950336");
        assert_eq!(Decimal::try_from(&too_wide), Err(Error::Overflow));

        // nonzero value collapsing to zero is an underflow
        let vanishing = BigDec::pow_frac_of_ten(40, 40);
        assert_eq!(Decimal::try_from(&vanishing), Err(Error::Overflow));
    }
}
