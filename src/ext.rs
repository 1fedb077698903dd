//! Operator traits for BigDec, the native integers, and BigInt operands.

use crate::num::BigDec;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigInt;
use rust_decimal::Decimal;

fn div_or_panic(lhs: &BigDec, rhs: &BigDec) -> BigDec {
    match lhs.div(rhs) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

fn dec_from_f64(value: f64) -> BigDec {
    match BigDec::from_f64(value) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

fn dec_from_f32(value: f32) -> BigDec {
    match BigDec::from_f32(value) {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

impl Neg for BigDec {
    type Output = BigDec;

    fn neg(self) -> BigDec {
        -&self
    }
}

impl Neg for &BigDec {
    type Output = BigDec;

    fn neg(self) -> BigDec {
        // negation preserves canonical form
        BigDec::raw(-self.mantissa(), self.offset(), self.max_precision())
    }
}

macro_rules! impl_dec_binop {
    ($trait:ident, $method:ident, $call:expr) => {
        impl $trait for BigDec {
            type Output = BigDec;

            fn $method(self, rhs: BigDec) -> BigDec {
                $call(&self, &rhs)
            }
        }

        impl $trait<&BigDec> for BigDec {
            type Output = BigDec;

            fn $method(self, rhs: &BigDec) -> BigDec {
                $call(&self, rhs)
            }
        }

        impl $trait<BigDec> for &BigDec {
            type Output = BigDec;

            fn $method(self, rhs: BigDec) -> BigDec {
                $call(self, &rhs)
            }
        }

        impl $trait<&BigDec> for &BigDec {
            type Output = BigDec;

            fn $method(self, rhs: &BigDec) -> BigDec {
                $call(self, rhs)
            }
        }
    };
}

impl_dec_binop!(Add, add, BigDec::add);
impl_dec_binop!(Sub, sub, BigDec::sub);
impl_dec_binop!(Mul, mul, BigDec::mul);
impl_dec_binop!(Div, div, div_or_panic);

macro_rules! impl_dec_assign {
    ($trait:ident, $method:ident, $call:expr) => {
        impl $trait for BigDec {
            fn $method(&mut self, rhs: BigDec) {
                *self = $call(&*self, &rhs);
            }
        }

        impl $trait<&BigDec> for BigDec {
            fn $method(&mut self, rhs: &BigDec) {
                *self = $call(&*self, rhs);
            }
        }
    };
}

impl_dec_assign!(AddAssign, add_assign, BigDec::add);
impl_dec_assign!(SubAssign, sub_assign, BigDec::sub);
impl_dec_assign!(MulAssign, mul_assign, BigDec::mul);
impl_dec_assign!(DivAssign, div_assign, div_or_panic);

macro_rules! impl_native_binop {
    ($trait:ident, $method:ident, $call:expr, $t:ty, $conv:expr) => {
        impl $trait<$t> for BigDec {
            type Output = BigDec;

            fn $method(self, rhs: $t) -> BigDec {
                $call(&self, &$conv(rhs))
            }
        }

        impl $trait<$t> for &BigDec {
            type Output = BigDec;

            fn $method(self, rhs: $t) -> BigDec {
                $call(self, &$conv(rhs))
            }
        }

        impl $trait<BigDec> for $t {
            type Output = BigDec;

            fn $method(self, rhs: BigDec) -> BigDec {
                $call(&$conv(self), &rhs)
            }
        }

        impl $trait<&BigDec> for $t {
            type Output = BigDec;

            fn $method(self, rhs: &BigDec) -> BigDec {
                $call(&$conv(self), rhs)
            }
        }
    };
}

macro_rules! impl_native_num {
    ($($t:ty),* $(,)?) => {$(
        impl_native_binop!(Add, add, BigDec::add, $t, BigDec::from);
        impl_native_binop!(Sub, sub, BigDec::sub, $t, BigDec::from);
        impl_native_binop!(Mul, mul, BigDec::mul, $t, BigDec::from);
        impl_native_binop!(Div, div, div_or_panic, $t, BigDec::from);

        impl PartialEq<$t> for BigDec {
            fn eq(&self, other: &$t) -> bool {
                *self == BigDec::from(*other)
            }
        }

        impl PartialEq<BigDec> for $t {
            fn eq(&self, other: &BigDec) -> bool {
                BigDec::from(*self) == *other
            }
        }

        impl PartialOrd<$t> for BigDec {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.partial_cmp(&BigDec::from(*other))
            }
        }

        impl PartialOrd<BigDec> for $t {
            fn partial_cmp(&self, other: &BigDec) -> Option<Ordering> {
                BigDec::from(*self).partial_cmp(other)
            }
        }
    )*};
}

impl_native_num!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_native_num!(Decimal);

// float operands go through the snapping conversion; an operator with a
// non-finite operand panics, a comparison is simply false
macro_rules! impl_float_num {
    ($($t:ty => $conv:ident),* $(,)?) => {$(
        impl_native_binop!(Add, add, BigDec::add, $t, $conv);
        impl_native_binop!(Sub, sub, BigDec::sub, $t, $conv);
        impl_native_binop!(Mul, mul, BigDec::mul, $t, $conv);
        impl_native_binop!(Div, div, div_or_panic, $t, $conv);

        impl PartialEq<$t> for BigDec {
            fn eq(&self, other: &$t) -> bool {
                matches!(BigDec::try_from(*other), Ok(v) if *self == v)
            }
        }

        impl PartialEq<BigDec> for $t {
            fn eq(&self, other: &BigDec) -> bool {
                other == self
            }
        }

        impl PartialOrd<$t> for BigDec {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.partial_cmp(&BigDec::try_from(*other).ok()?)
            }
        }

        impl PartialOrd<BigDec> for $t {
            fn partial_cmp(&self, other: &BigDec) -> Option<Ordering> {
                BigDec::try_from(*self).ok()?.partial_cmp(other)
            }
        }
    )*};
}

impl_float_num!(f32 => dec_from_f32, f64 => dec_from_f64);

macro_rules! impl_bigint_binop {
    ($trait:ident, $method:ident, $call:expr) => {
        impl $trait<BigInt> for BigDec {
            type Output = BigDec;

            fn $method(self, rhs: BigInt) -> BigDec {
                $call(&self, &BigDec::from(rhs))
            }
        }

        impl $trait<BigDec> for BigInt {
            type Output = BigDec;

            fn $method(self, rhs: BigDec) -> BigDec {
                $call(&BigDec::from(self), &rhs)
            }
        }
    };
}

impl_bigint_binop!(Add, add, BigDec::add);
impl_bigint_binop!(Sub, sub, BigDec::sub);
impl_bigint_binop!(Mul, mul, BigDec::mul);
impl_bigint_binop!(Div, div, div_or_panic);

impl PartialEq<BigInt> for BigDec {
    fn eq(&self, other: &BigInt) -> bool {
        self.offset() == 0 && self.mantissa() == other
    }
}

impl PartialEq<BigDec> for BigInt {
    fn eq(&self, other: &BigDec) -> bool {
        other == self
    }
}
