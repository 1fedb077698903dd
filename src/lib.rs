//! Bigdec is a library that implements arbitrary precision decimal numbers
//! with exact basic arithmetic and transcendental functions.
//!
//! A [BigDec] is a signed big-integer mantissa scaled by a power of ten,
//! bounded per instance by a maximum precision: fractional digits beyond it
//! are truncated away rather than kept forever. On top of the exact `+ - * /`
//! core the library provides banker's rounding, square roots, powers with
//! arbitrary decimal exponents, the natural logarithm and the exponential,
//! plus conversions to and from the native numeric types, 128-bit decimals,
//! and strings.
//!
//! ``` rust
//! use bigdec::BigDec;
//!
//! let a: BigDec = "0.1".parse().unwrap();
//! let b: BigDec = "0.2".parse().unwrap();
//! assert_eq!(a + b, "0.3".parse::<BigDec>().unwrap());
//!
//! let x = BigDec::from(2);
//! assert_eq!(x.sqrt().unwrap().to_string(), "1.414213562373095048");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod conv;
mod defs;
mod ext;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Error;
pub use crate::defs::MAX_DEFAULT_PRECISION;
pub use crate::num::BigDec;
pub use crate::ops::consts::E;
