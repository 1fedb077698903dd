//! Transcendental operations: square root, powers, logarithm, exponential.

pub(crate) mod consts;
mod exp;
mod ln;
mod pow;
mod sqrt;
