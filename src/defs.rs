//! Definitions.

use core::fmt::Display;

/// Maximum number of fractional digits a value keeps by default.
pub const MAX_DEFAULT_PRECISION: usize = 18;

/// Precision buffer used for inner calculations.
pub(crate) const PRECISION_BUFFER: usize = 5;

/// Precision buffer used for inner calculations in the natural logarithm.
pub(crate) const PRECISION_LN_BUFFER: usize = 5;

/// Largest scale representable by `rust_decimal::Decimal`.
pub(crate) const MAX_DECIMAL_SCALE: usize = 28;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Divisor is zero.
    DivisionByZero,

    /// Input string is not a valid decimal literal.
    MalformedLiteral,

    /// The operation is undefined for the argument: logarithm of a non-positive
    /// value, fractional power of a negative base, or a non-finite float input.
    InvalidArgument,

    /// The target type cannot represent the value.
    Overflow,

    /// Internal precision bookkeeping failure. Indicates a bug rather than a
    /// problem with the input.
    Internal,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::DivisionByZero => "division by zero",
            Error::MalformedLiteral => "malformed decimal literal",
            Error::InvalidArgument => "invalid argument",
            Error::Overflow => "value out of range of the target type",
            Error::Internal => "internal precision bookkeeping failure",
        };
        f.write_str(repr)
    }
}
