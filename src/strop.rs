//! String conversion.

use crate::num::BigDec;
use core::fmt::{self, Display, Formatter};
use num_integer::Integer;
use num_traits::Signed;

impl BigDec {
    /// Formats the number with the given decimal separator.
    pub fn to_string_with_separator(&self, separator: char) -> String {
        if self.offset() == 0 {
            return self.mantissa().to_string();
        }

        let negative = self.is_negative();
        let value = self.mantissa().abs();
        let (entier, tail) = value.div_rem(&self.offset_power());

        let tail = format!("{:0>width$}", tail.to_string(), width = self.offset());
        let tail = tail.trim_end_matches('0');
        let sign = if negative { "-" } else { "" };
        if tail.is_empty() {
            format!("{}{}", sign, entier)
        } else {
            format!("{}{}{}{}", sign, entier, separator, tail)
        }
    }
}

impl Display for BigDec {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(&self.to_string_with_separator('.'))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> BigDec {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_string() {
        assert_eq!(dec("0").to_string(), "0");
        assert_eq!(dec("1337").to_string(), "1337");
        assert_eq!(dec("-1337").to_string(), "-1337");
        assert_eq!(dec("13.37").to_string(), "13.37");
        assert_eq!(dec("-13.37").to_string(), "-13.37");
        assert_eq!(dec("0.5").to_string(), "0.5");
        assert_eq!(dec("-0.5").to_string(), "-0.5");
        assert_eq!(dec("0.0000042").to_string(), "0.0000042");
        assert_eq!(dec("15.00000").to_string(), "15");
        assert_eq!(dec("13.e+1").to_string(), "130");
        assert_eq!(dec("13.37e-3").to_string(), "0.01337");
    }

    #[test]
    fn test_to_string_with_separator() {
        assert_eq!(dec("13.37").to_string_with_separator(','), "13,37");
        assert_eq!(dec("-0.001").to_string_with_separator(','), "-0,001");
        assert_eq!(dec("42").to_string_with_separator(','), "42");
    }

    #[test]
    fn test_string_round_trip() {
        for s in [
            "0",
            "1",
            "-1",
            "13.37",
            "-13.37",
            "0.000001",
            "123456789012345678901234567890.000000000000000001",
            "-0.5",
        ] {
            assert_eq!(dec(s).to_string(), s, "{s}");
        }
    }
}
