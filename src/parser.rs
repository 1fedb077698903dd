//! Parser of decimal literals and exponential notation.

use crate::defs::Error;
use crate::defs::MAX_DEFAULT_PRECISION;
use crate::num::BigDec;
use core::str::FromStr;
use num_bigint::BigInt;
use num_traits::Zero;

impl FromStr for BigDec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        parse(s)
    }
}

/// Parses a decimal literal: optional sign, integer digits, optional `.` with
/// fractional digits, and an optional `e`/`E` exponent with a mandatory sign.
/// Spaces and underscores are ignored.
pub(crate) fn parse(input: &str) -> Result<BigDec, Error> {
    let value: String = input.chars().filter(|c| *c != ' ' && *c != '_').collect();

    if value == "0" {
        return Ok(BigDec::from_parts(BigInt::zero(), 0, MAX_DEFAULT_PRECISION));
    }

    if let Some((body, exp)) = split_exponent(&value) {
        let body = parse_plain(body)?;
        let frac = BigDec::pow_frac_of_ten(-exp, MAX_DEFAULT_PRECISION);
        let precision = frac.offset() + body.max_precision();
        return Ok(body.with_precision(precision).mul(&frac));
    }

    parse_plain(&value)
}

// Splits `<body>e<sign><digits>` into the body and the exponent value.
// The exponent sign is mandatory, and the body must not start with a dot.
fn split_exponent(value: &str) -> Option<(&str, i64)> {
    let pos = value.find(['e', 'E'])?;
    let (body, tail) = value.split_at(pos);
    let tail = &tail[1..];

    let first = body.chars().next()?;
    if !(first.is_ascii_digit() || first == '+' || first == '-') {
        return None;
    }

    if !tail.starts_with(['+', '-']) {
        return None;
    }

    if tail.len() < 2 || !tail[1..].bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let exp: i64 = tail.parse().ok()?;
    Some((body, exp))
}

fn parse_plain(value: &str) -> Result<BigDec, Error> {
    let (sign, rest) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };

    let chunks: Vec<&str> = rest.split('.').collect();
    if chunks.len() > 2 || !chunks.iter().all(|c| c.bytes().all(|b| b.is_ascii_digit())) {
        return Err(Error::MalformedLiteral);
    }

    if chunks.len() == 1 {
        let value: BigInt = chunks[0].parse().map_err(|_| Error::MalformedLiteral)?;
        return Ok(BigDec::from_parts(value * sign, 0, MAX_DEFAULT_PRECISION));
    }

    let frac = chunks[1].trim_end_matches('0');
    if frac.is_empty() {
        let value: BigInt = chunks[0].parse().map_err(|_| Error::MalformedLiteral)?;
        return Ok(BigDec::from_parts(value * sign, 0, MAX_DEFAULT_PRECISION));
    }

    let offset = frac.len();
    let mantissa: BigInt = format!("{}{}", chunks[0], frac)
        .parse()
        .map_err(|_| Error::MalformedLiteral)?;

    Ok(BigDec::from_parts(
        mantissa * sign,
        offset,
        offset.max(MAX_DEFAULT_PRECISION),
    ))
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> BigDec {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_untrimmed() {
        assert_eq!(dec("13.370000"), dec("13.37"));
        assert_eq!(dec("15.00000"), BigDec::from(15));
        assert_eq!(dec("15."), BigDec::from(15));
        assert_eq!(dec("15"), BigDec::from(15));
    }

    #[test]
    fn test_parse_signs_and_separators() {
        assert_eq!(dec("-13.37"), -dec("13.37"));
        assert_eq!(dec("+13.37"), dec("13.37"));
        assert_eq!(dec("1 337.5"), dec("1337.5"));
        assert_eq!(dec("1_337.5"), dec("1337.5"));
        assert_eq!(dec(".5"), dec("0.5"));
    }

    #[test]
    fn test_parse_exponential() {
        let zero_forms = [
            "0e+0", "+0e+0", "-0e+0", "0e-0", "+0e-0", "-0e-0", "0.e+0", "+0.e+0", "-0.e+0",
            "0.e-0", "+0.e-0", "-0.e-0", "0.0e+0", "-0.0e-0",
        ];
        for s in zero_forms {
            assert_eq!(dec(s), BigDec::from(0), "{s}");
        }

        assert_eq!(dec("-13.e+0"), BigDec::from(-13));
        assert_eq!(dec("-13.e-0"), BigDec::from(-13));
        assert_eq!(dec("13.e+1"), BigDec::from(130));
        assert_eq!(dec("13.37e+1"), dec("133.7"));
        assert_eq!(dec("13.37e-1"), dec("1.337"));
        assert_eq!(dec("1e-100"), BigDec::pow_frac_of_ten(100, 100));
        assert_eq!(dec("5e+3"), BigDec::from(5000));
    }

    #[test]
    fn test_parse_exponential_random_shapes() {
        // <d>.<digits>e<exp> assembled from random magnitudes round-trips
        // through the scaled representation
        use num_traits::Pow;
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for len in [1usize, 4, 16, 32] {
            let mut digits = String::new();
            digits.push(char::from(b'1' + rng.gen_range(0..9u8)));
            for _ in 1..len {
                digits.push(char::from(b'0' + rng.gen_range(0..10u8)));
            }
            let t: BigInt = digits.parse().unwrap();

            for sign in [1i32, -1] {
                for exp in [-100i64, -1, 0, 1, 100] {
                    let input = format!(
                        "{}{}.{}e{}{}",
                        if sign == 1 { "" } else { "-" },
                        &digits[..1],
                        &digits[1..],
                        if exp < 0 { "" } else { "+" },
                        exp
                    );

                    let shift = exp - (len as i64 - 1);
                    let expected_mantissa = &t * sign;
                    let expected = if shift >= 0 {
                        BigDec::from_parts(
                            expected_mantissa * Pow::pow(&BigInt::from(10), shift as usize),
                            0,
                            MAX_DEFAULT_PRECISION,
                        )
                    } else {
                        BigDec::from_parts(
                            expected_mantissa,
                            (-shift) as usize,
                            (-shift) as usize,
                        )
                    };

                    assert_eq!(dec(&input), expected, "{input}");
                }
            }
        }
    }

    #[test]
    fn test_parse_malformed() {
        for s in ["", ".", "1.2.3", "12a", "13e5", "13e+", "1e+5x", "--5", "1.2-3"] {
            assert_eq!(s.parse::<BigDec>(), Err(Error::MalformedLiteral), "{s}");
        }
    }
}
