//! Canonical spelling of hex-float literals.
//!
//! The accepted shapes, tried in order:
//!
//! | Input                   | Output                          |
//! |-------------------------|---------------------------------|
//! | `inf`, `-inf`, `nan`    | unchanged                       |
//! | `-0x0p+0`               | `-0x0p+0`                       |
//! | `[-]0x<d>p+0`           | `[-]<d>`                        |
//! | `[-]0x1p±N`             | unchanged, suffix dropped       |
//! | `[-]0x1.<hex>p±N`       | fraction zero-padded, see below |
//!
//! Any shape may carry an `L` or `Q` type suffix except the specials. The
//! fraction is padded to the target format's digit count only when at least
//! two digits are missing; shorter gaps are left alone.

use pest::Parser;
use pest::iterators::Pair;
use thiserror::Error;

use crate::format::FloatFormat;
use crate::parser::{Rule, TestcaseParser};

/// The literal matched none of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed hex-float literal '{0}'")]
pub struct LiteralError(pub String);

/// Pieces of a matched literal.
#[derive(Default)]
struct Parts<'a> {
    negative: bool,
    digit: &'a str,
    fraction: &'a str,
    exponent: &'a str,
}

impl<'a> Parts<'a> {
    fn of(pair: Pair<'a, Rule>) -> Self {
        let mut parts = Parts::default();
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::sign => parts.negative = true,
                Rule::digit => parts.digit = inner.as_str(),
                Rule::fraction => parts.fraction = inner.as_str(),
                Rule::exponent => parts.exponent = inner.as_str(),
                _ => {}
            }
        }
        parts
    }

    fn sign(&self) -> &'static str {
        if self.negative { "-" } else { "" }
    }
}

/// Returns the canonical form of `literal` for `format`.
///
/// ```
/// use fptab_core::{FloatFormat, literal::canonicalize};
///
/// assert_eq!(canonicalize("0x1.2p+3", FloatFormat::F32).unwrap(), "0x1.200000p+3");
/// assert_eq!(canonicalize("-0x1p-10L", FloatFormat::F64).unwrap(), "-0x1p-10");
/// assert_eq!(canonicalize("0x2p+0", FloatFormat::F32).unwrap(), "2");
/// ```
pub fn canonicalize(literal: &str, format: FloatFormat) -> Result<String, LiteralError> {
    let malformed = || LiteralError(literal.to_string());

    let shape = TestcaseParser::parse(Rule::literal, literal)
        .map_err(|_| malformed())?
        .next()
        .and_then(|pair| pair.into_inner().next())
        .ok_or_else(malformed)?;

    match shape.as_rule() {
        Rule::special => Ok(shape.as_str().to_string()),
        // Reducing -0 to an integer would lose its sign.
        Rule::neg_zero => Ok("-0x0p+0".to_string()),
        Rule::small_int => {
            let parts = Parts::of(shape);
            Ok(format!("{}{}", parts.sign(), parts.digit))
        }
        Rule::power_of_two => {
            let parts = Parts::of(shape);
            Ok(format!("{}0x1p{}", parts.sign(), parts.exponent))
        }
        Rule::hex_float => {
            let parts = Parts::of(shape);
            let width = format.hex_digits();
            let fraction = if width >= parts.fraction.len() + 2 {
                format!("{:0<width$}", parts.fraction)
            } else {
                parts.fraction.to_string()
            };
            Ok(format!("{}0x1.{}p{}", parts.sign(), fraction, parts.exponent))
        }
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn f32(literal: &str) -> String {
        canonicalize(literal, FloatFormat::F32).unwrap()
    }

    #[test]
    fn test_specials_pass_through() {
        for literal in ["inf", "-inf", "nan"] {
            for format in FloatFormat::ALL {
                assert_eq!(canonicalize(literal, format).unwrap(), literal);
            }
        }
    }

    #[test]
    fn test_small_integers() {
        let cases = [
            ("0x1p+0", "1"),
            ("-0x1p+0", "-1"),
            ("0x0p+0", "0"),
            ("0x2p+0", "2"),
            ("0x1.0p+0", "1"),
            ("0x1p+0L", "1"),
            ("0x9p+0Q", "9"),
        ];
        for (input, expected) in cases {
            assert_eq!(f32(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(f32("-0x0p+0"), "-0x0p+0");
        assert_eq!(f32("-0x0p+0L"), "-0x0p+0");
        assert_eq!(f32("-0x0.0p+0"), "-0x0p+0");
    }

    #[test]
    fn test_powers_of_two() {
        let cases = [
            ("0x1p-10", "0x1p-10"),
            ("-0x1p+127", "-0x1p+127"),
            ("0x1p-1022L", "0x1p-1022"),
            ("0x1p+16383Q", "0x1p+16383"),
            // Not the trivial `p+0` shape, so it is left as a power of two.
            ("0x1p+00", "0x1p+00"),
            ("0x1p-0", "0x1p-0"),
        ];
        for (input, expected) in cases {
            assert_eq!(f32(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_padding() {
        assert_eq!(f32("0x1.2p+3"), "0x1.200000p+3");
        assert_eq!(f32("-0x1.23p+4"), "-0x1.230000p+4");
        assert_eq!(f32("0x1.0p+3"), "0x1.000000p+3");
        assert_eq!(f32("0x1.00p+0"), "0x1.000000p+0");
        assert_eq!(
            canonicalize("0x1.8p-1L", FloatFormat::F64).unwrap(),
            "0x1.8000000000000p-1"
        );
        assert_eq!(
            canonicalize("0x1.fp+0Q", FloatFormat::F128).unwrap(),
            "0x1.f000000000000000000000000000p+0"
        );
        assert_eq!(
            canonicalize("0x1.8p+0", FloatFormat::F16).unwrap(),
            "0x1.800p+0"
        );
    }

    #[test]
    fn test_one_digit_short_is_left_alone() {
        assert_eq!(f32("0x1.abcdep+1"), "0x1.abcdep+1");
        assert_eq!(
            canonicalize("0x1.123456789abcp+0", FloatFormat::F64).unwrap(),
            "0x1.123456789abcp+0"
        );
    }

    #[test]
    fn test_longer_fractions_are_not_truncated() {
        assert_eq!(f32("0x1.123456789p+0"), "0x1.123456789p+0");
        assert_eq!(f32("-0x1.fffffep+127"), "-0x1.fffffep+127");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "0x1.2p+3",
            "-0x1.fffffep+127",
            "0x1p-149",
            "0x1.abcdep+1",
            "-0x0p+0",
            "nan",
            "-inf",
        ];
        for format in FloatFormat::ALL {
            for input in inputs {
                let once = canonicalize(input, format).unwrap();
                let twice = canonicalize(&once, format).unwrap();
                assert_eq!(once, twice, "{format}: {input}");
            }
        }
    }

    #[test]
    fn test_padding_keeps_existing_digits() {
        for digits in ["1", "12", "123", "1234"] {
            let literal = format!("-0x1.{digits}p+5");
            let canonical = canonicalize(&literal, FloatFormat::F64).unwrap();
            let fraction = canonical
                .strip_prefix("-0x1.")
                .and_then(|rest| rest.strip_suffix("p+5"))
                .unwrap();
            assert!(fraction.starts_with(digits), "{canonical}");
            assert!(fraction[digits.len()..].chars().all(|c| c == '0'));
            assert_eq!(fraction.len(), FloatFormat::F64.hex_digits());
        }
    }

    #[test]
    fn test_malformed() {
        let inputs = [
            "",
            "1.5",
            "0x2.8p+1",
            "0x1.8",
            "0x1.8p3",
            "0x1.ABp+3",
            "0x10p+0",
            "0x1p+3X",
            "-nan",
            "0x1.p+3",
            "infinity",
        ];
        for input in inputs {
            assert_eq!(
                canonicalize(input, FloatFormat::F32),
                Err(LiteralError(input.to_string())),
                "Expected failure for input: {}",
                input
            );
        }
    }
}
