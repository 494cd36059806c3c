//! Engineering notation.
//!
//! Numbers are written with a mantissa scaled to a power of 1000 and a metric suffix.
//! For example `1500.0` is written `"1.5K"` and `0.0025` is written `"2.5m"`.
use std::{error, fmt};

/// Metric suffixes, from 10^-24 to 10^24
const SUFFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "u", "m", "", "K", "M", "G", "T", "P", "E", "Z", "Y",
];
const MIN_EXP: i32 = -24;
const MAX_EXP: i32 = 24;

/// Round the mantissa of `value`, written in scientific notation, to `decimals` fractional digits.
///
/// `round_mantissa(1.23456789, 2)` is `1.23` and `round_mantissa(123456.0, 1)` is `120000.0`.
/// Zero and non-finite values are returned unchanged.
pub fn round_mantissa(value: f64, decimals: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    // the formatter performs correct decimal rounding
    format!("{value:.decimals$e}").parse().unwrap_or(value)
}

/// The engineering exponent (multiple of 3) of `value`, clamped to the supported suffixes
pub fn exponent(value: f64) -> i32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let abs = round_mantissa(value.abs(), 12);
    let mut exp = abs.log10().floor() as i32;
    // log10 can be off by one ulp around exact powers of ten
    if scale_up(1.0, exp + 1) <= abs {
        exp += 1;
    } else if scale_up(1.0, exp) > abs {
        exp -= 1;
    }
    (exp.div_euclid(3) * 3).clamp(MIN_EXP, MAX_EXP)
}

/// The metric suffix of an engineering exponent
pub fn suffix(exp: i32) -> Option<&'static str> {
    if exp % 3 != 0 || !(MIN_EXP..=MAX_EXP).contains(&exp) {
        return None;
    }
    Some(SUFFIXES[((exp - MIN_EXP) / 3) as usize])
}

fn scale_down(value: f64, exp: i32) -> f64 {
    if exp >= 0 {
        value / 10f64.powi(exp)
    } else {
        value * 10f64.powi(-exp)
    }
}

fn scale_up(value: f64, exp: i32) -> f64 {
    if exp >= 0 {
        value * 10f64.powi(exp)
    } else {
        value / 10f64.powi(-exp)
    }
}

/// The mantissa and exponent of `value` in engineering notation
pub fn split(value: f64) -> (f64, i32) {
    let exp = exponent(value);
    (scale_down(value, exp), exp)
}

/// Format `value` in engineering notation with `frac_digits` mantissa fractional digits.
///
/// When rounding brings the mantissa to 1000, the next suffix is used (`999.96` with 1 digit is `"1.0K"`).
pub fn format(value: f64, frac_digits: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let (mut mant, mut exp) = split(value);
    let mut text = format!("{mant:.frac_digits$}");
    if exp < MAX_EXP && text.trim_start_matches('-').parse::<f64>().unwrap_or(0.0) >= 1000.0 {
        exp += 3;
        mant = scale_down(value, exp);
        text = format!("{mant:.frac_digits$}");
    }
    // no negative zero label
    if text.starts_with('-') && text[1..].bytes().all(|b| b == b'0' || b == b'.') {
        text.remove(0);
    }
    text.push_str(suffix(exp).unwrap_or(""));
    text
}

/// Error returned by [`parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    text: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid engineering notation number: '{}'", self.text)
    }
}

impl error::Error for ParseError {}

/// Parse a number written in engineering notation, such as `"1.5K"` or `"-20u"`.
///
/// The micro suffix can be written `u` or `µ`. Numbers without suffix are accepted.
pub fn parse(text: &str) -> Result<f64, ParseError> {
    let err = || ParseError {
        text: text.to_string(),
    };
    let trimmed = text.trim();
    let last = trimmed.chars().last().ok_or_else(err)?;
    let (num, exp) = if last.is_ascii_digit() || last == '.' {
        (trimmed, 0)
    } else {
        let sfx = if last == 'µ' || last == 'μ' { 'u' } else { last };
        let idx = SUFFIXES
            .iter()
            .position(|s| s.chars().next() == Some(sfx))
            .ok_or_else(err)?;
        let exp = MIN_EXP + 3 * idx as i32;
        (&trimmed[..trimmed.len() - last.len_utf8()], exp)
    };
    let mant: f64 = num.trim().parse().map_err(|_| err())?;
    if !mant.is_finite() {
        return Err(err());
    }
    Ok(scale_up(mant, exp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn test_round_mantissa() {
        assert_eq!(round_mantissa(1.23456789, 2), 1.23);
        assert_eq!(round_mantissa(123456.0, 1), 120000.0);
        assert_eq!(round_mantissa(0.1 + 0.2, 10), 0.3);
        assert_eq!(round_mantissa(-0.000123456, 3), -0.0001235);
        assert_eq!(round_mantissa(0.0, 3), 0.0);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(exponent(0.0), 0);
        assert_eq!(exponent(1.0), 0);
        assert_eq!(exponent(999.0), 0);
        assert_eq!(exponent(1000.0), 3);
        assert_eq!(exponent(-1500.0), 3);
        assert_eq!(exponent(0.001), -3);
        assert_eq!(exponent(0.0009), -6);
        assert_eq!(exponent(1e30), 24);
        assert_eq!(exponent(1e-30), -24);
    }

    #[test]
    fn test_format() {
        assert_eq!(format(1500.0, 1), "1.5K");
        assert_eq!(format(0.0025, 1), "2.5m");
        assert_eq!(format(-20e-6, 0), "-20u");
        assert_eq!(format(0.0, 0), "0");
        assert_eq!(format(0.0, 2), "0.00");
        assert_eq!(format(42.0, 0), "42");
        assert_eq!(format(2e9, 0), "2G");
        assert_eq!(format(999.96, 1), "1.0K");
        assert_eq!(format(-1e-20, 0), "-10z");
    }

    #[test]
    fn test_parse() {
        assert_near!(rel, parse("1.5K").unwrap(), 1500.0);
        assert_near!(rel, parse("2.5m").unwrap(), 0.0025);
        assert_near!(rel, parse("-20u").unwrap(), -20e-6);
        assert_near!(rel, parse("-20µ").unwrap(), -20e-6);
        assert_near!(rel, parse(" 3.25 ").unwrap(), 3.25);
        assert_near!(rel, parse("7Y").unwrap(), 7e24);
        assert!(parse("").is_err());
        assert!(parse("K").is_err());
        assert!(parse("1.5Q").is_err());
        assert!(parse("abc").is_err());
    }

    #[test]
    fn format_then_parse() {
        for v in [1.0, 12.5, 1e-9, -3.3e6, 470e-12, 0.1] {
            assert_near!(rel, parse(&format(v, 3)).unwrap(), v, 1e-9);
        }
    }
}
