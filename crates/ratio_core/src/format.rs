//! Canonical number rendering.
//!
//! Every digit-level algorithm in this crate (decimal parsing, repeat-cycle
//! detection, reduction) operates on one canonical decimal rendering of an
//! `f64`, produced by [`format_value`]: shortest round-trip digits, fixed
//! notation while the decimal exponent stays in `(-7, 21]`, exponential
//! `d[.ddd]e±k` outside, and the `NaN` / `Infinity` / `0` tokens.

use crate::operand::Operand;

/// Renders `x` in the canonical decimal form described in the module docs.
///
/// Negative zero renders as `"0"`.
pub fn format_value(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x < 0.0 {
        return format!("-{}", format_value(-x));
    }
    if x.is_infinite() {
        return "Infinity".to_string();
    }

    // `{:e}` already yields the shortest digit string that round-trips.
    let sci = format!("{x:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the digit string.
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    if k <= n && n <= 21 {
        let mut out = digits;
        out.extend(std::iter::repeat('0').take((n - k) as usize));
        out
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat(-n as usize), digits)
    } else {
        let e = n - 1;
        let head = &digits[..1];
        let tail = &digits[1..];
        let sign = if e < 0 { '-' } else { '+' };
        if tail.is_empty() {
            format!("{head}e{sign}{}", e.abs())
        } else {
            format!("{head}.{tail}e{sign}{}", e.abs())
        }
    }
}

/// Exact power of ten as an `f64`.
///
/// Goes through the decimal parser rather than `powi` so the result is
/// bit-identical to the literal constant (`pow10(32) == 1e32`).
pub(crate) fn pow10(k: i32) -> f64 {
    format!("1e{k}").parse().unwrap_or(f64::INFINITY)
}

/// Rounds a value to 15 significant digits and re-renders it, collapsing
/// float noise such as `9.999999999999999e+22` into `1e+23`.
///
/// Unparseable input renders as `"0"`; non-finite input keeps its token.
pub fn clean_e_notation(input: impl Into<Operand>) -> String {
    let v = input.into().to_number();
    if v.is_nan() {
        return "0".to_string();
    }
    if v.is_infinite() {
        return format_value(v);
    }
    let rounded = format!("{v:.14e}").parse().unwrap_or(v);
    format_value(rounded)
}

/// `<numerator><separator><denominator>`, denominator 1 not elided.
pub(crate) fn format_raw(n: f64, d: f64, sep: char) -> String {
    format!("{}{}{}", format_value(n), sep, format_value(d))
}

/// Mixed-number rendering: `"<quotient> <|remainder|><sep><den>"`.
///
/// Falls back to the whole-number rendering when the remainder vanishes or
/// the quotient is an exact integer in fixed notation, and to the raw pair
/// when there is no integer part to show or the quotient would itself
/// render exponentially.
pub(crate) fn format_mixed(n: f64, d: f64, sep: char) -> String {
    let value = n / d;
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return format_value(value);
    }
    let remainder = n % d;
    let rendered = format_value(value);
    // `3e40/1e40` divides to exactly 3.0 even though fmod is nonzero.
    if remainder == 0.0 || (value % 1.0 == 0.0 && !rendered.contains('e')) {
        return rendered;
    }
    let quotient = value.trunc();
    if quotient == 0.0 {
        return format_raw(n, d, sep);
    }
    let whole = format_value(quotient);
    if whole.contains('e') {
        return format_raw(n, d, sep);
    }
    format!("{} {}{}{}", whole, format_value(remainder.abs()), sep, format_value(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_integers_without_point() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(23.0), "23");
        assert_eq!(format_value(-4.0), "-4");
        assert_eq!(format_value(1e20), "100000000000000000000");
    }

    #[test]
    fn renders_decimals_in_fixed_notation() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(-0.125), "-0.125");
        assert_eq!(format_value(123456.789), "123456.789");
        assert_eq!(format_value(1e-5), "0.00001");
        assert_eq!(format_value(-2.0004e-5), "-0.000020004");
    }

    #[test]
    fn switches_to_exponential_outside_fixed_range() {
        assert_eq!(format_value(1e21), "1e+21");
        assert_eq!(format_value(1e101), "1e+101");
        assert_eq!(format_value(1e-7), "1e-7");
        assert_eq!(format_value(2.5e-7), "2.5e-7");
        assert_eq!(format_value(-2.5e99), "-2.5e+99");
    }

    #[test]
    fn renders_special_tokens() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn powers_of_ten_match_literals() {
        assert_eq!(pow10(0), 1.0);
        assert_eq!(pow10(2), 100.0);
        assert_eq!(pow10(-3), 0.001);
        assert_eq!(pow10(32), 1e32);
        assert_eq!(pow10(101), 1e101);
    }

    #[test]
    fn clean_e_notation_collapses_float_noise() {
        assert_eq!(clean_e_notation(9.999999999999999e22), "1e+23");
        assert_eq!(clean_e_notation(1.1000000000000003e-30), "1.1e-30");
        assert_eq!(clean_e_notation(9.999999e22), "9.999999e+22");
        assert_eq!(clean_e_notation("glass tables"), "0");
        assert_eq!(clean_e_notation(f64::NEG_INFINITY), "-Infinity");
    }
}
