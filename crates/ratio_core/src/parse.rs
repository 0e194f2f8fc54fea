//! Lowering classified input to an exact `(numerator, denominator)` pair.
//!
//! This stage never fails: invalid input lowers to `(NaN, 1)` and the taint
//! propagates through arithmetic the way IEEE NaN always does.

use tracing::trace;

use crate::classify::{scan, Scan};
use crate::format::{format_value, pow10};
use crate::operand::Operand;
use crate::reduce::numerator_with_sign;

/// Lowers any accepted input to a pair denoting the same rational.
///
/// Decimals become digit strings over a power of ten (`-0.125` →
/// `(-125, 1000)`), scientific notation folds the exponent into whichever
/// side of the pair it shifts (`"1e-5"` → `(1, 100000)`), fraction strings
/// cross-multiply their sides, and mixed numbers fold the whole part in
/// with the correct sign. Numeric text is bound to its `f64` value and
/// re-rendered canonically first, so `"23.0"` lowers to `(23, 1)`.
pub fn parse_components(input: impl Into<Operand>) -> (f64, f64) {
    let pair = match scan(&input.into()) {
        Scan::Rational(r) => (r.numerator(), r.denominator()),
        Scan::Plain(v) => parse_plain(v),
        Scan::Fraction(a, b) => cross(parse_plain(a), parse_plain(b)),
        Scan::Mixed(whole, numer, denom) => {
            mixed(whole, cross(parse_plain(numer), parse_plain(denom)))
        }
        Scan::Invalid => (f64::NAN, 1.0),
    };
    trace!(numerator = pair.0, denominator = pair.1, "lowered literal");
    pair
}

/// Lowers two inputs independently and combines them as a quotient by
/// cross-multiplication: `parse_components2(0.125, 0.5)` is `(1250, 5000)`.
pub fn parse_components2(a: impl Into<Operand>, b: impl Into<Operand>) -> (f64, f64) {
    cross(parse_components(a), parse_components(b))
}

/// `(a_n/a_d) / (b_n/b_d)` as a single sign-folded pair.
pub(crate) fn cross(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    let top = a.0 * b.1;
    let bottom = a.1 * b.0;
    (numerator_with_sign(top, bottom), bottom.abs())
}

fn mixed(whole: f64, frac: (f64, f64)) -> (f64, f64) {
    let (numer, denom) = frac;
    let sign = if (whole < 0.0) != (numer < 0.0) { -1.0 } else { 1.0 };
    (sign * (whole.abs() * denom + numer.abs()), denom)
}

fn parse_plain(v: f64) -> (f64, f64) {
    if v.is_nan() {
        return (f64::NAN, 1.0);
    }
    let rendered = format_value(v);
    if let Some((mantissa, exponent)) = rendered.split_once('e') {
        return scientific(mantissa, exponent);
    }
    if rendered.contains('.') {
        return decimal(&rendered);
    }
    (v, 1.0)
}

/// Fixed-notation rendering: digits with the point removed, over `10^k`
/// for `k` fractional digits.
fn decimal(rendered: &str) -> (f64, f64) {
    let (sign, body) = split_sign(rendered);
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let digits: f64 = format!("{int_part}{frac_part}").parse().unwrap_or(f64::NAN);
    (sign * digits, pow10(frac_part.len() as i32))
}

/// Exponential rendering: the exponent and the mantissa's decimal point are
/// one combined shift, landing on whichever side of the pair it points.
fn scientific(mantissa: &str, exponent: &str) -> (f64, f64) {
    let (sign, body) = split_sign(mantissa);
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let digits: f64 = format!("{int_part}{frac_part}").parse().unwrap_or(f64::NAN);
    let shift = exponent.parse::<i32>().unwrap_or(0) - frac_part.len() as i32;
    if shift >= 0 {
        (sign * digits * pow10(shift), 1.0)
    } else {
        (sign * digits, pow10(-shift))
    }
}

fn split_sign(s: &str) -> (f64, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_sit_over_one() {
        assert_eq!(parse_components(23), (23.0, 1.0));
        assert_eq!(parse_components("-4"), (-4.0, 1.0));
        assert_eq!(parse_components("23.0"), (23.0, 1.0));
    }

    #[test]
    fn decimals_lower_to_digits_over_a_power_of_ten() {
        assert_eq!(parse_components(-0.125), (-125.0, 1000.0));
        assert_eq!(parse_components("0.01"), (1.0, 100.0));
        assert_eq!(parse_components(0.00023), (23.0, 100000.0));
    }

    #[test]
    fn scientific_notation_folds_the_exponent() {
        assert_eq!(parse_components("1e-5"), (1.0, 100000.0));
        assert_eq!(parse_components("-2.0004e-5"), (-20004.0, 1000000000.0));
        assert_eq!(parse_components(1e101), (1e101, 1.0));
        assert_eq!(parse_components("9e-99"), (9.0, 1e99));
    }

    #[test]
    fn fraction_strings_cross_multiply() {
        assert_eq!(parse_components("10/20"), (10.0, 20.0));
        assert_eq!(parse_components("-10/-20"), (10.0, 20.0));
        assert_eq!(parse_components("0.125/0.5"), (1250.0, 5000.0));
        assert_eq!(parse_components("1e3/2"), (1000.0, 2.0));
    }

    #[test]
    fn mixed_numbers_fold_the_whole_part() {
        assert_eq!(parse_components("1 1/2"), (3.0, 2.0));
        assert_eq!(parse_components("-1 1/2"), (-3.0, 2.0));
        assert_eq!(parse_components("1 -1/2"), (-3.0, 2.0));
        assert_eq!(parse_components("1 1/-2"), (-3.0, 2.0));
        assert_eq!(parse_components("1 -1/-2"), (3.0, 2.0));
        assert_eq!(parse_components("-2 4/6"), (-16.0, 6.0));
    }

    #[test]
    fn invalid_input_taints_with_nan() {
        let (n, d) = parse_components("seventeen");
        assert!(n.is_nan());
        assert_eq!(d, 1.0);
    }

    #[test]
    fn two_argument_lowering_is_a_quotient() {
        assert_eq!(parse_components2(0.125, 0.5), (1250.0, 5000.0));
        assert_eq!(parse_components2(3, 4), (3.0, 4.0));
        assert_eq!(parse_components2("1/2", "1/3"), (3.0, 2.0));
    }
}
