//! GCD reduction and sign canonicalization.

use crate::format::pow10;
use crate::operand::Operand;
use crate::repeat::RepeatCycle;

/// Greatest common divisor by Euclid's algorithm on absolute values.
///
/// Degenerate operands (NaN, infinite, or zero on either side) yield 1
/// rather than an error: reduction by 1 is the identity, so callers never
/// need a failure path.
pub fn gcd(a: impl Into<Operand>, b: impl Into<Operand>) -> f64 {
    gcd_value(a.into().to_number(), b.into().to_number())
}

pub(crate) fn gcd_value(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() || a == 0.0 || b == 0.0 {
        return 1.0;
    }
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0.0 {
        let next = a % b;
        a = b;
        b = next;
    }
    if a == 0.0 || a.is_nan() {
        1.0
    } else {
        a
    }
}

/// The numerator with the pair's overall sign folded in: `|n|` negated
/// exactly when the component signs disagree. Works for the signed
/// infinities; NaN anywhere stays NaN.
pub fn numerator_with_sign(n: f64, d: f64) -> f64 {
    let sign = if (n < 0.0) != (d < 0.0) { -1.0 } else { 1.0 };
    n.abs() * sign
}

/// Reduces a pair to lowest terms.
///
/// The sign is folded onto the numerator first. If the quotient's decimal
/// rendering exhibits a repeat cycle, the pair is rebuilt from the cycle
/// before dividing through by the gcd: that is what lets a float like
/// `2.3333333333333335` over `10^16` come back as `7/3` instead of a pair
/// of sixteen-digit monsters.
pub fn reduce_parts(n: f64, d: f64) -> (f64, f64) {
    let mut top = numerator_with_sign(n, d);
    let mut bottom = d.abs();
    if let Some(cycle) = RepeatCycle::of_value(top / bottom) {
        top = cycle.joined_value() - cycle.prefix_value();
        bottom = pow10(cycle.prefix_len()) * (pow10(cycle.cycle_len()) - 1.0);
    }
    let g = gcd_value(top, bottom);
    (top / g, bottom / g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_plain_integers() {
        assert_eq!(gcd(1, 1), 1.0);
        assert_eq!(gcd(3, 6), 3.0);
        assert_eq!(gcd(-4, 6), 2.0);
        assert_eq!(gcd(41329375731.0f64, 82658751462.0f64), 41329375731.0);
    }

    #[test]
    fn gcd_degenerates_to_one() {
        assert_eq!(gcd(0, 5), 1.0);
        assert_eq!(gcd(f64::NAN, 5), 1.0);
        assert_eq!(gcd(f64::INFINITY, 5), 1.0);
        assert_eq!(gcd("pumpkins", 5), 1.0);
    }

    #[test]
    fn sign_folds_onto_the_numerator() {
        assert_eq!(numerator_with_sign(1.0, 2.0), 1.0);
        assert_eq!(numerator_with_sign(-1.0, 2.0), -1.0);
        assert_eq!(numerator_with_sign(1.0, -2.0), -1.0);
        assert_eq!(numerator_with_sign(-1.0, -2.0), 1.0);
        assert_eq!(numerator_with_sign(1.0, f64::NEG_INFINITY), -1.0);
        assert!(numerator_with_sign(f64::NAN, 2.0).is_nan());
    }

    #[test]
    fn reduces_integer_pairs() {
        assert_eq!(reduce_parts(1.0, 2.0), (1.0, 2.0));
        assert_eq!(reduce_parts(4.0, 8.0), (1.0, 2.0));
        assert_eq!(reduce_parts(-42.0, 42.0), (-1.0, 1.0));
        assert_eq!(reduce_parts(134.0, -3.0), (-134.0, 3.0));
    }

    #[test]
    fn recovers_exact_rationals_from_repeating_quotients() {
        // 7/3 pushed through a decimal rendering and back.
        let (n, d) = reduce_parts(23333333333333336.0, 1e16);
        assert_eq!((n, d), (7.0, 3.0));

        let (n, d) = reduce_parts(9.0, 999.0);
        assert_eq!((n, d), (1.0, 111.0));
    }
}
