//! Prime factorization by trial division.

use crate::operand::Operand;

/// The prime factors of `input` in ascending order, with multiplicity.
///
/// Inputs that do not denote a whole number at least 2 within `u64` range
/// (fractions, negatives, NaN, infinities, unparseable text) produce an
/// empty vector.
pub fn prime_factors(input: impl Into<Operand>) -> Vec<u64> {
    let v = input.into().to_number();
    if !v.is_finite() || v < 2.0 || v.fract() != 0.0 || v >= u64::MAX as f64 {
        return Vec::new();
    }
    let mut n = v as u64;
    let mut factors = Vec::new();
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }
    let mut candidate: u64 = 3;
    while candidate * candidate <= n {
        if n % candidate == 0 {
            factors.push(candidate);
            n /= candidate;
        } else {
            candidate += 2;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_small_composites() {
        assert_eq!(prime_factors(2), vec![2]);
        assert_eq!(prime_factors(9), vec![3, 3]);
        assert_eq!(prime_factors(10), vec![2, 5]);
        assert_eq!(prime_factors(556), vec![2, 2, 139]);
    }

    #[test]
    fn repeats_factors_by_multiplicity() {
        assert_eq!(prime_factors(8), vec![2, 2, 2]);
        assert_eq!(prime_factors(123456789), vec![3, 3, 3607, 3803]);
    }

    #[test]
    fn accepts_numeric_text() {
        assert_eq!(prime_factors("556"), vec![2, 2, 139]);
    }

    #[test]
    fn degenerate_inputs_yield_nothing() {
        assert_eq!(prime_factors(1), Vec::<u64>::new());
        assert_eq!(prime_factors(0), Vec::<u64>::new());
        assert_eq!(prime_factors(-4), Vec::<u64>::new());
        assert_eq!(prime_factors(2.5), Vec::<u64>::new());
        assert_eq!(prime_factors(f64::NAN), Vec::<u64>::new());
        assert_eq!(prime_factors(f64::INFINITY), Vec::<u64>::new());
        assert_eq!(prime_factors("bananas"), Vec::<u64>::new());
        assert_eq!(prime_factors(1e300), Vec::<u64>::new());
    }
}
