//! Denominator quantization.

use tracing::debug;

use crate::fraction::Fraction;
use crate::operand::Operand;

impl Fraction {
    /// Snaps the value onto the grid of `base`-ths:
    /// `(round(value * base), base)`, ties rounding away from zero.
    ///
    /// A base that does not coerce to a finite positive integer leaves the
    /// fraction unchanged.
    pub fn approximate_to(&self, base: impl Into<Operand>) -> Fraction {
        let base = base.into().to_number();
        if !base.is_finite() || base <= 0.0 || base.fract() != 0.0 {
            return *self;
        }
        Fraction::from_parts((self.value() * base).round(), base)
    }

    /// Picks, among approximations to each of the given `units`, the one
    /// closest to the true value; the first candidate wins ties. With no
    /// usable unit the result is the NaN fraction.
    pub fn to_quantity_of(&self, units: &[f64]) -> Fraction {
        let mut best = Fraction::from_parts(f64::NAN, 1.0);
        let mut best_error = f64::INFINITY;
        for &unit in units {
            let candidate = self.approximate_to(unit);
            let error = (candidate.value() - self.value()).abs();
            debug!(unit, error, "quantization candidate");
            if error < best_error {
                best = candidate;
                best_error = error;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use crate::fraction::Fraction;

    #[test]
    fn snaps_onto_the_requested_grid() {
        assert_eq!(Fraction::new(27, 100).approximate_to(100).to_pair(), (27.0, 100.0));
        assert_eq!(Fraction::new(77, 100).approximate_to(3).to_pair(), (2.0, 3.0));
        assert_eq!(Fraction::new(99, 100).approximate_to(9).to_pair(), (9.0, 9.0));
        assert_eq!(Fraction::new(1, 100).approximate_to(1_000_000).to_string(), "10000/1000000");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(Fraction::new(7, 2).approximate_to(1).to_pair(), (4.0, 1.0));
        assert_eq!(Fraction::new(-7, 2).approximate_to(1).to_pair(), (-4.0, 1.0));
    }

    #[test]
    fn unusable_bases_are_no_ops() {
        let third = Fraction::new(1, 3);
        assert_eq!(third.approximate_to("ten").to_pair(), (1.0, 3.0));
        assert_eq!(third.approximate_to(0).to_pair(), (1.0, 3.0));
        assert_eq!(third.approximate_to(-2).to_pair(), (1.0, 3.0));
        assert_eq!(third.approximate_to(2.5).to_pair(), (1.0, 3.0));
    }

    #[test]
    fn quantization_picks_the_best_fitting_unit() {
        assert_eq!(Fraction::new(3, 8).to_quantity_of(&[2.0, 3.0, 4.0]).to_pair(), (1.0, 3.0));
        assert_eq!(Fraction::new(1, 3).to_quantity_of(&[2.0, 4.0, 8.0]).to_pair(), (3.0, 8.0));
        assert_eq!(Fraction::new(1, 2).to_quantity_of(&[2.0, 4.0]).to_pair(), (1.0, 2.0));
    }

    #[test]
    fn no_units_means_nan() {
        let q = Fraction::new(1, 2).to_quantity_of(&[]);
        assert!(q.numerator().is_nan());
        assert_eq!(q.denominator(), 1.0);
    }
}
