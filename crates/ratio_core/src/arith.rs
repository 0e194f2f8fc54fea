//! Arithmetic over fractions.
//!
//! The binary operators accept anything the pipeline parses, so
//! `half + "1/3"` and `half * 2` both read naturally. No operation mutates
//! its operands; every result is a freshly folded pair.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::fraction::Fraction;
use crate::operand::Operand;
use crate::parse::parse_components;
use crate::reduce::gcd_value;

impl Fraction {
    /// Shared body of `+` and `-`. Equal denominators add numerators
    /// directly; otherwise the cross-multiplied sum is divided through by
    /// the denominators' gcd, so `1/3 + 3/9` lands on `6/9` rather than
    /// `18/27`.
    fn combined_sum(&self, numer: f64, denom: f64) -> Fraction {
        if self.denominator() == denom {
            return Fraction::from_parts(self.numerator() + numer, denom);
        }
        let g = gcd_value(self.denominator(), denom);
        let top = self.numerator() * denom + numer * self.denominator();
        Fraction::from_parts(top / g, (self.denominator() * denom) / g)
    }

    /// Truncating remainder of numerator by denominator, over 1.
    /// A zero denominator makes this NaN.
    pub fn modulo(&self) -> Fraction {
        Fraction::from_parts(self.numerator() % self.denominator(), 1.0)
    }

    /// The reciprocal.
    pub fn flip(&self) -> Fraction {
        Fraction::from_parts(self.denominator(), self.numerator())
    }

    /// Absolute value.
    pub fn abs(&self) -> Fraction {
        Fraction::from_parts(self.numerator().abs(), self.denominator())
    }

    /// Multiplies both components by `factor` without changing the value.
    pub fn scale(&self, factor: impl Into<Operand>) -> Fraction {
        let k = factor.into().to_number();
        Fraction::from_parts(self.numerator() * k, self.denominator() * k)
    }

    /// Divides both components by `factor` when both divide exactly;
    /// otherwise returns the fraction unchanged. Zero and non-finite
    /// factors are also no-ops.
    pub fn descale(&self, factor: impl Into<Operand>) -> Fraction {
        let k = factor.into().to_number();
        if !k.is_finite() || k == 0.0 {
            return *self;
        }
        let top = self.numerator() / k;
        let bottom = self.denominator() / k;
        if top.floor() == top && bottom.floor() == bottom {
            Fraction::from_parts(top, bottom)
        } else {
            *self
        }
    }
}

impl<T: Into<Operand>> Add<T> for Fraction {
    type Output = Fraction;

    fn add(self, rhs: T) -> Fraction {
        let (n, d) = parse_components(rhs);
        self.combined_sum(n, d)
    }
}

impl<T: Into<Operand>> Sub<T> for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: T) -> Fraction {
        let (n, d) = parse_components(rhs);
        self.combined_sum(-n, d)
    }
}

impl<T: Into<Operand>> Mul<T> for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: T) -> Fraction {
        let (n, d) = parse_components(rhs);
        Fraction::from_parts(self.numerator() * n, self.denominator() * d)
    }
}

impl<T: Into<Operand>> Div<T> for Fraction {
    type Output = Fraction;

    fn div(self, rhs: T) -> Fraction {
        let (n, d) = parse_components(rhs);
        Fraction::from_parts(self.numerator() * d, self.denominator() * n)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::from_parts(-self.numerator(), self.denominator())
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::from_parts(0.0, 1.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::from_parts(1.0, 1.0)
    }
}
