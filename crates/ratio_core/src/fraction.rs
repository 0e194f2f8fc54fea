//! The `Fraction` value type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::{classify, NumericKind};
use crate::error::RatioError;
use crate::format::{clean_e_notation, format_mixed, format_raw, format_value};
use crate::operand::Operand;
use crate::parse::{parse_components, parse_components2};
use crate::reduce::{numerator_with_sign, reduce_parts};
use crate::repeat::RepeatCycle;

/// An exact ratio of two `f64` components.
///
/// The sign always lives on the numerator; the denominator is kept
/// non-negative, including for the special values (`1/0` is `Infinity/0`
/// by value, `0/0` is NaN). Fractions are immutable — the `with_*`
/// builders and every operation return new values.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    numerator: f64,
    denominator: f64,
    separator: char,
}

impl Fraction {
    /// Builds a fraction from raw components with loose numeric coercion
    /// and a sign fold, but *no* parsing or reduction: `new(0.11, 0.3)`
    /// stays `0.11/0.3`. Use [`Fraction::parse`] for the full pipeline.
    pub fn new(numerator: impl Into<Operand>, denominator: impl Into<Operand>) -> Fraction {
        Fraction::from_parts(numerator.into().to_number(), denominator.into().to_number())
    }

    pub(crate) fn from_parts(n: f64, d: f64) -> Fraction {
        Fraction {
            numerator: numerator_with_sign(n, d),
            denominator: d.abs(),
            separator: '/',
        }
    }

    /// Runs one input through the whole pipeline: classification, exact
    /// lowering, sign fold. Invalid input yields the NaN fraction.
    pub fn parse(input: impl Into<Operand>) -> Fraction {
        let (n, d) = parse_components(input);
        Fraction::from_parts(n, d)
    }

    /// Parses two inputs independently and combines them as a quotient:
    /// `parse_pair(0.125, 0.5)` is `1250/5000`.
    pub fn parse_pair(a: impl Into<Operand>, b: impl Into<Operand>) -> Fraction {
        let (n, d) = parse_components2(a, b);
        Fraction::from_parts(n, d)
    }

    pub fn numerator(&self) -> f64 {
        self.numerator
    }

    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// The quotient of the components.
    pub fn value(&self) -> f64 {
        self.numerator / self.denominator
    }

    pub fn to_pair(&self) -> (f64, f64) {
        (self.numerator, self.denominator)
    }

    pub fn with_numerator(&self, numerator: impl Into<Operand>) -> Fraction {
        Fraction {
            separator: self.separator,
            ..Fraction::from_parts(numerator.into().to_number(), self.denominator)
        }
    }

    pub fn with_denominator(&self, denominator: impl Into<Operand>) -> Fraction {
        Fraction {
            separator: self.separator,
            ..Fraction::from_parts(self.numerator, denominator.into().to_number())
        }
    }

    pub fn with_separator(&self, separator: char) -> Fraction {
        Fraction { separator, ..*self }
    }

    /// Lowest-terms form. Repeat-cycle aware: a fraction whose quotient
    /// renders with a repeating decimal is rebuilt from the cycle first,
    /// so `Fraction::parse(7.0 / 3.0).reduce()` is exactly `7/3`.
    pub fn reduce(&self) -> Fraction {
        let (n, d) = reduce_parts(self.numerator, self.denominator);
        Fraction {
            separator: self.separator,
            ..Fraction::from_parts(n, d)
        }
    }

    /// True when the magnitude is below one (`|numerator| < denominator`).
    pub fn is_proper(&self) -> bool {
        self.numerator.abs() < self.denominator
    }

    /// The repeating-decimal structure of the value, if it has one.
    pub fn repeat_cycle(&self) -> Option<RepeatCycle> {
        RepeatCycle::of_value(self.value())
    }

    /// Solves `lhs/rhs = self` for the single component written as `x`.
    ///
    /// `"x/3"` on `1/4` gives `3/4`; `"3/x"` on `1/4` gives `12`. Anything
    /// that is not exactly two `/`-separated tokens with one `x` is `None`.
    pub fn find_x(&self, equation: &str) -> Option<Fraction> {
        let parts: Vec<&str> = equation.split('/').collect();
        if parts.len() != 2 {
            return None;
        }
        let (lhs, rhs) = (parts[0].trim(), parts[1].trim());
        match (lhs == "x", rhs == "x") {
            (true, false) => {
                let c = Operand::from(rhs).to_number();
                Some(Fraction::new(self.numerator * c, self.denominator))
            }
            (false, true) => {
                let c = Operand::from(lhs).to_number();
                Some(Fraction::new(c * self.denominator, self.numerator))
            }
            _ => None,
        }
    }

    /// Re-renders noisy components. Plain decimals are pushed through the
    /// exact pipeline (`1.5/3` becomes `15/30`); everything else gets its
    /// e-notation cleaned to 15 significant digits.
    pub fn clean_format(&self) -> Fraction {
        let plain_decimal = |v: f64| {
            let rendered = format_value(v);
            rendered.contains('.') && !rendered.contains('e')
        };
        if plain_decimal(self.numerator) || plain_decimal(self.denominator) {
            Fraction::parse_pair(self.numerator, self.denominator)
        } else {
            Fraction::new(
                clean_e_notation(self.numerator).as_str(),
                clean_e_notation(self.denominator).as_str(),
            )
        }
    }

    /// Value equality against anything parseable: `1/2` equals `"2/4"`,
    /// `0.5` and `"1 0/2"` alike.
    pub fn equals(&self, other: impl Into<Operand>) -> bool {
        self.value() == Fraction::parse(other).value()
    }

    /// Component-wise equality (separator included), unlike the value
    /// equality of `==`.
    pub fn eq_parts(&self, other: &Fraction) -> bool {
        self.numerator == other.numerator
            && self.denominator == other.denominator
            && self.separator == other.separator
    }

    /// Mixed-number rendering, e.g. `"1 1/2"` for `3/2`.
    pub fn to_mixed_string(&self) -> String {
        format_mixed(self.numerator, self.denominator, self.separator)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::from_parts(0.0, 1.0)
    }
}

/// Raw pair rendering: `<numerator><separator><denominator>`, denominator
/// 1 not elided.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_raw(self.numerator, self.denominator, self.separator))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

macro_rules! fraction_from_numeric {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for Fraction {
            fn from(v: $t) -> Self {
                Fraction::from_parts(v as f64, 1.0)
            }
        })*
    };
}

fraction_from_numeric!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

/// Strict parsing: the one place the crate refuses instead of tainting.
impl FromStr for Fraction {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = Operand::from(s);
        if classify(&input) == NumericKind::Invalid {
            return Err(RatioError::Unrecognized(s.to_string()));
        }
        Ok(Fraction::parse(input))
    }
}
