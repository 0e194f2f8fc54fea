//! Exact rational values over `f64` components, with lenient parsing of
//! heterogeneous numeric notations.
//!
//! The central type is [`Fraction`], a `(numerator, denominator)` pair that
//! keeps its sign folded onto the numerator and renders either as a raw
//! pair (`"3/2"`) or as a mixed number (`"1 1/2"`). Inputs arrive through
//! the closed [`Operand`] enum — numbers, text in integer, decimal,
//! scientific, `A/B` or `W N/D` notation, or existing fractions — and the
//! lenient pipeline never fails: whatever cannot be understood becomes a
//! NaN-tainted fraction and propagates like any IEEE NaN. A strict
//! `FromStr` front door returns [`RatioError`] instead.
//!
//! ```
//! use ratio_core::Fraction;
//!
//! let x = Fraction::parse("1 1/2");
//! assert_eq!(x.to_string(), "3/2");
//! assert_eq!((x + "1/6").reduce().to_string(), "5/3");
//! ```
//!
//! Reduction is repeat-cycle aware: a float such as `2.3333333333333335`
//! reduces to exactly `7/3` by reconstructing the rational from the
//! repeating digits of its decimal rendering.

mod approx;
mod arith;
mod classify;
mod error;
mod format;
mod fraction;
mod operand;
mod parse;
mod primes;
mod reduce;
mod repeat;

pub use classify::{classify, NumericKind};
pub use error::RatioError;
pub use format::{clean_e_notation, format_value};
pub use fraction::Fraction;
pub use operand::Operand;
pub use parse::{parse_components, parse_components2};
pub use primes::prime_factors;
pub use reduce::{gcd, numerator_with_sign, reduce_parts};
pub use repeat::RepeatCycle;
