//! Notation classification.
//!
//! Splits the lexical question ("what shape is this input?") from the
//! lowering question ("what pair does it denote?"). The public face is
//! [`classify`]; the parser consumes the internal [`Scan`] so the text is
//! never lexed twice.

use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::sequence::{delimited, preceded, separated_pair, tuple};
use nom::IResult;

use crate::format::format_value;
use crate::fraction::Fraction;
use crate::operand::Operand;

/// The seven notations an input can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    Decimal,
    Scientific,
    FractionString,
    MixedString,
    Rational,
    Invalid,
}

/// Classified input with its payload attached.
#[derive(Debug, Clone)]
pub(crate) enum Scan {
    Plain(f64),
    Fraction(f64, f64),
    Mixed(f64, f64, f64),
    Rational(Fraction),
    Invalid,
}

/// Classifies an input without lowering it to a pair.
///
/// Plain numeric inputs are categorized from their canonical rendering, so
/// `"1.2e6"` counts as an integer (it renders as `1200000`) while `1e101`
/// is scientific.
pub fn classify(input: &Operand) -> NumericKind {
    match scan(input) {
        Scan::Rational(_) => NumericKind::Rational,
        Scan::Plain(v) => plain_kind(v),
        Scan::Fraction(..) => NumericKind::FractionString,
        Scan::Mixed(..) => NumericKind::MixedString,
        Scan::Invalid => NumericKind::Invalid,
    }
}

fn plain_kind(v: f64) -> NumericKind {
    let rendered = format_value(v);
    if rendered.contains('e') {
        NumericKind::Scientific
    } else if rendered.contains('.') {
        NumericKind::Decimal
    } else {
        NumericKind::Integer
    }
}

pub(crate) fn scan(input: &Operand) -> Scan {
    match input {
        Operand::Ratio(r) => Scan::Rational(*r),
        Operand::Number(v) if v.is_nan() => Scan::Invalid,
        Operand::Number(v) => Scan::Plain(*v),
        Operand::Text(s) => scan_text(s),
    }
}

fn scan_text(s: &str) -> Scan {
    if let Ok((_, v)) = all_consuming(ws_number)(s) {
        return if v.is_nan() { Scan::Invalid } else { Scan::Plain(v) };
    }
    if let Ok((_, (whole, numer, denom))) = all_consuming(mixed_parts)(s) {
        return Scan::Mixed(whole, numer, denom);
    }
    if let Ok((_, (numer, denom))) = all_consuming(fraction_parts)(s) {
        return Scan::Fraction(numer, denom);
    }
    Scan::Invalid
}

fn ws_number(input: &str) -> IResult<&str, f64> {
    delimited(multispace0, double, multispace0)(input)
}

/// `<number> / <number>`, whitespace tolerated around every token.
fn fraction_parts(input: &str) -> IResult<&str, (f64, f64)> {
    separated_pair(ws_number, char('/'), ws_number)(input)
}

/// `<whole> <numerator>/<denominator>`. The whole part is split from the
/// fractional numerator by mandatory whitespace.
fn mixed_parts(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (rest, (whole, numer, _, denom)) = tuple((
        preceded(multispace0, double),
        preceded(multispace1, double),
        preceded(multispace0, char('/')),
        ws_number,
    ))(input)?;
    Ok((rest, (whole, numer, denom)))
}
