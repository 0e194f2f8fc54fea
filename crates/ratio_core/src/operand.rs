//! The closed set of inputs the lenient pipeline accepts.
//!
//! The public entry points are generic over `Into<Operand>` instead of
//! inspecting values at runtime: a number, a piece of text, or an existing
//! [`Fraction`]. Anything else simply has no `From` impl.

use crate::fraction::Fraction;

/// A value on its way into the parsing pipeline.
#[derive(Debug, Clone)]
pub enum Operand {
    Number(f64),
    Text(String),
    Ratio(Fraction),
}

impl Operand {
    /// Loose numeric binding. Text is trimmed and parsed as an `f64`
    /// (including the `inf`/`NaN` tokens); unparseable text is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Operand::Number(v) => *v,
            Operand::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            Operand::Ratio(r) => r.value(),
        }
    }
}

macro_rules! operand_from_numeric {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for Operand {
            fn from(v: $t) -> Self {
                Operand::Number(v as f64)
            }
        })*
    };
}

operand_from_numeric!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl From<Fraction> for Operand {
    fn from(r: Fraction) -> Self {
        Operand::Ratio(r)
    }
}

impl From<&Fraction> for Operand {
    fn from(r: &Fraction) -> Self {
        Operand::Ratio(*r)
    }
}
