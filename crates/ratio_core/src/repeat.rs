//! Repeating-decimal detection.
//!
//! The analysis is anchored at the *end* of the fractional digits: find the
//! smallest block of at least two digits that appears twice in a row at the
//! very end, reduce it to its minimal period, then strip its trailing
//! repetitions off to leave the non-repeating prefix. `100/13` therefore
//! reports `("7", "692", "307692")` — the cycle as it trails off, not as it
//! first begins.

use crate::format::format_value;
use crate::operand::Operand;

/// The three pieces of a repeating decimal: integer digits (sign included),
/// non-repeating fractional prefix, and the repeating cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatCycle {
    pub integer: String,
    pub prefix: String,
    pub cycle: String,
}

impl RepeatCycle {
    /// Detects a repeat cycle in any accepted input.
    ///
    /// Text is analyzed as written (trimmed); numbers and fractions are
    /// rendered canonically first. Fewer than 10 fractional digits, or no
    /// trailing repetition, yields `None`.
    pub fn of(input: impl Into<Operand>) -> Option<RepeatCycle> {
        match input.into() {
            Operand::Text(s) => detect(s.trim()),
            Operand::Number(v) => RepeatCycle::of_value(v),
            Operand::Ratio(r) => RepeatCycle::of_value(r.value()),
        }
    }

    pub(crate) fn of_value(v: f64) -> Option<RepeatCycle> {
        if !v.is_finite() {
            return None;
        }
        detect(&format_value(v))
    }

    /// Integer, prefix and cycle digits concatenated and read as one number.
    pub(crate) fn joined_value(&self) -> f64 {
        format!("{}{}{}", self.integer, self.prefix, self.cycle)
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Integer and prefix digits concatenated and read as one number.
    pub(crate) fn prefix_value(&self) -> f64 {
        format!("{}{}", self.integer, self.prefix)
            .parse()
            .unwrap_or(f64::NAN)
    }

    pub(crate) fn prefix_len(&self) -> i32 {
        self.prefix.len() as i32
    }

    pub(crate) fn cycle_len(&self) -> i32 {
        self.cycle.len() as i32
    }
}

fn detect(s: &str) -> Option<RepeatCycle> {
    if !s.is_ascii() {
        return None;
    }
    // The final digit is often a rounding artifact of the float rendering;
    // chop it and retry before giving up.
    analyze(s).or_else(|| analyze(&s[..s.len().saturating_sub(1)]))
}

fn analyze(s: &str) -> Option<RepeatCycle> {
    let (int_part, frac) = split_decimal(s)?;
    if frac.len() < 10 {
        return None;
    }
    let block = minimal_period(repeated_suffix(frac)?);
    let mut prefix = frac;
    while let Some(rest) = prefix.strip_suffix(block) {
        prefix = rest;
    }
    Some(RepeatCycle {
        integer: int_part.to_string(),
        prefix: prefix.to_string(),
        cycle: block.to_string(),
    })
}

fn split_decimal(s: &str) -> Option<(&str, &str)> {
    let (int_part, frac) = s.split_once('.')?;
    let digits = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());
    let unsigned = int_part.strip_prefix(['-', '+']).unwrap_or(int_part);
    (digits(unsigned) && digits(frac)).then_some((int_part, frac))
}

/// Smallest block of width >= 2 whose last two copies end the digits.
fn repeated_suffix(frac: &str) -> Option<&str> {
    let len = frac.len();
    (2..=len / 2).find_map(|width| {
        let block = &frac[len - width..];
        (&frac[len - 2 * width..len - width] == block).then_some(block)
    })
}

/// Reduces a block to its shortest repeating unit (`"3333"` to `"3"`).
fn minimal_period(block: &str) -> &str {
    let bytes = block.as_bytes();
    for p in 1..block.len() {
        if block.len() % p == 0 && bytes.chunks(p).all(|chunk| chunk == &bytes[..p]) {
            return &block[..p];
        }
    }
    block
}
