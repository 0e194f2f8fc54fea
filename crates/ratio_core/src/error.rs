use thiserror::Error;

/// Error for the strict parsing front door (`Fraction::from_str`).
///
/// The lenient pipeline never fails — it produces NaN-tainted fractions —
/// so this is the only `Result`-bearing surface in the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatioError {
    #[error("unrecognized numeric input: `{0}`")]
    Unrecognized(String),
}
