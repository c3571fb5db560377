//! Escape sequence type.

use std::fmt;

use crate::decimal::Decimal;

/// The bare reset sequence, `ESC[0m`.
pub const RESET: &str = "\x1b[0m";

/// An SGR control sequence: `ESC[<params>m`.
///
/// Parameters are written in order, joined by `;`. Color parameters come
/// before modifier parameters.
///
/// # Examples
///
/// ```
/// use warna_markup::EscapeSequence;
///
/// let seq = EscapeSequence::from_codes(&[46, 1]);
/// assert_eq!(seq.to_string(), "\x1b[46;1m");
/// assert_eq!(EscapeSequence::reset().to_string(), "\x1b[0m");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapeSequence {
    params: Vec<Decimal>,
}

impl EscapeSequence {
    /// Create a sequence from its parameters.
    pub fn new(params: Vec<Decimal>) -> Self {
        Self { params }
    }

    /// Create a sequence from fixed integer codes.
    pub fn from_codes(codes: &[i64]) -> Self {
        Self::new(codes.iter().map(|&code| Decimal::from(code)).collect())
    }

    /// The reset sequence.
    pub fn reset() -> Self {
        Self::from_codes(&[0])
    }

    /// Get the parameters.
    pub fn params(&self) -> &[Decimal] {
        &self.params
    }
}

impl fmt::Display for EscapeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\x1b[")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str("m")
    }
}
