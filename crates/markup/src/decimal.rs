//! Integer literals of any size.
//!
//! Palette indices and RGB components are passed through to the terminal
//! without range checks, so they are kept as canonical decimal text rather
//! than narrowed to a machine integer.

use std::fmt;

/// A base-10 integer of any magnitude, in canonical form.
///
/// Canonical form has no `+` sign, no leading zeros, no digit separators,
/// and writes negative zero as `0`.
///
/// # Examples
///
/// ```
/// use warna_markup::Decimal;
///
/// assert_eq!(Decimal::parse("+007").unwrap().as_str(), "7");
/// assert_eq!(Decimal::parse("1_000").unwrap().as_str(), "1000");
/// assert_eq!(Decimal::parse("-0").unwrap().as_str(), "0");
/// assert!(Decimal::parse("1.5").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal(String);

impl Decimal {
    /// Parse a non-empty run of ASCII digits, with no sign or separators.
    pub fn parse_digits(text: &str) -> Option<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self::canonical(false, text))
    }

    /// Parse an integer literal.
    ///
    /// Accepts an optional `+` or `-` sign, then ASCII digits with single
    /// `_` separators allowed between digits.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        let mut digits = String::with_capacity(body.len());
        let mut after_digit = false;
        for c in body.chars() {
            match c {
                '0'..='9' => {
                    digits.push(c);
                    after_digit = true;
                }
                '_' if after_digit => after_digit = false,
                _ => return None,
            }
        }

        // Empty, or a trailing separator.
        if !after_digit {
            return None;
        }
        Some(Self::canonical(negative, &digits))
    }

    fn canonical(negative: bool, digits: &str) -> Self {
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            Self("0".to_string())
        } else if negative {
            Self(format!("-{}", significant))
        } else {
            Self(significant.to_string())
        }
    }

    /// Get the canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u8> for Decimal {
    fn from(value: u8) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
