//! Error types for directive parsing.
//!
//! These never escape [`translate`](crate::translate): every pass turns a
//! failed directive back into its literal text. They are public so that
//! [`Directive::parse`](crate::Directive::parse) can say *why* a directive
//! would be left alone.

use thiserror::Error;

/// Reasons a directive cannot be turned into an escape sequence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DirectiveError {
    /// The text does not have the shape of any directive.
    #[error("not a directive: {0}")]
    NotADirective(String),

    /// The name is not in the color table.
    #[error("unknown color name: {0}")]
    UnknownColor(String),

    /// No integer palette index among the `COLOR(...)` arguments.
    #[error("missing palette index in: {0}")]
    MissingIndex(String),

    /// `RGB(...)` takes three or four arguments.
    #[error("expected 3 or 4 RGB arguments, got {0}")]
    WrongArity(usize),

    /// An RGB component is not a base-10 integer.
    #[error("invalid RGB component: {0}")]
    InvalidComponent(String),

    /// No hex code among the `HEX(...)` arguments.
    #[error("missing hex code in: {0}")]
    MissingHex(String),

    /// The selected hex code is not six hex digits.
    #[error("invalid hex code: {0}")]
    InvalidHex(String),
}
