//! Parameter tokenizer for directive arguments.
//!
//! Converts the text between a directive's parentheses into a list of
//! normalized tokens.

/// The comma-separated arguments of a directive.
///
/// Each token is trimmed and uppercased. Splitting is literal: an empty
/// argument list yields a single empty token, and empty tokens between
/// commas are kept.
///
/// # Examples
///
/// ```
/// use warna_markup::parser::Params;
///
/// let params = Params::parse(" b , bg ");
/// assert_eq!(params.tokens(), &["B", "BG"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    tokens: Vec<String>,
}

impl Params {
    /// Tokenize an argument list.
    pub fn parse(args: &str) -> Self {
        Self {
            tokens: args
                .split(',')
                .map(|token| token.trim().to_uppercase())
                .collect(),
        }
    }

    /// Tokenize an optional argument list; a missing or empty list has no
    /// tokens.
    pub fn parse_optional(args: Option<&str>) -> Self {
        match args {
            Some(args) if !args.is_empty() => Self::parse(args),
            _ => Self::default(),
        }
    }

    /// Get the tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true if any token is the background flag.
    pub fn has_background(&self) -> bool {
        self.iter().any(is_background_flag)
    }
}

/// The `BG` token, compared after normalization.
pub(crate) fn is_background_flag(token: &str) -> bool {
    token == "BG"
}
