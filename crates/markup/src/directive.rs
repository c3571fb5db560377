//! Parsed directives.
//!
//! A [`Directive`] is the typed form of one brace directive such as
//! `{CYAN(B,BG)}` or `{HEX(#FF00AA)}`. It lives only for the duration of a
//! single substitution.

use crate::color::{Color, Layer};
use crate::decimal::Decimal;
use crate::error::DirectiveError;
use crate::sequence::EscapeSequence;
use crate::style::Modifier;

/// The four directive grammars, in the order their passes run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `{NAME}` or `{NAME(params)}` with a basic color name.
    Basic,
    /// `{COLOR(n)}` or `{COLOR(n,BG)}`.
    Indexed,
    /// `{RGB(r,g,b)}` or `{RGB(r,g,b,BG)}`.
    Rgb,
    /// `{HEX(#rrggbb)}` or `{HEX(rrggbb,BG)}`.
    Hex,
}

impl DirectiveKind {
    /// All kinds in pass order.
    pub const ALL: [DirectiveKind; 4] = [
        DirectiveKind::Basic,
        DirectiveKind::Indexed,
        DirectiveKind::Rgb,
        DirectiveKind::Hex,
    ];

    /// Short name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            DirectiveKind::Basic => "basic",
            DirectiveKind::Indexed => "256-color",
            DirectiveKind::Rgb => "rgb",
            DirectiveKind::Hex => "hex",
        }
    }
}

/// A successfully parsed directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// The selected color.
    pub color: Color,
    /// Foreground or background.
    pub layer: Layer,
    /// Style modifiers, in the order they were written.
    pub modifiers: Vec<Modifier>,
}

impl Directive {
    /// Create a directive without modifiers.
    pub fn new(color: Color, layer: Layer) -> Self {
        Self {
            color,
            layer,
            modifiers: Vec::new(),
        }
    }

    /// Add a modifier after the existing ones.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Parse a single, complete directive.
    ///
    /// Kinds are tried in pass order. If none accepts the text, the error
    /// from the last kind whose syntax matched is returned, which is the
    /// reason the translator would leave this text alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use warna_markup::{Color, Decimal, Directive, DirectiveError, Layer};
    ///
    /// let directive = Directive::parse("{COLOR(200,BG)}").unwrap();
    /// assert_eq!(directive.color, Color::Indexed(Decimal::from(200i64)));
    /// assert_eq!(directive.layer, Layer::Background);
    ///
    /// let err = Directive::parse("{RGB(1,2)}").unwrap_err();
    /// assert_eq!(err, DirectiveError::WrongArity(2));
    /// ```
    pub fn parse(text: &str) -> Result<Self, DirectiveError> {
        crate::parser::parse_directive(text)
    }

    /// Build the escape sequence: color parameters first, then modifiers.
    pub fn to_sequence(&self) -> EscapeSequence {
        let mut params = self.color.params(self.layer);
        params.extend(self.modifiers.iter().map(|m| Decimal::from(m.code())));
        EscapeSequence::new(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_before_modifiers() {
        let directive = Directive::new(Color::Basic(36), Layer::Background)
            .with_modifier(Modifier::Bold);
        assert_eq!(directive.to_sequence(), EscapeSequence::from_codes(&[46, 1]));
    }

    #[test]
    fn modifiers_keep_order_and_duplicates() {
        let directive = Directive::new(Color::Basic(31), Layer::Foreground)
            .with_modifier(Modifier::Underline)
            .with_modifier(Modifier::Bold)
            .with_modifier(Modifier::Bold);
        assert_eq!(
            directive.to_sequence(),
            EscapeSequence::from_codes(&[31, 4, 1, 1])
        );
    }

    #[test]
    fn kinds_in_pass_order() {
        let names: Vec<_> = DirectiveKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["basic", "256-color", "rgb", "hex"]);
    }
}
