//! Handlers for the four directive grammars.
//!
//! Each handler receives the captured parts of one match and either builds a
//! [`Directive`] or reports why it cannot. Unrecognized tokens are ignored
//! wherever the grammar allows it.

use crate::color::{Color, Layer};
use crate::decimal::Decimal;
use crate::directive::Directive;
use crate::error::DirectiveError;
use crate::style::Modifier;

use super::params::{Params, is_background_flag};

/// Handle `{NAME}` / `{NAME(params)}`.
///
/// `BG` selects the background variant no matter how often it appears.
/// Style letters are appended in the order written. Anything else is
/// ignored.
pub fn basic(name: &str, args: Option<&str>) -> Result<Directive, DirectiveError> {
    let color =
        Color::named(name).ok_or_else(|| DirectiveError::UnknownColor(name.to_string()))?;

    let mut directive = Directive::new(color, Layer::Foreground);
    for token in Params::parse_optional(args).iter() {
        if is_background_flag(token) {
            directive.layer = Layer::Background;
        } else if let Some(modifier) = Modifier::from_abbrev(token) {
            directive.modifiers.push(modifier);
        }
    }

    Ok(directive)
}

/// Handle `{COLOR(params)}`.
///
/// The first token made only of ASCII digits is the palette index. It is
/// not range-checked, however large.
pub fn indexed(args: &str) -> Result<Directive, DirectiveError> {
    let params = Params::parse(args);

    let index = params
        .iter()
        .find_map(parse_index)
        .ok_or_else(|| DirectiveError::MissingIndex(args.to_string()))?;

    Ok(Directive::new(
        Color::Indexed(index),
        Layer::from_background(params.has_background()),
    ))
}

/// Handle `{RGB(params)}`.
///
/// Takes exactly three integer components, optionally followed by a fourth
/// token that selects the background only when it is `BG`. Components may be
/// signed, may use `_` between digits, and are never clamped.
pub fn rgb(args: &str) -> Result<Directive, DirectiveError> {
    let params = Params::parse(args);
    let tokens = params.tokens();

    if !(3..=4).contains(&tokens.len()) {
        return Err(DirectiveError::WrongArity(tokens.len()));
    }

    let r = parse_component(&tokens[0])?;
    let g = parse_component(&tokens[1])?;
    let b = parse_component(&tokens[2])?;
    let background = tokens.get(3).is_some_and(|t| is_background_flag(t));

    Ok(Directive::new(
        Color::Rgb(r, g, b),
        Layer::from_background(background),
    ))
}

/// Handle `{HEX(params)}`.
///
/// The first token that is six hex digits, with or without a `#` prefix,
/// selects the code; later candidates are ignored. Malformed tokens are
/// skipped.
pub fn hex(args: &str) -> Result<Directive, DirectiveError> {
    let params = Params::parse(args);

    let code = params
        .iter()
        .find_map(hex_candidate)
        .ok_or_else(|| DirectiveError::MissingHex(args.to_string()))?;
    let (r, g, b) = decode_hex(code)?;

    Ok(Directive::new(
        Color::rgb(r, g, b),
        Layer::from_background(params.has_background()),
    ))
}

fn parse_index(token: &str) -> Option<Decimal> {
    Decimal::parse_digits(token)
}

fn parse_component(token: &str) -> Result<Decimal, DirectiveError> {
    Decimal::parse(token).ok_or_else(|| DirectiveError::InvalidComponent(token.to_string()))
}

fn hex_candidate(token: &str) -> Option<&str> {
    let code = token.strip_prefix('#').unwrap_or(token);
    is_hex_code(code).then_some(code)
}

fn is_hex_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_hexdigit())
}

fn decode_hex(code: &str) -> Result<(u8, u8, u8), DirectiveError> {
    if !is_hex_code(code) {
        return Err(DirectiveError::InvalidHex(code.to_string()));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&code[i..i + 2], 16)
            .map_err(|_| DirectiveError::InvalidHex(code.to_string()))
    };
    Ok((byte(0)?, byte(2)?, byte(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_of(result: Result<Directive, DirectiveError>) -> Vec<String> {
        result
            .unwrap()
            .to_sequence()
            .params()
            .iter()
            .map(Decimal::to_string)
            .collect()
    }

    #[test]
    fn basic_without_params() {
        assert_eq!(params_of(basic("RED", None)), vec!["31"]);
        assert_eq!(params_of(basic("red", None)), vec!["31"]);
    }

    #[test]
    fn basic_background_is_idempotent() {
        assert_eq!(params_of(basic("RED", Some("BG"))), vec!["41"]);
        assert_eq!(params_of(basic("RED", Some("BG,BG,bg"))), vec!["41"]);
    }

    #[test]
    fn basic_background_after_style() {
        assert_eq!(params_of(basic("CYAN", Some("B, BG"))), vec!["46", "1"]);
        assert_eq!(params_of(basic("CYAN", Some("BG, B"))), vec!["46", "1"]);
    }

    #[test]
    fn basic_ignores_unknown_tokens() {
        assert_eq!(
            params_of(basic("GREEN", Some("X, B, 42, U"))),
            vec!["32", "1", "4"]
        );
    }

    #[test]
    fn basic_empty_params() {
        assert_eq!(params_of(basic("BLUE", Some(""))), vec!["34"]);
    }

    #[test]
    fn basic_unknown_name() {
        assert_eq!(
            basic("ORANGE", None),
            Err(DirectiveError::UnknownColor("ORANGE".into()))
        );
    }

    #[test]
    fn indexed_foreground_and_background() {
        assert_eq!(params_of(indexed("82")), vec!["38", "5", "82"]);
        assert_eq!(params_of(indexed("200, bg")), vec!["48", "5", "200"]);
        assert_eq!(params_of(indexed("BG,7")), vec!["48", "5", "7"]);
    }

    #[test]
    fn indexed_first_integer_wins() {
        assert_eq!(params_of(indexed("12, 34")), vec!["38", "5", "12"]);
    }

    #[test]
    fn indexed_passes_out_of_range_through() {
        assert_eq!(params_of(indexed("999")), vec!["38", "5", "999"]);
        assert_eq!(params_of(indexed("007")), vec!["38", "5", "7"]);
    }

    #[test]
    fn indexed_wider_than_machine_integers() {
        assert_eq!(
            params_of(indexed("99999999999999999999")),
            vec!["38", "5", "99999999999999999999"]
        );
        assert_eq!(
            params_of(indexed("00099999999999999999999999, bg")),
            vec!["48", "5", "99999999999999999999999"]
        );
    }

    #[test]
    fn indexed_rejects_signed_separated_and_missing() {
        assert!(matches!(indexed("-1"), Err(DirectiveError::MissingIndex(_))));
        assert!(matches!(indexed("+1"), Err(DirectiveError::MissingIndex(_))));
        assert!(matches!(indexed("1_0"), Err(DirectiveError::MissingIndex(_))));
        assert!(matches!(indexed("BG"), Err(DirectiveError::MissingIndex(_))));
        assert!(matches!(indexed(""), Err(DirectiveError::MissingIndex(_))));
    }

    #[test]
    fn rgb_three_and_four() {
        assert_eq!(params_of(rgb("255,120,20")), vec!["38", "2", "255", "120", "20"]);
        assert_eq!(
            params_of(rgb("120, 40, 255, bg")),
            vec!["48", "2", "120", "40", "255"]
        );
    }

    #[test]
    fn rgb_fourth_token_other_than_bg_is_ignored() {
        assert_eq!(params_of(rgb("1,2,3,X")), vec!["38", "2", "1", "2", "3"]);
        assert_eq!(params_of(rgb("1,2,3,")), vec!["38", "2", "1", "2", "3"]);
    }

    #[test]
    fn rgb_no_clamping() {
        assert_eq!(params_of(rgb("300,-5,+7")), vec!["38", "2", "300", "-5", "7"]);
        assert_eq!(params_of(rgb("-0,00,010")), vec!["38", "2", "0", "0", "10"]);
    }

    #[test]
    fn rgb_wider_than_machine_integers() {
        assert_eq!(
            params_of(rgb("99999999999999999999,0,0")),
            vec!["38", "2", "99999999999999999999", "0", "0"]
        );
        assert_eq!(
            params_of(rgb("1,-99999999999999999999,2,BG")),
            vec!["48", "2", "1", "-99999999999999999999", "2"]
        );
    }

    #[test]
    fn rgb_digit_separators() {
        assert_eq!(params_of(rgb("1_0,2,3")), vec!["38", "2", "10", "2", "3"]);
        assert_eq!(
            rgb("1__0,2,3"),
            Err(DirectiveError::InvalidComponent("1__0".into()))
        );
        assert_eq!(
            rgb("_1,2,3"),
            Err(DirectiveError::InvalidComponent("_1".into()))
        );
    }

    #[test]
    fn rgb_wrong_arity() {
        assert_eq!(rgb("1,2"), Err(DirectiveError::WrongArity(2)));
        assert_eq!(rgb("1,2,3,BG,5"), Err(DirectiveError::WrongArity(5)));
        assert_eq!(rgb(""), Err(DirectiveError::WrongArity(1)));
    }

    #[test]
    fn rgb_invalid_component() {
        assert_eq!(
            rgb("1,X,3"),
            Err(DirectiveError::InvalidComponent("X".into()))
        );
        assert_eq!(
            rgb("BG,1,2,3"),
            Err(DirectiveError::InvalidComponent("BG".into()))
        );
    }

    #[test]
    fn hex_prefixed_and_bare() {
        assert_eq!(params_of(hex("#FF00AA")), vec!["38", "2", "255", "0", "170"]);
        assert_eq!(
            params_of(hex("ff00aa, bg")),
            vec!["48", "2", "255", "0", "170"]
        );
    }

    #[test]
    fn hex_first_candidate_wins() {
        assert_eq!(params_of(hex("#010203, #040506")), vec!["38", "2", "1", "2", "3"]);
        assert_eq!(
            params_of(hex("BG, 0A0B0C, FFFFFF")),
            vec!["48", "2", "10", "11", "12"]
        );
    }

    #[test]
    fn hex_skips_malformed_prefixed_tokens() {
        assert_eq!(
            params_of(hex("#ZZZZZZ, FF00AA")),
            vec!["38", "2", "255", "0", "170"]
        );
        assert_eq!(params_of(hex("#FFF, #, #00FF00")), vec!["38", "2", "0", "255", "0"]);
    }

    #[test]
    fn hex_missing_candidate() {
        assert!(matches!(hex("ZZZZZZ"), Err(DirectiveError::MissingHex(_))));
        assert!(matches!(hex("#ZZZZZZ"), Err(DirectiveError::MissingHex(_))));
        assert!(matches!(hex("#FFF"), Err(DirectiveError::MissingHex(_))));
        assert!(matches!(hex("#"), Err(DirectiveError::MissingHex(_))));
        assert!(matches!(hex("FFF"), Err(DirectiveError::MissingHex(_))));
        assert!(matches!(hex("BG"), Err(DirectiveError::MissingHex(_))));
    }
}
