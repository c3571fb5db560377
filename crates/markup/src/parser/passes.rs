//! The scan-and-replace passes.
//!
//! Each directive kind owns one pattern. A pass replaces every
//! non-overlapping match, left to right, with the handler's escape sequence
//! or, when the handler fails, with the matched text itself. Passes never
//! see each other's output as directives, so kinds cannot be nested.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::directive::{Directive, DirectiveKind};
use crate::error::DirectiveError;

use super::handlers;

/// Patterns indexed by [`DirectiveKind`], unanchored for scanning.
static SCAN: Lazy<[Option<Regex>; 4]> =
    Lazy::new(|| DirectiveKind::ALL.map(|kind| compile(pattern(kind))));

/// The same patterns anchored to the whole input, for [`parse_directive`].
static WHOLE: Lazy<[Option<Regex>; 4]> = Lazy::new(|| {
    DirectiveKind::ALL.map(|kind| compile(&format!("^(?:{})$", pattern(kind))))
});

/// Color names match in any case; the extended keywords only in uppercase.
fn pattern(kind: DirectiveKind) -> &'static str {
    match kind {
        DirectiveKind::Basic => r"\{([A-Za-z]+)(?:\((.*?)\))?\}",
        DirectiveKind::Indexed => r"\{COLOR\((.*?)\)\}",
        DirectiveKind::Rgb => r"\{RGB\((.*?)\)\}",
        DirectiveKind::Hex => r"\{HEX\((.*?)\)\}",
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("directive pattern {:?} failed to compile: {}", pattern, e);
            None
        }
    }
}

fn index(kind: DirectiveKind) -> usize {
    match kind {
        DirectiveKind::Basic => 0,
        DirectiveKind::Indexed => 1,
        DirectiveKind::Rgb => 2,
        DirectiveKind::Hex => 3,
    }
}

/// Route one match to its handler.
fn handle(kind: DirectiveKind, caps: &Captures<'_>) -> Result<Directive, DirectiveError> {
    let group = |i: usize| caps.get(i).map(|m| m.as_str());
    let args = group(1).unwrap_or_default();

    match kind {
        DirectiveKind::Basic => handlers::basic(args, group(2)),
        DirectiveKind::Indexed => handlers::indexed(args),
        DirectiveKind::Rgb => handlers::rgb(args),
        DirectiveKind::Hex => handlers::hex(args),
    }
}

/// Run a single pass over `text`.
///
/// Returns the input unchanged (borrowed) when nothing matched.
pub fn run_pass(kind: DirectiveKind, text: &str) -> Cow<'_, str> {
    let Some(re) = SCAN[index(kind)].as_ref() else {
        return Cow::Borrowed(text);
    };

    re.replace_all(text, |caps: &Captures<'_>| match handle(kind, caps) {
        Ok(directive) => directive.to_sequence().to_string(),
        Err(e) => {
            let matched = caps.get(0).map_or("", |m| m.as_str());
            log::trace!("{} directive left as text: {:?} ({})", kind.name(), matched, e);
            matched.to_string()
        }
    })
}

/// Parse `text` as exactly one directive.
pub fn parse_directive(text: &str) -> Result<Directive, DirectiveError> {
    let mut last_err = None;

    for kind in DirectiveKind::ALL {
        let Some(caps) = WHOLE[index(kind)].as_ref().and_then(|re| re.captures(text)) else {
            continue;
        };
        match handle(kind, &caps) {
            Ok(directive) => return Ok(directive),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| DirectiveError::NotADirective(text.to_string())))
}
