//! The translation entry points.

use std::borrow::Cow;

use crate::directive::DirectiveKind;
use crate::parser::run_pass;
use crate::sequence::RESET;

/// Literal reset directive, replaced after all directive passes.
const RESET_DIRECTIVE: &str = "{RESET}";

/// Translate all directives in `input` and append a reset.
///
/// Passes run in a fixed order: basic colors, 256 colors, RGB, hex, and
/// finally the literal `{RESET}` replacement. Directives that cannot be
/// handled stay in the output verbatim. The trailing reset is always
/// appended, so translating twice is not a no-op.
///
/// # Examples
///
/// ```
/// use warna_markup::translate_str;
///
/// assert_eq!(translate_str("{RED}hi"), "\x1b[31mhi\x1b[0m");
/// assert_eq!(translate_str("{NOPE}"), "{NOPE}\x1b[0m");
/// ```
pub fn translate_str(input: &str) -> String {
    let mut text = input.to_string();
    for kind in DirectiveKind::ALL {
        let replaced = run_pass(kind, &text).into_owned();
        text = replaced;
    }

    let mut output = text.replace(RESET_DIRECTIVE, RESET);
    output.push_str(RESET);
    output
}

/// Values that [`translate`] accepts.
///
/// Text types are translated into a `String`. Everything else is handed
/// back untouched, so callers can translate values generically.
pub trait Translate {
    /// The translated value.
    type Output;

    /// Translate this value.
    fn translate(self) -> Self::Output;
}

/// Translate a value: text is rewritten, anything else passes through.
///
/// # Examples
///
/// ```
/// use warna_markup::translate;
///
/// assert_eq!(translate("{COLOR(200,BG)}"), "\x1b[48;5;200m\x1b[0m");
/// assert_eq!(translate(42), 42);
/// ```
pub fn translate<T: Translate>(input: T) -> T::Output {
    input.translate()
}

impl Translate for &str {
    type Output = String;

    fn translate(self) -> String {
        translate_str(self)
    }
}

impl Translate for String {
    type Output = String;

    fn translate(self) -> String {
        translate_str(&self)
    }
}

impl Translate for &String {
    type Output = String;

    fn translate(self) -> String {
        translate_str(self)
    }
}

impl Translate for Cow<'_, str> {
    type Output = String;

    fn translate(self) -> String {
        translate_str(&self)
    }
}

impl Translate for Box<str> {
    type Output = String;

    fn translate(self) -> String {
        translate_str(&self)
    }
}

macro_rules! passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Translate for $ty {
                type Output = $ty;

                fn translate(self) -> $ty {
                    self
                }
            }
        )*
    };
}

passthrough!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
);

impl<T: Translate<Output = T>> Translate for Option<T> {
    type Output = Option<T>;

    fn translate(self) -> Option<T> {
        self
    }
}
