//! Brace directive translator for terminal text styling.
//!
//! This crate rewrites directives like `{GREEN(B)}Hello{RESET}` into ANSI
//! SGR escape sequences and appends a trailing reset, so styling never
//! leaks past the end of one formatted string.
//!
//! # Overview
//!
//! - `{RED}` - basic foreground color (`BLACK`, `RED`, `GREEN`, `YELLOW`,
//!   `BLUE`, `MAGENTA`, `CYAN`, `WHITE`)
//! - `{RED(BG)}` - basic background color
//! - `{CYAN(B,U,BG)}` - color plus bold (`B`), italic (`I`), underline (`U`)
//! - `{COLOR(82)}` / `{COLOR(82,BG)}` - 256-color palette
//! - `{RGB(255,120,20)}` / `{RGB(255,120,20,BG)}` - truecolor
//! - `{HEX(#FF00AA)}` / `{HEX(FF00AA,BG)}` - truecolor from hex
//! - `{RESET}` - reset all attributes
//!
//! Malformed or unknown directives are never an error: they are left in the
//! output as literal text.
//!
//! # Usage
//!
//! ```
//! use warna_markup::{translate, Directive, EscapeSequence};
//!
//! let out = translate("{CYAN(B,BG)}Hello");
//! assert_eq!(out, "\x1b[46;1mHello\x1b[0m");
//!
//! // Inspect a single directive
//! let directive = Directive::parse("{HEX(#FF00AA)}").unwrap();
//! assert_eq!(directive.to_sequence(), EscapeSequence::from_codes(&[38, 2, 255, 0, 170]));
//! ```

pub mod color;
pub mod decimal;
pub mod directive;
pub mod error;
pub mod parser;
pub mod sequence;
pub mod style;
pub mod translate;

// Re-export main types at crate root
pub use color::{COLORS, Color, Layer};
pub use decimal::Decimal;
pub use directive::{Directive, DirectiveKind};
pub use error::DirectiveError;
pub use sequence::{EscapeSequence, RESET};
pub use style::{Modifier, STYLES};
pub use translate::{Translate, translate, translate_str};
